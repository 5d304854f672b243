//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    explicit_path: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Path => {
            println!("{}", Config::resolve_path(explicit_path)?.display());
        }
        ConfigAction::Init { preset, force } => {
            let path = Config::resolve_path(explicit_path)?;
            if path.exists() && !force {
                return Err(CliError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            let fresh = Config::default().with_preset(&preset)?;
            fresh.save_to(&path)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote {} configuration to {}", preset, path.display()))
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use interlink_pipeline::PipelineConfig;
    use tempfile::tempdir;

    fn init(preset: &str, force: bool) -> ConfigArgs {
        ConfigArgs {
            action: ConfigAction::Init {
                preset: preset.to_string(),
                force,
            },
        }
    }

    #[test]
    fn test_init_writes_preset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        execute_config(init("strict", false), &Config::default(), Some(&path), &formatter).unwrap();
        let written = Config::load_from(&path).unwrap();
        assert_eq!(written.pipeline, PipelineConfig::strict());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        execute_config(init("default", false), &Config::default(), Some(&path), &formatter).unwrap();
        let again = execute_config(init("lenient", false), &Config::default(), Some(&path), &formatter);
        assert!(matches!(again, Err(CliError::Config(_))));

        execute_config(init("lenient", true), &Config::default(), Some(&path), &formatter).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().pipeline, PipelineConfig::lenient());
    }
}
