//! Interlink CLI - expand, cluster and select molecular interaction evidence for export.

use clap::Parser;
use interlink_cli::commands;
use interlink_cli::{Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> interlink_cli::Result<()> {
    let cli = Cli::parse();
    interlink_cli::init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Export(args) => commands::execute_export(args, &config, &formatter)?,
        Command::Expand(args) => commands::execute_expand(args, &config, &formatter)?,
        Command::Lca(args) => commands::execute_lca(args, &formatter)?,
        Command::Config(args) => commands::execute_config(args, &config, cli.config.as_deref(), &formatter)?,
    }

    Ok(())
}
