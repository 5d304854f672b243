//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use interlink_expansion::ExpansionStrategy;
use std::path::PathBuf;

/// Interlink - select curated molecular interaction evidence for export.
#[derive(Debug, Parser)]
#[command(name = "interlink")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "INTERLINK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (pair keys only)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Expand, cluster and select interaction evidence for export
    Export(ExportArgs),

    /// Expand interaction records into binary interactions
    Expand(ExpandArgs),

    /// Find the lowest common ancestor of ontology terms
    Lca(LcaArgs),

    /// Show or initialise the configuration file
    Config(ConfigArgs),
}

/// Expansion strategy argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    /// Binary and self interactions only
    #[value(name = "none")]
    Binary,
    /// Bait to every other participant
    Spoke,
    /// Spoke, with a surrogate bait when none is curated
    SpokeWithoutBait,
    /// Every participant pair
    Matrix,
}

impl From<StrategyArg> for ExpansionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Binary => ExpansionStrategy::None,
            StrategyArg::Spoke => ExpansionStrategy::Spoke,
            StrategyArg::SpokeWithoutBait => ExpansionStrategy::SpokeWithoutBait,
            StrategyArg::Matrix => ExpansionStrategy::Matrix,
        }
    }
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Interaction records (JSON array)
    pub records: PathBuf,

    /// Ontology terms (JSON array of {id, name, parents})
    #[arg(short, long)]
    pub ontology: Option<PathBuf>,

    /// Export annotations per detection method (JSON object of term to yes/no/count)
    #[arg(short, long)]
    pub annotations: Option<PathBuf>,

    /// Configuration preset replacing the pipeline section of the config file
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Expansion strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Score threshold for the score rule
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Expand and cluster in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Include rejected and downgraded clusters in the output
    #[arg(long)]
    pub show_rejected: bool,
}

/// Arguments for the expand command.
#[derive(Debug, Parser)]
pub struct ExpandArgs {
    /// Interaction records (JSON array)
    pub records: PathBuf,

    /// Expansion strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,
}

/// Arguments for the lca command.
#[derive(Debug, Parser)]
pub struct LcaArgs {
    /// Ontology terms (JSON array of {id, name, parents})
    #[arg(short, long)]
    pub ontology: PathBuf,

    /// Terms to find the common ancestor of
    #[arg(required = true, num_args = 1..)]
    pub terms: Vec<String>,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Print the configuration file path
    Path,

    /// Write a configuration file from a preset
    Init {
        /// Preset name (default, strict or lenient)
        #[arg(short, long, default_value = "default")]
        preset: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
