//! Command-line interface definitions.

pub mod check;
pub mod generate;
pub mod init;
pub mod output;
pub mod stats;
pub mod validate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Adsmith - deterministic synthetic marketing data generation.
#[derive(Parser, Debug)]
#[command(name = "adsmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a commented starter config file
    Init(InitArgs),

    /// Generate a synthetic dataset
    Generate(GenerateArgs),

    /// Check a dataset file against the generator's invariants
    Validate(ValidateArgs),

    /// Summarize a dataset per channel
    Stats(StatsArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `adsmith check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `init` subcommand.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the config file
    #[arg(short, long, default_value = "config.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to configuration file (built-in defaults apply when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the configured RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the configured output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write star-schema CSVs (dim_date, dim_channel, dim_campaign,
    /// fact_performance)
    #[arg(long)]
    pub star_schema: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `validate` subcommand.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Dataset CSV to check
    pub file: PathBuf,
}

/// Arguments for the `stats` subcommand.
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Dataset CSV to summarize
    pub file: PathBuf,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
