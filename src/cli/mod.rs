//! CLI argument parsing

mod common;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::defaults;

pub use common::OutputFormat;

/// Tag dumper CLI
#[derive(Parser, Debug)]
#[command(name = "tagu")]
#[command(version)]
#[command(about = "Dump the resource tags of public cloud providers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (error, warn, info, debug, trace)
    #[arg(
        short,
        long,
        global = true,
        env = defaults::LOG_LEVEL_ENV,
        default_value = defaults::LOG_LEVEL
    )]
    pub log_level: String,

    /// Do not show the progress spinner
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dump tags from the AWS cloud provider
    Aws(AwsArgs),
}

#[derive(Args, Debug)]
pub struct AwsArgs {
    /// Input file (default: $TAGU_AWS_CONFIG, $AWS_CONFIG, then ~/input-tags.yaml)
    #[arg(short, long)]
    pub input_file: Option<PathBuf>,

    /// Query only this region for every account, ignoring the input file regions
    #[arg(short, long)]
    pub region: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Print the normalized input and the planned runs without calling AWS
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
