//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ringlog")]
#[command(version, about = "Bounded, self-rotating append-only log writer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (.toml, .yaml, .yml or .json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of files in the ring (0 = default)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub max_files: Option<i64>,

    /// Lines per file before rotating (0 = default)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub max_lines: Option<i64>,

    /// Prefix for output files
    #[arg(long, global = true)]
    pub prefix: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write each value as its own log line
    Log(LogArgs),

    /// Write a number of generated messages and report the rotation state
    Trial(TrialArgs),

    /// Print the resolved configuration
    ShowConfig,
}

#[derive(Args)]
pub struct LogArgs {
    /// Messages to log
    #[arg(required = true)]
    pub messages: Vec<String>,
}

#[derive(Args)]
pub struct TrialArgs {
    /// Number of messages to write
    #[arg(allow_negative_numbers = true)]
    pub count: i64,

    /// Pick random messages instead of a fixed one
    #[arg(long)]
    pub random: bool,

    /// Fixed message to repeat
    #[arg(long, default_value = "Test", conflicts_with = "random")]
    pub message: String,
}
