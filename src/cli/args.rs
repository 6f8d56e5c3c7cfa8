//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Forward-chaining rule evaluation over JSON payloads.
#[derive(Parser, Debug)]
#[command(name = "u-infer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the sample rules over a JSON payload and print the result.
    Run(RunArgs),

    /// Check whether an age is old enough.
    Age(AgeArgs),
}

/// Engine settings shared by every command.
#[derive(Parser, Debug)]
pub struct EngineArgs {
    /// JSON file with engine configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the cycle ceiling.
    #[arg(long)]
    pub max_cycles: Option<u64>,
}

/// Arguments for the run command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Payload file. Reads stdin when omitted.
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Pretty-print the resulting payload.
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments for the age command.
#[derive(Parser, Debug)]
pub struct AgeArgs {
    /// Age to check. Prompts on stdin when omitted.
    #[arg(long)]
    pub age: Option<i64>,

    /// State code carried on the payload.
    #[arg(long, default_value = "SP")]
    pub state: String,

    #[command(flatten)]
    pub engine: EngineArgs,
}
