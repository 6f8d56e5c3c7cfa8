//! u-infer CLI - run the sample rule set over JSON payloads.

use anyhow::Result;
use clap::Parser;
use u_infer::cli::{commands, logging, Cli, Command};

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => commands::run(args),
        Command::Age(args) => commands::age(args),
    }
}
