mod analyze_cmd;
mod bootstrap_cmd;
mod cli;
mod config;
mod convert;
mod correlate_cmd;
mod input;
mod logging;
mod permute_cmd;
mod seasonal_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Analyze(args) => analyze_cmd::run(args),
        Command::Bootstrap(args) => bootstrap_cmd::run(args),
        Command::Permute(args) => permute_cmd::run(args),
        Command::Correlate(args) => correlate_cmd::run(args),
        Command::Seasonal(args) => seasonal_cmd::run(args),
    }
}
