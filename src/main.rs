mod cli;
mod config;
mod domestic_cmd;
mod international_cmd;
mod logging;
mod render;

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
        Command::International(args) => international_cmd::run(args),
        Command::Domestic(args) => domestic_cmd::run(args),
    }
}
