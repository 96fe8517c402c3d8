mod cli;
mod decompose_cmd;
mod families_cmd;
mod logging;
mod roundtrip_cmd;
mod synth;

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
        Command::Families => families_cmd::run(),
        Command::Decompose(args) => decompose_cmd::run(args),
        Command::Roundtrip(args) => roundtrip_cmd::run(args),
    }
}
