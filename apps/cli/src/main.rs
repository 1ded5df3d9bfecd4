//! llmsgen CLI: turn a markdown wiki into llms.txt artifacts.
//!
//! Scans a wiki directory and writes an index (`llms.txt`) and a
//! full-content dump (`llms-full.txt`) next to the pages.

mod commands;

use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
