//! Cleancode CLI: strip comments and blank lines from a source tree into one text file.

use anyhow::Result;
use clap::Parser;
use cleancode::engine::arg_parser::Cli;
use cleancode::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
