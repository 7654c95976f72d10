//! # ScaleWiz CLI
//!
//! Command-line front end for scoring scale block projects.
//!
//! ## Usage
//!
//! ```bash
//! # Score a project and print the derivation log
//! scalewiz score project.json
//!
//! # Score, then save the log file and the scored project
//! scalewiz score project.json --save --export-csv
//!
//! # Show the data table, tests in natural name order
//! scalewiz show project.json --sort
//!
//! # Check a project before scoring it
//! scalewiz validate project.json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
