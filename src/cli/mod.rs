use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod export;
mod score;
mod show;
mod validate;

/// ScaleWiz - score and report scale block inhibitor tests
#[derive(Parser)]
#[command(name = "scalewiz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every trial and print the derivation log
    Score {
        /// Project JSON file
        #[arg(value_name = "PROJECT")]
        project: PathBuf,

        /// Save the log file and write the results back into the project
        #[arg(short, long)]
        save: bool,

        /// Also write the CSV data table when saving
        #[arg(long)]
        export_csv: bool,

        /// Directory for saved log and data files (defaults to the project's)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print the project's data table
    Show {
        /// Project JSON file
        #[arg(value_name = "PROJECT")]
        project: PathBuf,

        /// Order tests naturally by name instead of project order
        #[arg(long)]
        sort: bool,
    },

    /// Export the data table as CSV
    Export {
        /// Project JSON file
        #[arg(value_name = "PROJECT")]
        project: PathBuf,

        /// Output CSV path (defaults next to the project file)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Check a project file for problems that affect scoring
    Validate {
        /// Project JSON file
        #[arg(value_name = "PROJECT")]
        project: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score {
            project,
            save,
            export_csv,
            output_dir,
            config,
        } => score::run(project, save, export_csv, output_dir, config),
        Commands::Show { project, sort } => show::run(project, sort),
        Commands::Export { project, output } => export::run(project, output),
        Commands::Validate { project } => validate::run(project),
    }
}
