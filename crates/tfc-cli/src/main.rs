//! CLI frontend for trainforcert question banks.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tfc_core::config::DEFAULT_QUESTION_FILE;

#[derive(Parser)]
#[command(
    name = "tfc",
    about = "trainforcert: practice certification questions",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a template question bank
    Init {
        /// Directory to create it in
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Validate a question bank and report diagnostics
    Check {
        /// Question bank to check
        #[arg(short, long, default_value = DEFAULT_QUESTION_FILE)]
        file: PathBuf,
    },

    /// List the learning paths of a question bank
    List {
        /// Question bank to read
        #[arg(short, long, default_value = DEFAULT_QUESTION_FILE)]
        file: PathBuf,
    },

    /// Show one question with its answer and explanation
    Show {
        /// Learning path (1-based)
        #[arg(short, long, default_value = "1")]
        path: usize,

        /// Question within the path (1-based)
        #[arg(short, long, default_value = "1")]
        question: usize,

        /// Question bank to read
        #[arg(short, long, default_value = DEFAULT_QUESTION_FILE)]
        file: PathBuf,
    },

    /// Take a quiz line by line on stdin
    Quiz {
        /// Learning path to start with (1-based)
        #[arg(short, long, default_value = "1")]
        path: usize,

        /// Question bank to read
        #[arg(short, long, default_value = DEFAULT_QUESTION_FILE)]
        file: PathBuf,
    },

    /// Take a quiz in the terminal UI
    Tui {
        /// Learning path to start with (1-based)
        #[arg(short, long, default_value = "1")]
        path: usize,

        /// Question bank to read
        #[arg(short, long, default_value = DEFAULT_QUESTION_FILE)]
        file: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { dir } => commands::init::run(&dir),
        Commands::Check { file } => commands::check::run(&file),
        Commands::List { file } => commands::list::run(&file),
        Commands::Show {
            path,
            question,
            file,
        } => commands::show::run(&file, path, question),
        Commands::Quiz { path, file } => commands::quiz::run(&file, path),
        Commands::Tui { path, file } => commands::tui::run(&file, path),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
