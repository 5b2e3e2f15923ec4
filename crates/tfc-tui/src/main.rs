//! Standalone TUI binary for trainforcert quizzes.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::warn;
use tfc_core::{QuizConfig, QuizController};

#[derive(Parser)]
#[command(
    name = "tfc-tui",
    about = "Practice certification questions in the terminal",
    version
)]
struct Args {
    /// Question bank to load
    #[arg(short, long, default_value = tfc_core::config::DEFAULT_QUESTION_FILE)]
    file: PathBuf,

    /// Learning path to start with (1-based)
    #[arg(short, long, default_value = "1")]
    path: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = QuizConfig::default().with_question_file(args.file);

    // A failed load is shown in the quiz pane.
    let mut quiz = QuizController::new(config);
    let _ = quiz.load_configured();
    for d in quiz.diagnostics() {
        warn!("{d}");
    }

    if let Err(e) = tfc_tui::launch::start_path(&mut quiz, args.path) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    if let Err(e) = tfc_tui::terminal::run(tfc_tui::app::TuiApp::new(quiz)) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
