//! Run the terminal UI in-process.

use std::path::Path;

use tfc_tui::app::TuiApp;

/// Load the bank and hand it to the terminal UI.
pub fn run(file: &Path, path: usize) -> Result<(), String> {
    let quiz = super::start_quiz(file, path)?;
    tfc_tui::terminal::run(TuiApp::new(quiz))
}
