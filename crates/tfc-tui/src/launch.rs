//! Startup helpers shared by the `tfc-tui` binary and `tfc tui`.

use tfc_core::{Document, QuizController};

/// Start the quiz on the 1-based learning path `number`.
///
/// A controller whose bank failed to load is left alone so the error pane
/// can show the failure.
pub fn start_path(quiz: &mut QuizController, number: usize) -> Result<(), String> {
    let index = number
        .checked_sub(1)
        .ok_or_else(|| "path numbers start at 1".to_string())?;
    let Some(count) = quiz.document().map(Document::path_count) else {
        return Ok(());
    };
    quiz.select_learning_path(index)
        .map(drop)
        .map_err(|_| format!("no learning path {number} (the bank has {count})"))
}
