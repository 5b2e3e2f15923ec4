pub mod check;
pub mod init;
pub mod list;
pub mod quiz;
pub mod show;
pub mod tui;

use std::path::Path;

use colored::Colorize;
use tfc_core::diagnostics::has_errors;
use tfc_core::{Diagnostic, Document, QuizConfig, QuizController, Severity};

/// Read and validate a question bank, printing diagnostics to stderr.
/// Returns the document if there are no errors.
fn load(file: &Path) -> Result<Document, String> {
    let document = Document::from_path(file).map_err(|e| e.to_string())?;
    let diagnostics = document.validate();
    print_diagnostics(&diagnostics);

    if has_errors(&diagnostics) {
        Err("question bank has errors".into())
    } else {
        Ok(document)
    }
}

/// Load a bank into a controller, printing its diagnostics once, and start
/// on the 1-based learning path `path`.
fn start_quiz(file: &Path, path: usize) -> Result<QuizController, String> {
    let mut quiz = QuizController::new(QuizConfig::default().with_question_file(file));
    let loaded = quiz.load_configured();
    print_diagnostics(quiz.diagnostics());
    loaded.map_err(|e| e.to_string())?;

    tfc_tui::launch::start_path(&mut quiz, path)?;
    Ok(quiz)
}

/// Print diagnostics with a trailing count line.
fn print_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }

    for d in diagnostics {
        let line = d.to_string();
        match d.severity {
            Severity::Error => eprintln!("  {}", line.red()),
            Severity::Warning => eprintln!("  {}", line.yellow()),
        }
    }

    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    let warnings = diagnostics.len() - errors;
    eprintln!(
        "  {} error{}, {} warning{}",
        errors,
        if errors == 1 { "" } else { "s" },
        warnings,
        if warnings == 1 { "" } else { "s" },
    );
}

/// Convert a 1-based index from the command line.
fn zero_based(n: usize, what: &str) -> Result<usize, String> {
    n.checked_sub(1)
        .ok_or_else(|| format!("{what} numbers start at 1"))
}
