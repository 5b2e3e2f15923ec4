use std::fs;
use std::path::Path;

use tfc_core::config::DEFAULT_QUESTION_FILE;
use tfc_core::{Document, LearningPath, Question};

pub fn run(dir: &Path) -> Result<(), String> {
    let file = dir.join(DEFAULT_QUESTION_FILE);

    if file.exists() {
        return Err(format!("'{}' already exists", file.display()));
    }

    fs::create_dir_all(dir).map_err(|e| format!("cannot create directory: {e}"))?;

    let template = Document::new("My Certification").with_path(
        LearningPath::new("First learning path")
            .with_question(Question::new(
                "Which command checks a question bank for mistakes?",
                ["tfc list", "tfc check", "tfc show"],
                "tfc check",
                "`tfc check` validates every question and reports problems.",
            ))
            .with_question(Question::new(
                "Where does the correct answer have to appear?",
                ["In the answers list", "In the explanation"],
                "In the answers list",
                "The correct answer must be one of the listed answers.",
            )),
    );

    let json = template
        .to_json_pretty()
        .map_err(|e| format!("cannot serialize template: {e}"))?;
    fs::write(&file, json + "\n")
        .map_err(|e| format!("cannot write {}: {e}", file.display()))?;

    println!("Created {}", file.display());
    println!();
    println!("Get started:");
    println!("  # Edit {DEFAULT_QUESTION_FILE} to add learning paths and questions");
    println!("  tfc check    # Validate the question bank");
    println!("  tfc list     # List learning paths");
    println!("  tfc quiz     # Take the quiz");

    Ok(())
}
