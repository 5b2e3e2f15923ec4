use std::path::Path;

pub fn run(file: &Path) -> Result<(), String> {
    let document = super::load(file)?;

    println!(
        "  All checks passed for '{}'.",
        document.certification_title
    );
    println!(
        "  {} learning paths, {} questions",
        document.path_count(),
        document.question_count()
    );

    Ok(())
}
