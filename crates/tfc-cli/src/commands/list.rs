use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(file: &Path) -> Result<(), String> {
    let document = super::load(file)?;

    println!("  {}", document.certification_title);
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Learning path", "Questions"]);

    for (i, path) in document.learning_paths.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            path.title.clone(),
            path.questions.len().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} learning paths, {} questions",
        document.path_count(),
        document.question_count()
    );

    Ok(())
}
