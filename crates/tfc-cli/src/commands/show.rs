use std::path::Path;

use colored::Colorize;

pub fn run(file: &Path, path: usize, question: usize) -> Result<(), String> {
    let document = super::load(file)?;

    let path_index = super::zero_based(path, "path")?;
    let learning_path = document.path(path_index).ok_or_else(|| {
        format!(
            "no learning path {path} (the bank has {})",
            document.path_count()
        )
    })?;

    let question_index = super::zero_based(question, "question")?;
    let q = learning_path.questions.get(question_index).ok_or_else(|| {
        format!(
            "no question {question} in \"{}\" ({} questions)",
            learning_path.title,
            learning_path.questions.len()
        )
    })?;

    println!(
        "  {} [{} {}/{}]",
        learning_path.title.bold(),
        "question".dimmed(),
        question,
        learning_path.questions.len()
    );
    println!();
    println!("  {}", q.text);
    println!();

    for (i, answer) in q.answers.iter().enumerate() {
        let label = format!("{}. {}", i + 1, answer);
        if q.is_correct(answer) {
            println!("  {} {}", label.green(), "(correct)".green());
        } else {
            println!("  {label}");
        }
    }

    if !q.explanation.is_empty() {
        println!();
        for line in q.explanation.lines() {
            println!("  {}", line.trim().italic());
        }
    }

    Ok(())
}
