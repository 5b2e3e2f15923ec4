//! Line-oriented quiz over stdin/stdout.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use log::debug;
use tfc_core::{Body, RenderModel, text};

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    /// Answer by 1-based position.
    Answer(usize),
    /// Answer by value.
    AnswerText(String),
    Next,
    Previous,
    /// Switch learning path (1-based).
    Path(usize),
    Paths,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }
    if let Ok(n) = line.parse::<usize>() {
        return Input::Answer(n);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    match (word.to_lowercase().as_str(), rest) {
        ("n" | "next", "") => Input::Next,
        ("p" | "prev" | "previous", "") => Input::Previous,
        ("paths", "") => Input::Paths,
        ("h" | "help" | "?", "") => Input::Help,
        ("q" | "quit" | "exit", "") => Input::Quit,
        ("path", n) => n
            .parse()
            .map(Input::Path)
            .unwrap_or_else(|_| Input::Unknown(line.to_string())),
        ("a" | "answer", choice) if !choice.is_empty() => Input::AnswerText(choice.to_string()),
        _ => Input::Unknown(line.to_string()),
    }
}

const HELP: &str = "  1, 2, ...     answer with choice N
  a <text>      answer with the given text
  n / next      next question
  p / prev      previous question
  paths         list learning paths
  path <N>      switch to learning path N
  q / quit      stop";

pub fn run(file: &Path, path: usize) -> Result<(), String> {
    let mut quiz = super::start_quiz(file, path)?;

    println!("{}", quiz.render_model().certification_title.bold());
    println!();

    quiz.subscribe(|model: &RenderModel| {
        println!("{}", text::render_body(model));
    });
    quiz.render();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| format!("cannot write: {e}"))?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.map_err(|e| format!("cannot read input: {e}"))?;

        let outcome = match parse_input(&line) {
            Input::Answer(n) => super::zero_based(n, "answer").and_then(|i| {
                quiz.select_answer_at(i)
                    .map(drop)
                    .map_err(|e| e.to_string())
            }),
            Input::AnswerText(choice) => quiz
                .select_answer(&choice)
                .map(drop)
                .map_err(|e| e.to_string()),
            Input::Next => {
                quiz.advance();
                Ok(())
            }
            Input::Previous => {
                quiz.previous();
                Ok(())
            }
            Input::Path(n) => super::zero_based(n, "path").and_then(|i| {
                quiz.select_learning_path(i)
                    .map(drop)
                    .map_err(|e| e.to_string())
            }),
            Input::Paths => {
                print!("{}", text::render_paths(&quiz.render_model()));
                Ok(())
            }
            Input::Help => {
                println!("{HELP}");
                Ok(())
            }
            Input::Quit => break,
            Input::Empty => Ok(()),
            Input::Unknown(s) => Err(format!("unknown command: {s} (try 'help')")),
        };

        if let Err(e) = outcome {
            println!("  {}", e.red());
        }
    }

    if let Body::Complete(summary) = &quiz.render_model().body {
        debug!(
            "finished \"{}\" with {}/{}",
            summary.path_title,
            summary.correct,
            summary.total
        );
    }

    Ok(())
}
