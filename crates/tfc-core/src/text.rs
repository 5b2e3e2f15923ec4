use std::fmt::Write;

use crate::screen::{Body, Feedback, RenderModel};

/// Render the learning path list, marking the selected path.
pub fn render_paths(model: &RenderModel) -> String {
    let mut out = String::new();
    for (i, path) in model.paths.iter().enumerate() {
        let marker = if path.selected { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {}. {} ({} question{})",
            i + 1,
            path.title,
            path.question_count,
            if path.question_count == 1 { "" } else { "s" }
        );
    }
    out
}

/// Render the main pane.
pub fn render_body(model: &RenderModel) -> String {
    let mut out = String::new();
    match &model.body {
        Body::Loading => out.push_str("Loading questions...\n"),
        Body::LoadFailed(message) => {
            let _ = writeln!(out, "Could not load questions: {message}");
        }
        Body::Question(view) => {
            let _ = writeln!(
                out,
                "{}: question {} of {}",
                view.path_title, view.number, view.total
            );
            let _ = writeln!(out, "{}", view.text);
            for (i, answer) in view.answers.iter().enumerate() {
                let mark = if answer.selected { "(x)" } else { "( )" };
                let _ = writeln!(out, "  {mark} {}. {}", i + 1, answer.text);
            }
            match &view.feedback {
                Feedback::Unanswered => {}
                Feedback::Correct { explanation } => {
                    out.push_str("Correct!\n");
                    if !explanation.is_empty() {
                        let _ = writeln!(out, "{explanation}");
                    }
                }
                Feedback::Incorrect => out.push_str("Incorrect, try again.\n"),
            }
        }
        Body::Complete(summary) => {
            let _ = writeln!(out, "Quiz complete: {}", summary.path_title);
            let _ = writeln!(
                out,
                "{} of {} answered correctly.",
                summary.correct, summary.total
            );
        }
    }
    out
}

/// Render the whole model: title, path list and main pane.
pub fn render(model: &RenderModel) -> String {
    let mut out = String::new();
    if !model.certification_title.is_empty() {
        let _ = writeln!(out, "{}", model.certification_title);
        out.push('\n');
    }
    if !model.paths.is_empty() {
        out.push_str(&render_paths(model));
        out.push('\n');
    }
    out.push_str(&render_body(model));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::QuizController;
    use crate::document::{Document, LearningPath, Question};

    fn quiz() -> QuizController {
        let doc = Document::new("AWS Cloud Practitioner")
            .with_path(
                LearningPath::new("AWS Basics")
                    .with_question(Question::new(
                        "Which service stores objects?",
                        ["EC2", "S3"],
                        "S3",
                        "S3 is object storage.",
                    ))
                    .with_question(Question::new("Pick one", ["A"], "A", "")),
            )
            .with_path(LearningPath::new("Billing").with_question(Question::new(
                "Q",
                ["A"],
                "A",
                "",
            )));
        let mut quiz = QuizController::default();
        quiz.load(doc).unwrap();
        quiz
    }

    #[test]
    fn renders_fresh_question() {
        let mut quiz = quiz();
        insta::assert_snapshot!(render(&quiz.render()), @r"
        AWS Cloud Practitioner

        * 1. AWS Basics (2 questions)
          2. Billing (1 question)

        AWS Basics: question 1 of 2
        Which service stores objects?
          ( ) 1. EC2
          ( ) 2. S3
        ");
    }

    #[test]
    fn renders_correct_feedback() {
        let mut quiz = quiz();
        let model = quiz.select_answer("S3").unwrap();
        insta::assert_snapshot!(render_body(&model), @r"
        AWS Basics: question 1 of 2
        Which service stores objects?
          ( ) 1. EC2
          (x) 2. S3
        Correct!
        S3 is object storage.
        ");
    }

    #[test]
    fn renders_incorrect_feedback() {
        let mut quiz = quiz();
        let model = quiz.select_answer("EC2").unwrap();
        let text = render_body(&model);
        assert!(text.contains("(x) 1. EC2"));
        assert!(text.ends_with("Incorrect, try again.\n"));
        assert!(!text.contains("S3 is object storage."));
    }

    #[test]
    fn renders_completion() {
        let mut quiz = quiz();
        quiz.select_answer("S3").unwrap();
        quiz.advance();
        let model = quiz.advance();
        assert_eq!(
            render_body(&model),
            "Quiz complete: AWS Basics\n1 of 2 answered correctly.\n"
        );
    }

    #[test]
    fn renders_load_failure_alone() {
        let mut quiz = QuizController::default();
        let _ = quiz.load_document("{");
        let text = render(&quiz.render());
        assert!(text.starts_with("Could not load questions: malformed document"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn rendering_twice_is_identical() {
        let mut quiz = quiz();
        let first = render(&quiz.render());
        let second = render(&quiz.render());
        assert_eq!(first, second);
    }
}
