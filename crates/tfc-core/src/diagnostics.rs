use std::collections::HashSet;
use std::fmt;

use crate::document::Document;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The document cannot be quizzed on.
    Error,
    /// The document works but probably is not what the author meant.
    Warning,
}

/// A validation finding, located by its JSON path in the wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// How serious the finding is.
    pub severity: Severity,
    /// Where it is, e.g. `questions[0].questions[2].answers`.
    pub location: String,
    /// What is wrong.
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            location: location.into(),
            message: message.into(),
        }
    }

    /// Whether this diagnostic blocks loading.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{prefix}: {}: {}", self.location, self.message)
    }
}

/// Whether any diagnostic is an error.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}

/// Check a parsed document for semantic problems.
pub fn validate(document: &Document) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if document.certification_title.trim().is_empty() {
        diagnostics.push(Diagnostic::warning(
            "certification_title",
            "certification title is blank",
        ));
    }

    if document.learning_paths.is_empty() {
        diagnostics.push(Diagnostic::error("questions", "no learning paths"));
    }

    for (p, path) in document.learning_paths.iter().enumerate() {
        let path_loc = format!("questions[{p}]");

        if path.title.trim().is_empty() {
            diagnostics.push(Diagnostic::warning(
                format!("{path_loc}.learning_path_title"),
                "learning path title is blank",
            ));
        }
        if path.questions.is_empty() {
            diagnostics.push(Diagnostic::warning(
                format!("{path_loc}.questions"),
                format!("learning path \"{}\" has no questions", path.title),
            ));
        }

        for (q, question) in path.questions.iter().enumerate() {
            let loc = format!("{path_loc}.questions[{q}]");

            if question.text.trim().is_empty() {
                diagnostics.push(Diagnostic::warning(
                    format!("{loc}.question"),
                    "question text is blank",
                ));
            }

            if question.answers.is_empty() {
                diagnostics.push(Diagnostic::error(
                    format!("{loc}.answers"),
                    "question has no answers",
                ));
            } else if question.position_of(&question.correct_answer).is_none() {
                diagnostics.push(Diagnostic::error(
                    format!("{loc}.correct_answer"),
                    format!(
                        "correct answer \"{}\" is not one of the answers",
                        question.correct_answer
                    ),
                ));
            }

            let mut seen = HashSet::new();
            for answer in &question.answers {
                if !seen.insert(answer.as_str()) {
                    diagnostics.push(Diagnostic::warning(
                        format!("{loc}.answers"),
                        format!("duplicate answer \"{answer}\""),
                    ));
                }
            }
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{LearningPath, Question};

    fn doc_with(question: Question) -> Document {
        Document::new("AZ-900").with_path(LearningPath::new("Basics").with_question(question))
    }

    #[test]
    fn valid_document_is_clean() {
        let doc = doc_with(Question::new("Q", ["A", "B"], "B", "because"));
        assert!(validate(&doc).is_empty());
    }

    #[test]
    fn correct_answer_must_be_listed() {
        let doc = doc_with(Question::new("Q", ["A", "B"], "C", ""));
        let diags = validate(&doc);
        assert_eq!(diags.len(), 1);
        assert!(diags[0].is_error());
        assert_eq!(diags[0].location, "questions[0].questions[0].correct_answer");
    }

    #[test]
    fn empty_answers_is_error() {
        let doc = doc_with(Question::new("Q", Vec::<String>::new(), "A", ""));
        let diags = validate(&doc);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].location, "questions[0].questions[0].answers");
        assert!(has_errors(&diags));
    }

    #[test]
    fn duplicate_answers_warn() {
        let doc = doc_with(Question::new("Q", ["A", "A", "B"], "A", ""));
        let diags = validate(&doc);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert!(!has_errors(&diags));
    }

    #[test]
    fn empty_path_warns() {
        let doc = Document::new("T").with_path(LearningPath::new("Nothing yet"));
        let diags = validate(&doc);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert!(diags[0].message.contains("Nothing yet"));
    }

    #[test]
    fn no_paths_is_error() {
        let diags = validate(&Document::new("T"));
        assert!(has_errors(&diags));
    }

    #[test]
    fn blank_titles_warn() {
        let doc = Document::new("  ")
            .with_path(LearningPath::new("").with_question(Question::new(" ", ["A"], "A", "")));
        let diags = validate(&doc);
        let locations: Vec<_> = diags.iter().map(|d| d.location.as_str()).collect();
        assert_eq!(
            locations,
            vec![
                "certification_title",
                "questions[0].learning_path_title",
                "questions[0].questions[0].question",
            ]
        );
        assert!(diags.iter().all(|d| d.severity == Severity::Warning));
        assert!(!has_errors(&diags));
    }

    #[test]
    fn display_includes_location() {
        let d = Diagnostic::warning("certification_title", "certification title is blank");
        assert_eq!(
            d.to_string(),
            "warning: certification_title: certification title is blank"
        );
    }
}
