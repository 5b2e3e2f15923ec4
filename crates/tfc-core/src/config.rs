//! Configuration for a quiz session.

use std::path::PathBuf;

/// File name the question bank is published under.
pub const DEFAULT_QUESTION_FILE: &str = "questions.json";

/// Configuration for a quiz session.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Learning path chosen implicitly after a successful load.
    pub default_path: usize,
    /// Location of the question bank.
    pub question_file: PathBuf,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_path: 0,
            question_file: PathBuf::from(DEFAULT_QUESTION_FILE),
        }
    }
}

impl QuizConfig {
    /// Set the learning path selected after loading.
    pub fn with_default_path(mut self, index: usize) -> Self {
        self.default_path = index;
        self
    }

    /// Set the question bank location.
    pub fn with_question_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.question_file = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = QuizConfig::default();
        assert_eq!(cfg.default_path, 0);
        assert_eq!(cfg.question_file, PathBuf::from("questions.json"));
    }

    #[test]
    fn builder_methods() {
        let cfg = QuizConfig::default()
            .with_default_path(2)
            .with_question_file("bank/az900.json");
        assert_eq!(cfg.default_path, 2);
        assert_eq!(cfg.question_file, PathBuf::from("bank/az900.json"));
    }
}
