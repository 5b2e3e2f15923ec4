use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{self, Diagnostic};
use crate::error::{QuizError, QuizResult};

/// A certification question bank.
///
/// The wire format names the list of learning paths `questions`, which is
/// kept for compatibility with published banks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Display title of the certification.
    pub certification_title: String,
    /// Learning paths in presentation order.
    #[serde(rename = "questions")]
    pub learning_paths: Vec<LearningPath>,
}

/// A named, ordered group of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPath {
    /// Title shown in the path list.
    #[serde(rename = "learning_path_title")]
    pub title: String,
    /// Questions in presentation order.
    pub questions: Vec<Question>,
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question prompt.
    #[serde(rename = "question")]
    pub text: String,
    /// Answer choices, shown in this order. Not necessarily unique.
    pub answers: Vec<String>,
    /// The correct choice; one of `answers`.
    pub correct_answer: String,
    /// Revealed after a correct answer.
    pub explanation: String,
}

impl Document {
    /// Create an empty document.
    pub fn new(certification_title: impl Into<String>) -> Self {
        Self {
            certification_title: certification_title.into(),
            learning_paths: Vec::new(),
        }
    }

    /// Append a learning path.
    pub fn with_path(mut self, path: LearningPath) -> Self {
        self.learning_paths.push(path);
        self
    }

    /// Parse a document from JSON text.
    ///
    /// Missing or mistyped fields are reported as
    /// [`QuizError::MalformedDocument`]. No semantic validation happens here;
    /// see [`Document::validate`].
    pub fn from_json(raw: &str) -> QuizResult<Self> {
        serde_json::from_str(raw).map_err(|e| QuizError::MalformedDocument(e.to_string()))
    }

    /// Read and parse a document from a file.
    pub fn from_path(path: &Path) -> QuizResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| QuizError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Serialize to pretty-printed JSON in the wire format.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Check the document for problems that parsing cannot catch.
    pub fn validate(&self) -> Vec<Diagnostic> {
        diagnostics::validate(self)
    }

    /// Get a learning path by index.
    pub fn path(&self, index: usize) -> Option<&LearningPath> {
        self.learning_paths.get(index)
    }

    /// Number of learning paths.
    pub fn path_count(&self) -> usize {
        self.learning_paths.len()
    }

    /// Total number of questions across all paths.
    pub fn question_count(&self) -> usize {
        self.learning_paths.iter().map(|p| p.questions.len()).sum()
    }
}

impl LearningPath {
    /// Create an empty learning path.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            questions: Vec::new(),
        }
    }

    /// Append a question.
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }
}

impl Question {
    /// Create a question from its parts.
    pub fn new<I, S>(
        text: impl Into<String>,
        answers: I,
        correct_answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            answers: answers.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
            explanation: explanation.into(),
        }
    }

    /// Exact, case-sensitive comparison against the correct answer.
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.correct_answer
    }

    /// Position of the first answer equal to `choice`.
    pub fn position_of(&self, choice: &str) -> Option<usize> {
        self.answers.iter().position(|a| a == choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "certification_title": "AZ-900",
        "questions": [
            {
                "learning_path_title": "Cloud Concepts",
                "questions": [
                    {
                        "question": "What is IaaS?",
                        "answers": ["Infrastructure", "Software"],
                        "correct_answer": "Infrastructure",
                        "explanation": "IaaS rents out infrastructure."
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn parse_wire_format() {
        let doc = Document::from_json(SAMPLE).unwrap();
        assert_eq!(doc.certification_title, "AZ-900");
        assert_eq!(doc.path_count(), 1);
        let path = doc.path(0).unwrap();
        assert_eq!(path.title, "Cloud Concepts");
        assert_eq!(path.questions[0].text, "What is IaaS?");
        assert_eq!(path.questions[0].answers, vec!["Infrastructure", "Software"]);
    }

    #[test]
    fn missing_field_is_malformed() {
        let raw = r#"{"certification_title": "X", "questions": [
            {"learning_path_title": "P", "questions": [
                {"question": "Q", "answers": ["A"], "explanation": "E"}
            ]}
        ]}"#;
        let err = Document::from_json(raw).unwrap_err();
        match err {
            QuizError::MalformedDocument(msg) => assert!(msg.contains("correct_answer")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_type_is_malformed() {
        let raw = r#"{"certification_title": 7, "questions": []}"#;
        assert!(matches!(
            Document::from_json(raw),
            Err(QuizError::MalformedDocument(_))
        ));
    }

    #[test]
    fn not_json_is_malformed() {
        assert!(matches!(
            Document::from_json("certification_title: X"),
            Err(QuizError::MalformedDocument(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Document::from_path(Path::new("/nonexistent/questions.json")).unwrap_err();
        assert!(matches!(err, QuizError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/questions.json"));
    }

    #[test]
    fn serializes_back_to_wire_names() {
        let doc = Document::from_json(SAMPLE).unwrap();
        let json = doc.to_json_pretty().unwrap();
        assert!(json.contains("\"learning_path_title\""));
        assert!(json.contains("\"correct_answer\""));
        assert_eq!(Document::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn correctness_is_exact() {
        let q = Question::new("Q", ["Yes", "No"], "Yes", "");
        assert!(q.is_correct("Yes"));
        assert!(!q.is_correct("yes"));
        assert!(!q.is_correct("Yes "));
        assert_eq!(q.position_of("No"), Some(1));
        assert_eq!(q.position_of("Maybe"), None);
    }

    #[test]
    fn counts_questions_across_paths() {
        let doc = Document::new("T")
            .with_path(LearningPath::new("A").with_question(Question::new("1", ["x"], "x", "")))
            .with_path(
                LearningPath::new("B")
                    .with_question(Question::new("2", ["x"], "x", ""))
                    .with_question(Question::new("3", ["x"], "x", "")),
            );
        assert_eq!(doc.path_count(), 2);
        assert_eq!(doc.question_count(), 3);
    }
}
