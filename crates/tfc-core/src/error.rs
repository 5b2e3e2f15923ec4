use std::path::PathBuf;

/// Alias for `Result<T, QuizError>`.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can occur while loading or driving a quiz.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// The question bank is missing a required field or fails validation.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// An explicit selection referred to a path or answer that does not exist.
    #[error("index {index} out of range (expected less than {len})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of available items.
        len: usize,
    },

    /// An answer was given while no question is on screen.
    #[error("no question is active")]
    NoActiveQuestion,

    /// The question file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
