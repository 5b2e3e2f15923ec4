//! Core types for trainforcert: the question bank and the quiz state machine.
//!
//! A [`Document`] is loaded once from JSON and handed to a
//! [`QuizController`], which walks the learning paths question by question.
//! Every transition produces a [`RenderModel`], plain data that a view layer
//! draws without touching controller state.

/// Quiz configuration.
pub mod config;
/// The quiz state machine.
pub mod controller;
/// Validation findings for loaded documents.
pub mod diagnostics;
/// Question bank data model and JSON loading.
pub mod document;
/// Error types used throughout the crate.
pub mod error;
/// Render model produced by the controller.
pub mod screen;
/// Plain-text rendering of the render model.
pub mod text;

/// Re-export configuration.
pub use config::QuizConfig;
/// Re-export controller types.
pub use controller::{QuizController, QuizObserver, QuizPhase};
/// Re-export diagnostic types.
pub use diagnostics::{Diagnostic, Severity};
/// Re-export the data model.
pub use document::{Document, LearningPath, Question};
/// Re-export error types.
pub use error::{QuizError, QuizResult};
/// Re-export render model types.
pub use screen::{AnswerOption, Body, Feedback, PathEntry, QuestionView, RenderModel, Summary};
