//! Terminal UI for trainforcert quizzes.
//!
//! Binds a [`tfc_core::QuizController`] to a ratatui interface: the learning
//! path list on the left, the current question or the completion summary on
//! the right.

pub mod app;
pub mod launch;
pub mod panes;
pub mod shared;
pub mod terminal;
