//! Panes drawn inside the main layout.

pub mod paths;
pub mod quiz;
