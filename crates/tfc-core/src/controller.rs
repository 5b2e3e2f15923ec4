//! The quiz state machine.
//!
//! [`QuizController`] owns the loaded [`Document`] and the navigation state.
//! Each operation mutates that state and returns a fresh [`RenderModel`];
//! observers registered with [`QuizController::subscribe`] receive the same
//! model, so a view never has to reach into the controller.

use std::path::Path;

use log::{debug, info, warn};

use crate::config::QuizConfig;
use crate::diagnostics::Diagnostic;
use crate::document::{Document, LearningPath, Question};
use crate::error::{QuizError, QuizResult};
use crate::screen::{AnswerOption, Body, Feedback, PathEntry, QuestionView, RenderModel, Summary};

/// Receives a render model after every transition.
pub trait QuizObserver {
    /// Called with the model produced by the transition.
    fn notify(&mut self, model: &RenderModel);
}

impl<F: FnMut(&RenderModel)> QuizObserver for F {
    fn notify(&mut self, model: &RenderModel) {
        self(model);
    }
}

/// Where the quiz is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// No document loaded (or the load failed).
    Loading,
    /// A path is chosen but nothing has been rendered for it yet.
    PathSelected,
    /// A question is shown and has not been answered.
    ShowingQuestion,
    /// A question is shown together with the outcome of an answer.
    AnswerRevealed,
    /// Every question in the path has been passed. Terminal.
    Complete,
}

/// A recorded answer to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Selection {
    /// Which control was chosen; `None` for a value not among the answers.
    position: Option<usize>,
    correct: bool,
}

/// Owns a question bank and the quiz navigation state.
pub struct QuizController {
    config: QuizConfig,
    document: Option<Document>,
    load_error: Option<String>,
    selected_path: usize,
    current_question: usize,
    /// One slot per question of the selected path.
    selections: Vec<Option<Selection>>,
    phase: QuizPhase,
    /// Findings from the last load, reported by the caller.
    diagnostics: Vec<Diagnostic>,
    observers: Vec<Box<dyn QuizObserver>>,
}

impl Default for QuizController {
    fn default() -> Self {
        Self::new(QuizConfig::default())
    }
}

impl QuizController {
    /// Create a controller with no document loaded.
    pub fn new(config: QuizConfig) -> Self {
        Self {
            config,
            document: None,
            load_error: None,
            selected_path: 0,
            current_question: 0,
            selections: Vec::new(),
            phase: QuizPhase::Loading,
            diagnostics: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Register an observer for every subsequent render.
    pub fn subscribe(&mut self, observer: impl QuizObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    /// Parse, validate and install a question bank from JSON text.
    ///
    /// On success the configured default path is selected. On failure the
    /// controller is left in [`QuizPhase::Loading`] and the render model
    /// carries the error.
    pub fn load_document(&mut self, raw: &str) -> QuizResult<()> {
        self.diagnostics.clear();
        let result = Document::from_json(raw).and_then(|doc| self.install(doc));
        self.record_load(result)
    }

    /// Read and install the question bank at `path`.
    pub fn load_file(&mut self, path: &Path) -> QuizResult<()> {
        self.diagnostics.clear();
        let result = Document::from_path(path).and_then(|doc| self.install(doc));
        self.record_load(result)
    }

    /// Read and install the question bank named in the configuration.
    pub fn load_configured(&mut self) -> QuizResult<()> {
        let path = self.config.question_file.clone();
        self.load_file(&path)
    }

    /// Validate and install an already parsed document.
    pub fn load(&mut self, document: Document) -> QuizResult<()> {
        self.diagnostics.clear();
        let result = self.install(document);
        self.record_load(result)
    }

    fn install(&mut self, document: Document) -> QuizResult<()> {
        let diagnostics = document.validate();
        let first_error = diagnostics
            .iter()
            .find(|d| d.is_error())
            .map(|d| format!("{}: {}", d.location, d.message));
        self.diagnostics = diagnostics;
        if let Some(message) = first_error {
            return Err(QuizError::MalformedDocument(message));
        }

        info!(
            "loaded \"{}\": {} learning paths, {} questions",
            document.certification_title,
            document.path_count(),
            document.question_count()
        );

        // Validation guarantees at least one path.
        let default_path = self.config.default_path.min(document.path_count() - 1);
        self.document = Some(document);
        self.load_error = None;
        self.reset_path(default_path);
        self.phase = QuizPhase::PathSelected;
        Ok(())
    }

    fn record_load(&mut self, result: QuizResult<()>) -> QuizResult<()> {
        if let Err(e) = &result {
            warn!("load failed: {e}");
            self.document = None;
            self.load_error = Some(e.to_string());
            self.selections.clear();
            self.phase = QuizPhase::Loading;
        }
        result
    }

    // -----------------------------------------------------------------------
    // State queries
    // -----------------------------------------------------------------------

    /// The loaded document, if any.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Validation findings from the last load, including a rejected one.
    ///
    /// Empty when the last load failed before validation.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Index of the selected learning path.
    pub fn selected_path(&self) -> usize {
        self.selected_path
    }

    /// Index of the current question; equal to the path length when complete.
    pub fn current_question(&self) -> usize {
        self.current_question
    }

    /// The selected learning path.
    pub fn path(&self) -> Option<&LearningPath> {
        self.document.as_ref()?.path(self.selected_path)
    }

    /// Questions of the selected path.
    pub fn questions(&self) -> &[Question] {
        self.path().map(|p| p.questions.as_slice()).unwrap_or(&[])
    }

    /// The question on screen, if any.
    pub fn question(&self) -> Option<&Question> {
        self.questions().get(self.current_question)
    }

    /// Whether every question of the selected path has been passed.
    pub fn is_complete(&self) -> bool {
        self.document.is_some() && self.current_question >= self.questions().len()
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Switch to another learning path and show its first question.
    pub fn select_learning_path(&mut self, index: usize) -> QuizResult<RenderModel> {
        let len = self.document.as_ref().map_or(0, Document::path_count);
        if index >= len {
            return Err(QuizError::IndexOutOfRange { index, len });
        }
        debug!("select learning path {index}");
        self.reset_path(index);
        self.phase = QuizPhase::PathSelected;
        Ok(self.render())
    }

    /// Settle the phase for the current state and publish the render model.
    pub fn render(&mut self) -> RenderModel {
        self.settle_phase();
        let model = self.render_model();
        for observer in &mut self.observers {
            observer.notify(&model);
        }
        model
    }

    /// Answer the current question with `choice`.
    ///
    /// A value that is not among the answers counts as incorrect.
    pub fn select_answer(&mut self, choice: &str) -> QuizResult<RenderModel> {
        let question = self.question().ok_or(QuizError::NoActiveQuestion)?;
        let selection = Selection {
            position: question.position_of(choice),
            correct: question.is_correct(choice),
        };
        Ok(self.record_selection(selection))
    }

    /// Answer the current question with the control at `position`.
    pub fn select_answer_at(&mut self, position: usize) -> QuizResult<RenderModel> {
        let question = self.question().ok_or(QuizError::NoActiveQuestion)?;
        let choice = question
            .answers
            .get(position)
            .ok_or(QuizError::IndexOutOfRange {
                index: position,
                len: question.answers.len(),
            })?;
        let selection = Selection {
            position: Some(position),
            correct: question.is_correct(choice),
        };
        Ok(self.record_selection(selection))
    }

    /// Move to the next question, or to the completion view after the last.
    ///
    /// Does nothing once the quiz is complete.
    pub fn advance(&mut self) -> RenderModel {
        if self.document.is_some() && !self.is_complete() {
            self.current_question = (self.current_question + 1).min(self.questions().len());
            debug!("advance to question {}", self.current_question);
        }
        self.render()
    }

    /// Move back one question, stopping at the first.
    ///
    /// Does nothing once the quiz is complete.
    pub fn previous(&mut self) -> RenderModel {
        if self.document.is_some() && !self.is_complete() {
            self.current_question = self.current_question.saturating_sub(1);
            debug!("back to question {}", self.current_question);
        }
        self.render()
    }

    fn reset_path(&mut self, index: usize) {
        self.selected_path = index;
        self.current_question = 0;
        self.selections = vec![None; self.questions().len()];
    }

    fn record_selection(&mut self, selection: Selection) -> RenderModel {
        debug!(
            "question {} answered {}",
            self.current_question,
            if selection.correct { "correctly" } else { "incorrectly" }
        );
        if let Some(slot) = self.selections.get_mut(self.current_question) {
            *slot = Some(selection);
        }
        self.render()
    }

    fn settle_phase(&mut self) {
        self.phase = if self.document.is_none() {
            QuizPhase::Loading
        } else if self.is_complete() {
            QuizPhase::Complete
        } else if self
            .selections
            .get(self.current_question)
            .is_some_and(Option::is_some)
        {
            QuizPhase::AnswerRevealed
        } else {
            QuizPhase::ShowingQuestion
        };
    }

    // -----------------------------------------------------------------------
    // Render model
    // -----------------------------------------------------------------------

    /// Build the render model for the current state without side effects.
    pub fn render_model(&self) -> RenderModel {
        let Some(document) = &self.document else {
            let body = match &self.load_error {
                Some(message) => Body::LoadFailed(message.clone()),
                None => Body::Loading,
            };
            return RenderModel {
                certification_title: String::new(),
                paths: Vec::new(),
                body,
            };
        };

        let paths = document
            .learning_paths
            .iter()
            .enumerate()
            .map(|(i, path)| PathEntry {
                title: path.title.clone(),
                question_count: path.questions.len(),
                selected: i == self.selected_path,
            })
            .collect();

        let path_title = self.path().map(|p| p.title.clone()).unwrap_or_default();
        let total = self.questions().len();

        let body = match self.question() {
            None => Body::Complete(Summary {
                path_title,
                total,
                answered: self.selections.iter().flatten().count(),
                correct: self.selections.iter().flatten().filter(|s| s.correct).count(),
            }),
            Some(question) => {
                let selection = self.selections.get(self.current_question).copied().flatten();
                let answers = question
                    .answers
                    .iter()
                    .enumerate()
                    .map(|(i, text)| AnswerOption {
                        text: text.clone(),
                        selected: selection.is_some_and(|s| s.position == Some(i)),
                    })
                    .collect();
                let feedback = match selection {
                    None => Feedback::Unanswered,
                    Some(s) if s.correct => Feedback::Correct {
                        explanation: question.explanation.clone(),
                    },
                    Some(_) => Feedback::Incorrect,
                };
                Body::Question(QuestionView {
                    path_title,
                    number: self.current_question + 1,
                    total,
                    text: question.text.clone(),
                    answers,
                    feedback,
                })
            }
        };

        RenderModel {
            certification_title: document.certification_title.clone(),
            paths,
            body,
        }
    }
}
