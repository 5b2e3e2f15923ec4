/// Everything a view needs to draw the quiz at one moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    /// Certification title, empty until a document is loaded.
    pub certification_title: String,
    /// The learning path list.
    pub paths: Vec<PathEntry>,
    /// The main pane.
    pub body: Body,
}

/// One entry in the learning path list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// Path title.
    pub title: String,
    /// Number of questions in the path.
    pub question_count: usize,
    /// Whether this path is the one being quizzed.
    pub selected: bool,
}

/// The main pane of the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// No document yet.
    Loading,
    /// The document could not be loaded; nothing else is shown.
    LoadFailed(String),
    /// A question is on screen.
    Question(QuestionView),
    /// Every question of the path has been passed.
    Complete(Summary),
}

/// The question currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// Title of the path the question belongs to.
    pub path_title: String,
    /// 1-based position within the path.
    pub number: usize,
    /// Number of questions in the path.
    pub total: usize,
    /// The question prompt.
    pub text: String,
    /// Answer controls in document order.
    pub answers: Vec<AnswerOption>,
    /// Result of the last selection.
    pub feedback: Feedback,
}

/// A selectable answer control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    /// Answer text.
    pub text: String,
    /// Whether this control is the current selection.
    pub selected: bool,
}

/// Outcome shown under a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Nothing selected yet.
    Unanswered,
    /// The selection was correct; the explanation is revealed.
    Correct {
        /// Why the answer is correct.
        explanation: String,
    },
    /// The selection was wrong; the explanation stays hidden.
    Incorrect,
}

/// Shown once the last question has been passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Title of the finished path.
    pub path_title: String,
    /// Number of questions in the path.
    pub total: usize,
    /// Questions that received an answer.
    pub answered: usize,
    /// Questions whose last answer was correct.
    pub correct: usize,
}

impl RenderModel {
    /// The question pane, if a question is on screen.
    pub fn question(&self) -> Option<&QuestionView> {
        match &self.body {
            Body::Question(view) => Some(view),
            _ => None,
        }
    }

    /// Whether the completion pane is shown.
    pub fn is_complete(&self) -> bool {
        matches!(self.body, Body::Complete(_))
    }

    /// Index of the selected learning path.
    pub fn selected_path(&self) -> Option<usize> {
        self.paths.iter().position(|p| p.selected)
    }
}

impl QuestionView {
    /// Whether the explanation is visible.
    pub fn shows_explanation(&self) -> bool {
        matches!(self.feedback, Feedback::Correct { .. })
    }

    /// Whether the "incorrect" indicator is visible.
    pub fn shows_error(&self) -> bool {
        self.feedback == Feedback::Incorrect
    }

    /// Position of the selected answer control.
    pub fn selected_answer(&self) -> Option<usize> {
        self.answers.iter().position(|a| a.selected)
    }
}
