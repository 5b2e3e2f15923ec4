//! Application state binding the quiz controller to the terminal.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tfc_core::{QuizController, RenderModel};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The learning path list.
    Paths,
    /// The answers of the current question.
    Answers,
}

/// Main application state.
pub struct TuiApp {
    /// The quiz being played.
    quiz: QuizController,
    /// Latest render model, published by the controller.
    model: Rc<RefCell<RenderModel>>,
    /// Pane with keyboard focus.
    pub focus: Focus,
    /// Highlighted row in the path list.
    pub path_cursor: usize,
    /// Highlighted answer.
    pub answer_cursor: usize,
    /// Last rejected action, shown in the status bar.
    pub notice: Option<String>,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl TuiApp {
    /// Bind to a controller and render its current state.
    pub fn new(mut quiz: QuizController) -> Self {
        let model = Rc::new(RefCell::new(quiz.render_model()));
        let sink = Rc::clone(&model);
        quiz.subscribe(move |m: &RenderModel| *sink.borrow_mut() = m.clone());
        quiz.render();

        let path_cursor = quiz.selected_path();
        Self {
            quiz,
            model,
            focus: Focus::Answers,
            path_cursor,
            answer_cursor: 0,
            notice: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// The most recently rendered model.
    pub fn model(&self) -> std::cell::Ref<'_, RenderModel> {
        self.model.borrow()
    }

    /// The underlying controller.
    pub fn quiz(&self) -> &QuizController {
        &self.quiz
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Char('n') | KeyCode::Right => self.next_question(),
            KeyCode::Char('p') | KeyCode::Left => self.previous_question(),
            _ => match self.focus {
                Focus::Paths => self.handle_paths_key(key.code),
                Focus::Answers => self.handle_answers_key(key.code),
            },
        }
    }

    fn handle_paths_key(&mut self, code: KeyCode) {
        let count = self.model().paths.len();
        match code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.path_cursor + 1 < count {
                    self.path_cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.path_cursor = self.path_cursor.saturating_sub(1);
            }
            KeyCode::Enter => self.choose_path(self.path_cursor),
            KeyCode::Esc => self.focus = Focus::Answers,
            _ => {}
        }
    }

    fn handle_answers_key(&mut self, code: KeyCode) {
        let count = self.model().question().map_or(0, |q| q.answers.len());
        match code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.answer_cursor + 1 < count {
                    self.answer_cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.answer_cursor = self.answer_cursor.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.choose_answer(self.answer_cursor),
            KeyCode::Char(c) => {
                if let Some(d) = c.to_digit(10)
                    && d >= 1
                {
                    self.choose_answer(d as usize - 1);
                }
            }
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Paths => Focus::Answers,
            Focus::Answers => {
                self.path_cursor = self.quiz.selected_path();
                Focus::Paths
            }
        };
    }

    fn choose_path(&mut self, index: usize) {
        match self.quiz.select_learning_path(index) {
            Ok(_) => {
                self.notice = None;
                self.answer_cursor = 0;
                self.focus = Focus::Answers;
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn choose_answer(&mut self, position: usize) {
        match self.quiz.select_answer_at(position) {
            Ok(_) => {
                self.notice = None;
                self.answer_cursor = position;
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn next_question(&mut self) {
        self.quiz.advance();
        self.sync_answer_cursor();
    }

    fn previous_question(&mut self) {
        self.quiz.previous();
        self.sync_answer_cursor();
    }

    /// Put the cursor on the recorded answer, or the first one.
    fn sync_answer_cursor(&mut self) {
        let cursor = self
            .model()
            .question()
            .and_then(|q| q.selected_answer())
            .unwrap_or(0);
        self.notice = None;
        self.answer_cursor = cursor;
    }

    /// Context-sensitive status bar text.
    pub fn status_hint(&self) -> String {
        if let Some(notice) = &self.notice {
            return notice.clone();
        }
        match self.focus {
            Focus::Paths => "j/k:move  Enter:start path  Tab:answers  ?:help  q:quit".to_string(),
            Focus::Answers => {
                "j/k:move  Enter/1-9:answer  n/p:next/prev  Tab:paths  ?:help  q:quit".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tfc_core::{Body, Document, LearningPath, Question, QuizPhase};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> TuiApp {
        let doc = Document::new("AWS Cloud Practitioner")
            .with_path(
                LearningPath::new("AWS Basics")
                    .with_question(Question::new("Q1", ["A", "B"], "B", "B it is."))
                    .with_question(Question::new("Q2", ["C", "D"], "C", "")),
            )
            .with_path(LearningPath::new("Billing").with_question(Question::new(
                "Q3",
                ["E"],
                "E",
                "",
            )));
        let mut quiz = QuizController::default();
        quiz.load(doc).unwrap();
        TuiApp::new(quiz)
    }

    #[test]
    fn starts_on_first_question() {
        let app = app();
        assert_eq!(app.quiz().phase(), QuizPhase::ShowingQuestion);
        assert_eq!(app.model().question().unwrap().text, "Q1");
    }

    #[test]
    fn enter_answers_highlighted_option() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Enter));
        let model = app.model();
        let view = model.question().unwrap();
        assert!(view.shows_explanation());
        assert_eq!(view.selected_answer(), Some(1));
    }

    #[test]
    fn digit_answers_directly() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('1')));
        assert!(app.model().question().unwrap().shows_error());
    }

    #[test]
    fn bad_digit_sets_notice() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('9')));
        assert!(app.notice.is_some());
        assert!(app.status_hint().contains("out of range"));
    }

    #[test]
    fn navigation_reaches_completion() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('n')));
        app.handle_key(key(KeyCode::Char('n')));
        assert!(app.model().is_complete());
        app.handle_key(key(KeyCode::Char('p')));
        assert!(app.model().is_complete());
    }

    #[test]
    fn previous_restores_answer_cursor() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.answer_cursor, 0);
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.answer_cursor, 1);
    }

    #[test]
    fn path_list_selects_path() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Paths);
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.focus, Focus::Answers);
        assert_eq!(app.quiz().selected_path(), 1);
        assert_eq!(app.model().question().unwrap().text, "Q3");
    }

    #[test]
    fn help_swallows_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.show_help);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.show_help);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn load_failure_only_sets_notices() {
        let mut quiz = QuizController::default();
        assert!(quiz.load_document("{").is_err());
        let mut app = TuiApp::new(quiz);
        assert!(matches!(app.model().body, Body::LoadFailed(_)));

        app.handle_key(key(KeyCode::Char('1')));
        assert!(app.notice.is_some());
        assert!(matches!(app.model().body, Body::LoadFailed(_)));

        app.notice = None;
        app.handle_key(key(KeyCode::Enter));
        assert!(app.notice.is_some());
        assert!(matches!(app.model().body, Body::LoadFailed(_)));

        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.quiz().phase(), QuizPhase::Loading);
        assert!(matches!(app.model().body, Body::LoadFailed(_)));

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.notice.is_some());
        assert!(matches!(app.model().body, Body::LoadFailed(_)));
    }
}
