//! Main pane: the current question, the completion summary, or a load error.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use tfc_core::{Body, Feedback, QuestionView, Summary};

use crate::app::{Focus, TuiApp};

/// Draw the main pane for the current render model.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let model = app.model();
    match &model.body {
        Body::Loading => draw_message(frame, area, "Loading questions...", Color::Cyan),
        Body::LoadFailed(message) => draw_message(
            frame,
            area,
            &format!("Could not load questions:\n\n{message}"),
            Color::Red,
        ),
        Body::Question(view) => draw_question(frame, app, view, area),
        Body::Complete(summary) => draw_summary(frame, summary, area),
    }
}

fn pane_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
}

fn draw_message(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let msg = Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false })
        .block(pane_block(" Quiz ".to_string()));
    frame.render_widget(msg, area);
}

fn draw_question(frame: &mut Frame, app: &TuiApp, view: &QuestionView, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            view.text.clone(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
    ];

    for (i, answer) in view.answers.iter().enumerate() {
        let radio = if answer.selected { "(\u{2022})" } else { "( )" };
        let cursor = if app.focus == Focus::Answers && i == app.answer_cursor {
            "> "
        } else {
            "  "
        };
        let style = if answer.selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{radio} {}. {}", i + 1, answer.text), style),
        ]));
    }

    match &view.feedback {
        Feedback::Unanswered => {}
        Feedback::Correct { explanation } => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Correct!",
                Style::default().fg(Color::Green).bold(),
            )));
            if !explanation.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    explanation.clone(),
                    Style::default().fg(Color::Cyan).italic(),
                )));
            }
        }
        Feedback::Incorrect => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Incorrect, try again.",
                Style::default().fg(Color::Red).bold(),
            )));
        }
    }

    let title = format!(
        " {}: question {} of {} ",
        view.path_title, view.number, view.total
    );
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(pane_block(title));
    frame.render_widget(paragraph, area);
}

fn draw_summary(frame: &mut Frame, summary: &Summary, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Quiz complete!",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(""),
        Line::from(format!(
            "{} of {} answered correctly ({} answered).",
            summary.correct, summary.total, summary.answered
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Tab to pick another learning path.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines).block(pane_block(format!(" {} ", summary.path_title)));
    frame.render_widget(paragraph, area);
}
