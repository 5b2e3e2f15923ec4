//! Learning path list.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::app::{Focus, TuiApp};

/// Draw the learning path list.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let model = app.model();

    let border = if app.focus == Focus::Paths {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let items: Vec<ListItem> = model
        .paths
        .iter()
        .map(|path| {
            let style = if path.selected {
                Style::default().fg(Color::Green).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(path.title.clone(), style),
                Span::styled(
                    format!(" ({})", path.question_count),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Learning Paths ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus == Focus::Paths {
        state.select(Some(app.path_cursor));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
