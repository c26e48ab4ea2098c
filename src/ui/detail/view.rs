use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::fetch::FetchState;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

use super::state::DetailState;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &DetailState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Esc: Back to products  r: Reload",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
    ];

    match &state.fetch {
        FetchState::Idle => {}
        FetchState::Loading { .. } => lines.push(Line::from("Loading products...")),
        FetchState::Error { message } => lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        ))),
        FetchState::Success { payload } => {
            lines.push(Line::from(Span::styled(
                payload.title.clone(),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                payload.category.clone(),
                Style::default().fg(MUTED_TEXT),
            )));
            lines.push(Line::from(Span::styled(
                format!("{:.2}", payload.price),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                payload.description.clone(),
                Style::default().fg(HEADER_TEXT),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
