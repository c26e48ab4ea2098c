use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::fetch::FetchState;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

use super::state::ProductsState;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &ProductsState) {
    let lines = match &state.fetch {
        FetchState::Idle => vec![Line::from("")],
        FetchState::Loading { .. } => vec![Line::from("Loading products...")],
        FetchState::Error { message } => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        ))],
        FetchState::Success { payload } if payload.is_empty() => {
            vec![Line::from("No products found.")]
        }
        FetchState::Success { payload } => {
            let max_title = payload
                .iter()
                .map(|p| p.title.chars().count())
                .max()
                .unwrap_or(0);
            let mut lines = Vec::with_capacity(payload.len() + 2);
            lines.push(Line::from(Span::styled(
                "Up/Down: Move  Enter: Open  r: Reload",
                Style::default().fg(MUTED_TEXT),
            )));
            lines.push(Line::from(""));
            for (idx, product) in payload.iter().enumerate() {
                let mut line = Line::from(vec![
                    Span::styled(
                        format!("{:<width$}", product.title, width = max_title + 2),
                        Style::default().fg(HEADER_TEXT),
                    ),
                    Span::styled(
                        format!("{:<14}", product.category),
                        Style::default().fg(MUTED_TEXT),
                    ),
                    Span::styled(format!("{:.2}", product.price), Style::default().fg(HEADER_TEXT)),
                ]);
                if idx == state.selected {
                    line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
                }
                lines.push(line);
            }
            lines
        }
    };

    frame.render_widget(Paragraph::new(lines), area);
}
