use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};

use super::state::{EditorField, EditorState, SubmitState};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &EditorState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Create a product",
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Tab: Next field  Enter: Submit  Esc: Home",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
    ];

    lines.push(field_line(
        "Title",
        &state.title,
        "e.g. Blue Hoodie",
        state.focused == EditorField::Title,
    ));
    lines.push(field_line(
        "Price",
        &state.price,
        "e.g. 39.99",
        state.focused == EditorField::Price,
    ));
    lines.push(field_line(
        "Image",
        &state.image,
        "e.g. https://...",
        state.focused == EditorField::Image,
    ));
    lines.push(Line::from(""));

    match &state.submit {
        SubmitState::Idle => {}
        SubmitState::Error { message } => lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        ))),
        SubmitState::Submitting { .. } => {}
        SubmitState::Created { id, .. } => {
            let id = id.map(|id| id.to_string()).unwrap_or_else(|| "N/A".to_string());
            lines.push(Line::from(Span::styled(
                format!("Product created! (server id: {})", id),
                Style::default().fg(STATUS_OK),
            )));
        }
    }

    let submit_label = if state.is_submitting() {
        "Creating..."
    } else {
        "Create Product"
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", submit_label),
        Style::default().fg(ACCENT),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

fn field_line(label: &str, value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let (text, text_style) = if value.is_empty() {
        (placeholder.to_string(), Style::default().fg(MUTED_TEXT))
    } else {
        (value.to_string(), Style::default().fg(HEADER_TEXT))
    };
    let label_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Line::from(vec![
        Span::styled(format!("{}{:<7}", marker, label), label_style),
        Span::styled(text, text_style),
    ])
}
