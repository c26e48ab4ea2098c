use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::fetch::FetchState;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

use super::state::WeatherState;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &WeatherState) {
    let city_text = if state.city.is_empty() {
        Span::styled("Enter city name", Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(state.city.clone(), Style::default().fg(HEADER_TEXT))
    };
    let search_label = if state.fetch.is_loading() {
        "Loading..."
    } else {
        "Search"
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "Enter: Search  Esc: Home",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("City: ", Style::default().fg(ACCENT)),
            city_text,
            Span::raw("  "),
            Span::styled(format!("[ {} ]", search_label), Style::default().fg(ACCENT)),
        ]),
        Line::from(""),
    ];

    match &state.fetch {
        FetchState::Idle => {}
        FetchState::Loading { .. } => lines.push(Line::from("Loading weather data...")),
        FetchState::Error { message } => lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        ))),
        FetchState::Success { payload } => {
            lines.push(Line::from(Span::styled(
                payload.name.clone(),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            )));
            if let Some(description) = payload.description() {
                lines.push(Line::from(Span::styled(
                    description.to_string(),
                    Style::default().fg(MUTED_TEXT),
                )));
            }
            lines.push(Line::from(Span::styled(
                format!("{:.1} °C", payload.main.temp),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}
