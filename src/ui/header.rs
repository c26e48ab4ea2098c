use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::route::Route;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

/// Top nav bar: one link per route, active one highlighted.
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, route: &Route) -> Paragraph<'static> {
        let links = [
            ("Home", matches!(route, Route::Home)),
            (
                "Products",
                matches!(route, Route::Products | Route::ProductDetail(_)),
            ),
            ("Editor", matches!(route, Route::Editor)),
            ("Weather", matches!(route, Route::Weather)),
        ];

        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![Span::styled("  ", Style::default())];
        for (idx, (label, active)) in links.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  │  ", separator_style));
            }
            let style = if *active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            spans.push(Span::styled(*label, style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
