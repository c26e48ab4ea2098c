use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::route::Route;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::ui::{detail, editor, products, weather};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.route()), header);
    frame.render_widget(Clear, body);

    match app.route() {
        Route::Home => render_home(frame, body),
        Route::Products => products::render(frame, body, app.products()),
        Route::ProductDetail(_) => detail::render(frame, body, app.detail()),
        Route::Editor => editor::render(frame, body, app.editor()),
        Route::Weather => weather::render(frame, body, app.weather()),
        Route::NotFound => render_not_found(frame, body),
    }

    frame.render_widget(Footer::new().widget(app.route(), footer), footer);
}

fn render_home(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Storefront",
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Browse products, create new ones, or look up the weather.",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "p: Products   e: Editor   w: Weather",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_not_found(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "404 — Page not found",
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "h: Home",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
