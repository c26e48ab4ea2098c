use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use storefront::ui::app::{App, UiCommand};
use storefront::ui::input::handle_key;
use storefront::ui::render::draw;

pub type CommandRx = tokio::sync::mpsc::UnboundedReceiver<UiCommand>;

/// App wired to an inspectable command channel instead of a real worker.
pub fn app_with_worker() -> (App, CommandRx) {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let mut app = App::new();
    app.attach_worker(tx);
    (app, rx)
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Render the app into a test backend and return the screen as plain text.
pub fn screen_text(app: &App) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");

    let buffer = terminal.backend().buffer().clone();
    let area = *buffer.area();
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell((x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}
