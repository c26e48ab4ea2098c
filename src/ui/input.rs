use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::editor::EditorIntent;
use crate::ui::products::ProductsIntent;
use crate::ui::route::Route;
use crate::ui::weather::WeatherIntent;

/// Route a key event to the active screen.
///
/// Screens with text input (editor, weather) own the printable keys; the
/// letter hotkeys for navigation exist only on the non-typing screens.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.route().clone() {
        Route::Home | Route::NotFound => handle_nav_key(app, key),
        Route::Products => match key.code {
            KeyCode::Up => app.dispatch_products(ProductsIntent::MoveUp),
            KeyCode::Down => app.dispatch_products(ProductsIntent::MoveDown),
            KeyCode::Enter => app.open_selected_product(),
            KeyCode::Char('r') => app.reload(),
            _ => handle_nav_key(app, key),
        },
        Route::ProductDetail(_) => match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('p') => {
                app.navigate(Route::Products)
            }
            KeyCode::Char('r') => app.reload(),
            _ => {}
        },
        Route::Editor => match key.code {
            KeyCode::Esc => app.navigate(Route::Home),
            KeyCode::Tab | KeyCode::Down => app.dispatch_editor(EditorIntent::FocusNext),
            KeyCode::BackTab | KeyCode::Up => app.dispatch_editor(EditorIntent::FocusPrev),
            KeyCode::Enter => app.submit_editor(),
            KeyCode::Backspace => app.dispatch_editor(EditorIntent::Backspace),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.dispatch_editor(EditorIntent::Input(ch))
            }
            _ => {}
        },
        Route::Weather => match key.code {
            KeyCode::Esc => app.navigate(Route::Home),
            KeyCode::Enter => app.search_weather(),
            KeyCode::Backspace => app.dispatch_weather(WeatherIntent::Backspace),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.dispatch_weather(WeatherIntent::Input(ch))
            }
            _ => {}
        },
    }
}

fn handle_nav_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') => app.navigate(Route::Home),
        KeyCode::Char('p') => app.navigate(Route::Products),
        KeyCode::Char('e') => app.navigate(Route::Editor),
        KeyCode::Char('w') => app.navigate(Route::Weather),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_q_quits_from_any_screen() {
        let mut app = App::new();
        app.navigate(Route::Editor);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn typing_q_in_editor_does_not_quit() {
        let mut app = App::new();
        app.navigate(Route::Editor);
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.editor().title, "q");
    }

    #[test]
    fn nav_keys_switch_screens_from_home() {
        let mut app = App::new();
        handle_key(&mut app, press(KeyCode::Char('w')));
        assert_eq!(app.route(), &Route::Weather);
    }

    #[test]
    fn escape_leaves_detail_for_products() {
        let mut app = App::new();
        app.navigate(Route::ProductDetail("1".to_string()));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.route(), &Route::Products);
    }
}
