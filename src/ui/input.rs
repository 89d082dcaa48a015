use crate::ui::app::App;
use crate::ui::home::HomeFocus;
use crate::ui::navigation::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Char('r')) {
        app.retry();
        return;
    }

    if matches!(app.route(), Route::FighterScreen { .. }) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left) {
            app.navigate_back();
        }
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.home_mut().toggle_focus();
        return;
    }

    match app.home().focus() {
        HomeFocus::Universes => match key.code {
            KeyCode::Left | KeyCode::Char('h') => app.move_chip_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => app.move_chip_cursor(1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.activate_chip();
            }
            KeyCode::Down | KeyCode::Char('j') => app.home_mut().toggle_focus(),
            _ => {}
        },
        HomeFocus::Fighters => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if app.home().fighter_cursor() == 0 {
                    app.home_mut().toggle_focus();
                } else {
                    app.home_mut().move_fighter_cursor(-1);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => app.home_mut().move_fighter_cursor(1),
            KeyCode::PageUp => app.home_mut().move_fighter_cursor(-10),
            KeyCode::PageDown => app.home_mut().move_fighter_cursor(10),
            KeyCode::Enter => {
                app.open_focused_fighter();
            }
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
