use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::clipboard::clipboard_events;

/// Keys on the detail page
pub fn handle_detail_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('d') => app.page_scroll.page_down(),
            KeyCode::Char('u') => app.page_scroll.page_up(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            app.close_detail();
        }
        KeyCode::Char('y') => {
            clipboard_events::copy_profile_url(app);
        }
        KeyCode::Down | KeyCode::Char('j') => app.page_scroll.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => app.page_scroll.scroll_up(1),
        KeyCode::PageDown => app.page_scroll.page_down(),
        KeyCode::PageUp => app.page_scroll.page_up(),
        KeyCode::Home | KeyCode::Char('g') => app.page_scroll.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.page_scroll.jump_to_bottom(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{key, test_app};

    fn app_with_detail() -> App {
        let mut app = test_app();
        assert!(app.open_detail());
        app
    }

    #[test]
    fn test_back_keys_close_detail() {
        for code in [
            KeyCode::Esc,
            KeyCode::Backspace,
            KeyCode::Left,
            KeyCode::Char('h'),
        ] {
            let mut app = app_with_detail();
            handle_detail_key(&mut app, key(code));
            assert!(app.is_list_active(), "{:?} should go back", code);
        }
    }

    #[test]
    fn test_scroll_keys_move_page() {
        let mut app = app_with_detail();
        app.page_scroll.update_bounds(60, 20);

        handle_detail_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.page_scroll.offset, 1);

        handle_detail_key(&mut app, key(KeyCode::Char('G')));
        assert_eq!(app.page_scroll.offset, 40);

        handle_detail_key(&mut app, key(KeyCode::PageUp));
        assert_eq!(app.page_scroll.offset, 30);

        handle_detail_key(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.page_scroll.offset, 0);
    }

    #[test]
    fn test_other_keys_keep_detail_open() {
        let mut app = app_with_detail();
        handle_detail_key(&mut app, key(KeyCode::Char('s')));

        assert!(!app.is_list_active());
    }
}
