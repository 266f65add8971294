//! Tests for list and search key handling

use super::*;
use crate::directory::{LayoutMode, SortKey};
use crate::test_utils::test_helpers::{key, key_with_mods, test_app};

fn selected(app: &App) -> String {
    app.directory.selected_contributor().unwrap().username.clone()
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_search_key(app, key(KeyCode::Char(ch)));
    }
}

#[test]
fn test_slash_focuses_search() {
    let mut app = test_app();
    handle_list_key(&mut app, key(KeyCode::Char('/')));

    assert!(app.directory.is_search_focused());
}

#[test]
fn test_typing_filters_and_requests_reveal() {
    let mut app = test_app();
    app.directory.focus_search();

    type_text(&mut app, "erin");

    assert_eq!(app.directory.search_query(), "erin");
    assert_eq!(app.directory.visible_count(), 1);
    assert!(app.pending_reveal);
}

#[test]
fn test_enter_and_esc_leave_search_but_keep_query() {
    for code in [KeyCode::Enter, KeyCode::Esc] {
        let mut app = test_app();
        app.directory.focus_search();
        type_text(&mut app, "bob");

        handle_search_key(&mut app, key(code));

        assert!(!app.directory.is_search_focused());
        assert_eq!(app.directory.search_query(), "bob");
    }
}

#[test]
fn test_backspace_widens_results() {
    let mut app = test_app();
    app.directory.focus_search();
    type_text(&mut app, "erin");
    for _ in 0..4 {
        handle_search_key(&mut app, key(KeyCode::Backspace));
    }

    assert_eq!(app.directory.visible_count(), 6);
}

#[test]
fn test_paste_flattens_newlines() {
    let mut app = test_app();
    app.directory.focus_search();
    handle_search_paste(&mut app, "alice\nliddell");

    assert_eq!(app.directory.search_query(), "alice liddell");
    assert_eq!(app.directory.visible_count(), 1);
}

#[test]
fn test_hjkl_and_arrows_move_selection() {
    let mut app = test_app();
    app.directory.set_columns(2);

    handle_list_key(&mut app, key(KeyCode::Char('l')));
    assert_eq!(selected(&app), "bob");

    handle_list_key(&mut app, key(KeyCode::Char('j')));
    assert_eq!(selected(&app), "dave");

    handle_list_key(&mut app, key(KeyCode::Up));
    assert_eq!(selected(&app), "bob");

    handle_list_key(&mut app, key(KeyCode::Left));
    assert_eq!(selected(&app), "alice");
    assert!(app.pending_reveal);
}

#[test]
fn test_first_and_last() {
    let mut app = test_app();

    handle_list_key(&mut app, key(KeyCode::Char('G')));
    assert_eq!(selected(&app), "frank");

    handle_list_key(&mut app, key(KeyCode::Char('g')));
    assert_eq!(selected(&app), "alice");
}

#[test]
fn test_sort_and_reverse_keys() {
    let mut app = test_app();

    handle_list_key(&mut app, key(KeyCode::Char('s')));
    assert_eq!(app.directory.sort(), SortKey::Name);

    handle_list_key(&mut app, key(KeyCode::Char('S')));
    assert!(app.directory.is_reversed());
}

#[test]
fn test_filter_keys_and_clear() {
    let mut app = test_app();

    handle_list_key(&mut app, key(KeyCode::Char('r')));
    handle_list_key(&mut app, key(KeyCode::Char('p')));
    assert_eq!(app.directory.role_filter(), Some("core"));
    assert_eq!(app.directory.period_filter(), Some("week"));

    handle_list_key(&mut app, key(KeyCode::Char('c')));
    assert!(!app.directory.has_active_filters());
}

#[test]
fn test_v_toggles_layout() {
    let mut app = test_app();
    handle_list_key(&mut app, key(KeyCode::Char('v')));

    assert_eq!(app.directory.layout(), LayoutMode::List);
}

#[test]
fn test_enter_opens_selected_person() {
    let mut app = test_app();
    handle_list_key(&mut app, key(KeyCode::Char('l')));
    handle_list_key(&mut app, key(KeyCode::Enter));

    assert_eq!(app.detail_contributor().unwrap().username, "bob");
}

#[test]
fn test_page_keys_scroll_without_moving_selection() {
    let mut app = test_app();
    app.page_scroll.update_bounds(100, 20);

    handle_list_key(&mut app, key(KeyCode::PageDown));
    assert_eq!(app.page_scroll.offset, 10);
    assert!(!app.pending_reveal);

    handle_list_key(&mut app, key_with_mods(KeyCode::Char('u'), KeyModifiers::CONTROL));
    assert_eq!(app.page_scroll.offset, 0);
    assert_eq!(selected(&app), "alice");
}
