//! Tests for top-level key routing

use super::*;
use crate::test_utils::test_helpers::{key, key_with_mods, test_app};

#[test]
fn test_ctrl_c_quits_from_anywhere() {
    let mut app = test_app();
    app.directory.focus_search();

    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert!(app.should_quit());
}

#[test]
fn test_q_quits_from_list_and_detail() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());

    let mut app = test_app();
    app.open_detail();
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_q_is_typed_while_searching() {
    let mut app = test_app();
    app.directory.focus_search();

    app.handle_key_event(key(KeyCode::Char('q')));

    assert!(!app.should_quit());
    assert_eq!(app.directory.search_query(), "q");
}

#[test]
fn test_help_opens_and_swallows_keys() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('?')));
    assert!(app.help.visible);

    app.handle_key_event(key(KeyCode::Char('s')));
    assert_eq!(app.directory.sort(), crate::directory::SortKey::Points);

    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.help.visible);
}

#[test]
fn test_f1_toggles_help() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::F(1)));
    assert!(app.help.visible);

    app.handle_key_event(key(KeyCode::F(1)));
    assert!(!app.help.visible);
}

#[test]
fn test_q_closes_help_instead_of_quitting() {
    let mut app = test_app();
    app.help.open();

    app.handle_key_event(key(KeyCode::Char('q')));

    assert!(!app.help.visible);
    assert!(!app.should_quit());
}

#[test]
fn test_help_scrolls_with_j() {
    let mut app = test_app();
    app.help.open();
    app.help.scroll.update_bounds(40, 10);

    app.handle_key_event(key(KeyCode::Char('j')));

    assert_eq!(app.help.scroll.offset, 1);
}

#[test]
fn test_keys_route_to_detail_when_open() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Enter));
    assert!(!app.is_list_active());

    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.is_list_active());
}

#[test]
fn test_esc_on_list_dismisses_error() {
    let mut app = test_app();
    app.notification.show_error("Cannot read leaderboard directory data");

    app.handle_key_event(key(KeyCode::Esc));

    assert!(app.notification.current().is_none());
    assert!(app.is_list_active());
}
