use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Keys while the search bar has focus
pub fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
            app.directory.blur_search();
        }
        _ => {
            let changed = app.directory.search_textarea_mut().input(key);
            if changed {
                refilter(app);
            }
        }
    }
}

pub fn handle_search_paste(app: &mut App, text: &str) {
    // The search bar is a single line
    let text = text.replace(['\r', '\n'], " ");
    app.directory.search_textarea_mut().insert_str(&text);
    refilter(app);
}

fn refilter(app: &mut App) {
    app.directory.update_filter();
    app.pending_reveal = true;
}

/// Keys on the contributor list
pub fn handle_list_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('d') => app.page_scroll.page_down(),
            KeyCode::Char('u') => app.page_scroll.page_up(),
            _ => {}
        }
        return;
    }

    let directory = &mut app.directory;
    let moved = match key.code {
        KeyCode::Char('/') => {
            directory.focus_search();
            false
        }
        KeyCode::Enter => {
            app.open_detail();
            return;
        }

        KeyCode::Left | KeyCode::Char('h') => {
            directory.select_previous();
            true
        }
        KeyCode::Right | KeyCode::Char('l') => {
            directory.select_next();
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            directory.select_up();
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            directory.select_down();
            true
        }
        KeyCode::Home | KeyCode::Char('g') => {
            directory.select_first();
            true
        }
        KeyCode::End | KeyCode::Char('G') => {
            directory.select_last();
            true
        }

        KeyCode::Char('s') => {
            directory.cycle_sort();
            true
        }
        KeyCode::Char('S') => {
            directory.toggle_reverse();
            true
        }
        KeyCode::Char('r') => {
            directory.cycle_role_filter();
            true
        }
        KeyCode::Char('p') => {
            directory.cycle_period_filter();
            true
        }
        KeyCode::Char('c') => {
            directory.clear_filters();
            true
        }
        KeyCode::Char('v') => {
            directory.toggle_layout();
            true
        }

        KeyCode::PageDown => {
            app.page_scroll.page_down();
            false
        }
        KeyCode::PageUp => {
            app.page_scroll.page_up();
            false
        }
        _ => false,
    };

    if moved {
        app.pending_reveal = true;
    }
}

#[cfg(test)]
#[path = "directory_events_tests.rs"]
mod directory_events_tests;
