use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_scroll;
use crate::detail::detail_events;
use crate::directory::directory_events;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    mouse_scroll::handle_mouse_event(self, mouse_event);
                }
                Event::Paste(text) if self.directory.is_search_focused() => {
                    directory_events::handle_search_paste(self, &text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.help.visible {
            self.handle_help_key(key);
            return;
        }

        if self.directory.is_search_focused() {
            directory_events::handle_search_key(self, key);
            return;
        }

        match key.code {
            KeyCode::F(1) | KeyCode::Char('?') => {
                self.help.open();
                return;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        // Esc has no other use on the list, so it clears a lingering message there
        if key.code == KeyCode::Esc
            && self.detail.is_none()
            && self.notification.current().is_some()
        {
            self.notification.dismiss();
            return;
        }

        if self.detail.is_some() {
            detail_events::handle_detail_key(self, key);
        } else {
            directory_events::handle_list_key(self, key);
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.help.close();
            }
            KeyCode::Char('j') | KeyCode::Down => self.help.scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.help.scroll.scroll_up(1),
            KeyCode::PageDown => self.help.scroll.page_down(),
            KeyCode::PageUp => self.help.scroll.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.help.scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.help.scroll.jump_to_bottom(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
