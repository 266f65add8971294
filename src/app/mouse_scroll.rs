//! Mouse wheel handling
//!
//! The wheel scrolls the help popup while it is open, otherwise the page.

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};

use super::app_state::App;

const PAGE_SCROLL_LINES: u16 = 3;
const HELP_SCROLL_LINES: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => handle_scroll(app, ScrollDirection::Down),
        MouseEventKind::ScrollUp => handle_scroll(app, ScrollDirection::Up),
        _ => {}
    }
}

pub fn handle_scroll(app: &mut App, direction: ScrollDirection) {
    let (scroll, lines) = if app.help.visible {
        (&mut app.help.scroll, HELP_SCROLL_LINES)
    } else {
        (&mut app.page_scroll, PAGE_SCROLL_LINES)
    };

    match direction {
        ScrollDirection::Up => scroll.scroll_up(lines),
        ScrollDirection::Down => scroll.scroll_down(lines),
    }
}
