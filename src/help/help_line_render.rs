//! Bottom line of key hints for whatever currently has the keyboard

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::theme;

/// `(key, action)` pair shown in the hint line
type Hint = (&'static str, &'static str);

const HELP_POPUP_HINTS: &[Hint] = &[("j/k", "Scroll"), ("Esc", "Close")];
const SEARCH_HINTS: &[Hint] = &[("Enter", "Done"), ("Esc", "Done"), ("Ctrl+C", "Quit")];
const DETAIL_HINTS: &[Hint] = &[
    ("Esc", "Back"),
    ("y", "Copy URL"),
    ("j/k", "Scroll"),
    ("F1/?", "Help"),
    ("q", "Quit"),
];
const LIST_HINTS: &[Hint] = &[
    ("/", "Search"),
    ("Enter", "Open"),
    ("s/S", "Sort"),
    ("r/p", "Filter"),
    ("v", "Layout"),
    ("F1/?", "Help"),
    ("q", "Quit"),
];

fn context_hints(app: &App) -> &'static [Hint] {
    if app.help.visible {
        HELP_POPUP_HINTS
    } else if app.directory.is_search_focused() {
        SEARCH_HINTS
    } else if app.detail.is_some() {
        DETAIL_HINTS
    } else {
        LIST_HINTS
    }
}

fn hint_spans(hints: &[Hint]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let action_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let separator = Span::styled(" • ", Style::default().fg(theme::help_line::SEPARATOR));

    let mut spans = vec![Span::raw(" ")];
    for (idx, (key, action)) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(separator.clone());
        }
        spans.extend([
            Span::styled(*key, key_style),
            Span::raw(" "),
            Span::styled(*action, action_style),
        ]);
    }
    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let line = Line::from(hint_spans(context_hints(app)));
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "help_line_render_tests.rs"]
mod help_line_render_tests;
