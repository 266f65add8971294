use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use crate::help::{HELP_FOOTER, HELP_SECTIONS, HelpSection};
use crate::theme;
use crate::widgets::{popup, scrollbar};

const MIN_FRAME_WIDTH: u16 = 40;
const MIN_FRAME_HEIGHT: u16 = 12;
const KEY_COLUMN_WIDTH: usize = 20;

/// Render the help popup; returns its area
pub fn render_popup(app: &mut App, frame: &mut Frame) -> Option<Rect> {
    let frame_area = frame.area();
    if frame_area.width < MIN_FRAME_WIDTH || frame_area.height < MIN_FRAME_HEIGHT {
        return None;
    }

    let popup_width = 64.min(frame_area.width.saturating_sub(4));
    let popup_height = 30.min(frame_area.height.saturating_sub(2));
    let popup_area = popup::centered_popup(frame_area, popup_width, popup_height);
    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(" Keyboard Shortcuts ", theme::help::TITLE))
        .border_style(Style::default().fg(theme::help::BORDER))
        .style(Style::default().bg(theme::help::BACKGROUND));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let lines = render_help_sections(HELP_SECTIONS);
    let content_height = lines.len() as u32;
    app.help
        .scroll
        .update_bounds(content_height, content_area.height);

    frame.render_widget(
        Paragraph::new(Text::from(lines)).scroll((app.help.scroll.offset, 0)),
        content_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            HELP_FOOTER,
            Style::default().fg(theme::help::FOOTER),
        )))
        .centered(),
        footer_area,
    );

    let scrollbar_area = Rect {
        y: popup_area.y + 1,
        height: popup_area.height.saturating_sub(2),
        ..popup_area
    };
    scrollbar::render_vertical_scrollbar(
        frame,
        scrollbar_area,
        content_height as usize,
        content_area.height as usize,
        app.help.scroll.offset as usize,
        theme::help::BORDER,
    );

    Some(popup_area)
}

fn render_help_sections(sections: &[HelpSection]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (idx, section) in sections.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("── {} ──", section.title),
                theme::help::SECTION_HEADER,
            ),
        ]));

        for (key, desc) in section.entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", key, width = KEY_COLUMN_WIDTH),
                    theme::help::KEY,
                ),
                Span::styled(*desc, Style::default().fg(theme::help::DESCRIPTION)),
            ]));
        }
    }

    lines
}

#[cfg(test)]
#[path = "help_popup_render_tests.rs"]
mod help_popup_render_tests;
