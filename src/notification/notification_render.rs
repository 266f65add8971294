use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::{popup, text::fit};

const MARGIN: u16 = 2;
/// Borders plus one space of padding per side
const CHROME_WIDTH: u16 = 4;

/// Draw the current notification over whatever is already in the frame
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let frame_area = frame.area();
    let max_width = frame_area.width.saturating_sub(MARGIN * 2);
    let width = (notif.message.chars().count() as u16 + CHROME_WIDTH).min(max_width);
    let height = 3.min(frame_area.height.saturating_sub(MARGIN * 2));

    if width < 5 || height < 3 {
        return;
    }

    let area = Rect {
        x: frame_area.x + frame_area.width - width - MARGIN,
        y: frame_area.y + MARGIN,
        width,
        height,
    };

    popup::clear_area(frame, area);

    let colors = notif.notification_type.colors();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg));

    let message = fit(&notif.message, (width - CHROME_WIDTH) as usize);
    let text = Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(colors.fg).bg(colors.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
