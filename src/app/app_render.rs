use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::App;
use crate::detail::{build_detail_page, heatmap_reference_date};
use crate::directory::{SEARCH_BAR_HEIGHT, build_directory_page, grid_columns, render_search_bar};
use crate::notification::render_notification;
use crate::theme;
use crate::widgets::scrollbar;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let list_active = self.is_list_active();
        // Must see every frame so activation changes are caught
        self.restoration.observe(list_active, &self.page_scroll);

        let (search_area, page_area, help_area) = if list_active {
            let [search, page, help] = Layout::vertical([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .areas(frame.area());
            (Some(search), page, help)
        } else {
            let [page, help] =
                Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());
            (None, page, help)
        };

        if let Some(search_area) = search_area {
            render_search_bar(&mut self.directory, frame, search_area);
        }
        self.render_page(frame, page_area);
        crate::help::help_line_render::render_line(self, frame, help_area);

        if self.help.visible {
            crate::help::help_popup_render::render_popup(self, frame);
        }

        render_notification(frame, &mut self.notification);
    }

    fn render_page(&mut self, frame: &mut Frame, area: Rect) {
        let title = match self.detail_contributor() {
            Some(contributor) => format!(" {} ", contributor.username),
            None => " People ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(title, theme::page::TITLE))
            .border_style(Style::default().fg(theme::page::BORDER))
            .style(Style::default().bg(theme::page::BACKGROUND));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (lines, selected_span) = self.page_lines(inner.width);
        let content_height = lines.len() as u32;
        self.page_scroll.update_bounds(content_height, inner.height);

        if self.pending_reveal && self.is_list_active() {
            if let Some((top, height)) = selected_span {
                self.page_scroll.ensure_visible(top, height);
            }
            self.pending_reveal = false;
        }

        frame.render_widget(
            Paragraph::new(Text::from(lines)).scroll((self.page_scroll.offset, 0)),
            inner,
        );

        let scrollbar_area = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(2),
            ..area
        };
        scrollbar::render_vertical_scrollbar(
            frame,
            scrollbar_area,
            content_height as usize,
            inner.height as usize,
            self.page_scroll.offset as usize,
            theme::page::BORDER,
        );
    }

    fn page_lines(&mut self, width: u16) -> (Vec<Line<'static>>, Option<(u16, u16)>) {
        if let Some(contributor) = self.detail_contributor() {
            let reference = heatmap_reference_date(self.updated_at, contributor);
            return (build_detail_page(contributor, reference, width), None);
        }

        if self.is_loading() {
            let loading = Line::from(Span::styled(
                "Loading leaderboards…",
                Style::default().fg(theme::page::LOADING),
            ));
            return (vec![loading], None);
        }

        self.directory.set_columns(grid_columns(width));
        let page = build_directory_page(&self.directory, self.updated_at, width);
        (page.lines, page.selected_span)
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
