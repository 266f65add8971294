//! Builds the contributor list page as plain lines
//!
//! The page pane renders these lines through one scrolled `Paragraph`, so
//! grid cards are drawn with box characters instead of nested blocks.

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::directory_state::DirectoryState;
use super::view_options::LayoutMode;
use crate::repository::Contributor;
use crate::theme;
use crate::widgets::text::{fit, fit_right};

pub const SEARCH_BAR_HEIGHT: u16 = 3;
pub const CARD_WIDTH: usize = 30;
pub const CARD_HEIGHT: u16 = 5;
pub const CARD_GAP: usize = 1;
/// Title, update time, view options, blank
pub const HEADER_LINES: u16 = 4;

const INDICATOR_WIDTH: usize = 2;
const RANK_WIDTH: usize = 5;
const USERNAME_WIDTH: usize = 18;
const ROLE_WIDTH: usize = 14;
const POINTS_WIDTH: usize = 10;

/// Lines of one page plus where the highlighted item sits
#[derive(Debug, Default)]
pub struct PageContent {
    pub lines: Vec<Line<'static>>,
    /// `(top, height)` in page lines of the selected card or row
    pub selected_span: Option<(u16, u16)>,
}

/// Cards that fit side by side in `width` columns
pub fn grid_columns(width: u16) -> usize {
    ((width as usize + CARD_GAP) / (CARD_WIDTH + CARD_GAP)).max(1)
}

pub fn build_directory_page(
    state: &DirectoryState,
    updated_at: Option<DateTime<Utc>>,
    width: u16,
) -> PageContent {
    let mut lines = header_lines(state, updated_at);

    if state.visible_count() == 0 {
        let message = if state.total_count() == 0 {
            "No contributors found"
        } else {
            "No contributors match the current filters"
        };
        lines.push(Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(theme::directory::EMPTY),
        )));
        return PageContent {
            lines,
            selected_span: None,
        };
    }

    let (body, selected_span) = match state.layout() {
        LayoutMode::Grid => grid_body(state, width),
        LayoutMode::List => list_body(state, width),
    };
    lines.extend(body);

    // Selecting the first item also brings the header back into view
    let selected_span = selected_span.map(|(top, height)| {
        let header = HEADER_LINES as usize;
        let top = top.saturating_add(header);
        if top <= header + 1 {
            (0, saturate(top.saturating_add(height)))
        } else {
            (saturate(top), saturate(height))
        }
    });

    PageContent {
        lines,
        selected_span,
    }
}

/// Page positions are `u16` like the scroll offset; far rows pin to the end
fn saturate(lines: usize) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX)
}

fn header_lines(state: &DirectoryState, updated_at: Option<DateTime<Utc>>) -> Vec<Line<'static>> {
    let summary = if state.visible_count() == state.total_count() {
        format!("  {} contributors", state.total_count())
    } else {
        format!(
            "  {} of {} contributors",
            state.visible_count(),
            state.total_count()
        )
    };

    let updated = match updated_at {
        Some(at) => format!("Updated {}", at.format("%Y-%m-%d %H:%M UTC")),
        None => "Updated: unknown".to_string(),
    };

    let label = Style::default().fg(theme::directory::FILTER_LABEL);
    let value = Style::default().fg(theme::directory::FILTER_VALUE);
    let arrow = if state.is_reversed() { "↑" } else { "↓" };

    vec![
        Line::from(vec![
            Span::styled("People", theme::directory::HEADING),
            Span::styled(summary, Style::default().fg(theme::directory::SUMMARY)),
        ]),
        Line::from(Span::styled(
            updated,
            Style::default().fg(theme::directory::SUMMARY),
        )),
        Line::from(vec![
            Span::styled("Sort: ", label),
            Span::styled(format!("{} {}", state.sort().label(), arrow), value),
            Span::styled("  Role: ", label),
            Span::styled(state.role_filter().unwrap_or("all").to_string(), value),
            Span::styled("  Period: ", label),
            Span::styled(state.period_filter().unwrap_or("all").to_string(), value),
            Span::styled("  Layout: ", label),
            Span::styled(state.layout().label(), value),
        ]),
        Line::from(""),
    ]
}

/// Pieces laid out left to right, cut at `width` and padded to it
fn fill(pieces: Vec<(String, Style)>, width: usize) -> Vec<Span<'static>> {
    let mut remaining = width;
    let mut spans = Vec::with_capacity(pieces.len() + 1);
    let last = pieces.len().saturating_sub(1);

    for (idx, (text, style)) in pieces.into_iter().enumerate() {
        if remaining == 0 {
            break;
        }
        let len = text.chars().count();
        let text = if len > remaining || (idx == last && len < remaining) {
            fit(&text, remaining)
        } else {
            text
        };
        remaining -= text.chars().count().min(remaining);
        spans.push(Span::styled(text, style));
    }

    if remaining > 0 {
        spans.push(Span::raw(" ".repeat(remaining)));
    }
    spans
}

fn card_rows(contributor: &Contributor, width: usize, selected: bool) -> Vec<Vec<Span<'static>>> {
    let inner = width.saturating_sub(2);
    let border = Style::default().fg(if selected {
        theme::directory::CARD_BORDER_SELECTED
    } else {
        theme::directory::CARD_BORDER
    });
    let framed = |content: Vec<Span<'static>>| {
        let mut row = vec![Span::styled("│", border)];
        row.extend(content);
        row.push(Span::styled("│", border));
        row
    };

    let username_style = if selected {
        theme::directory::USERNAME.add_modifier(Modifier::REVERSED)
    } else {
        theme::directory::USERNAME
    };
    let name = contributor.name.clone().unwrap_or_default();
    let role = contributor.role.clone().unwrap_or_default();

    vec![
        vec![Span::styled(format!("╭{}╮", "─".repeat(inner)), border)],
        framed(fill(
            vec![
                (
                    format!(" #{} ", contributor.rank),
                    Style::default().fg(theme::directory::RANK),
                ),
                (contributor.username.clone(), username_style),
            ],
            inner,
        )),
        framed(fill(
            vec![(
                format!(" {}", name),
                Style::default().fg(theme::directory::NAME),
            )],
            inner,
        )),
        framed(fill(
            vec![
                (
                    format!(" {} pts", contributor.total_points),
                    Style::default().fg(theme::directory::POINTS),
                ),
                (
                    format!("  {}", role),
                    Style::default().fg(theme::directory::ROLE),
                ),
            ],
            inner,
        )),
        vec![Span::styled(format!("╰{}╯", "─".repeat(inner)), border)],
    ]
}

fn grid_body(
    state: &DirectoryState,
    width: u16,
) -> (Vec<Line<'static>>, Option<(usize, usize)>) {
    let columns = grid_columns(width);
    let card_width = (width as usize).saturating_sub(CARD_GAP * (columns - 1)) / columns;
    let visible: Vec<&Contributor> = state.visible_contributors().collect();

    let mut lines = Vec::new();
    for (row_idx, row) in visible.chunks(columns).enumerate() {
        let cards: Vec<Vec<Vec<Span<'static>>>> = row
            .iter()
            .enumerate()
            .map(|(col, contributor)| {
                let selected = row_idx * columns + col == state.selected_index();
                card_rows(contributor, card_width, selected)
            })
            .collect();

        for line_idx in 0..CARD_HEIGHT as usize {
            let mut spans = Vec::new();
            for (col, card) in cards.iter().enumerate() {
                if col > 0 {
                    spans.push(Span::raw(" ".repeat(CARD_GAP)));
                }
                spans.extend(card[line_idx].iter().cloned());
            }
            lines.push(Line::from(spans));
        }
    }

    let card_height = CARD_HEIGHT as usize;
    let row = state.selected_index() / columns;
    (lines, Some((row.saturating_mul(card_height), card_height)))
}

fn list_body(
    state: &DirectoryState,
    width: u16,
) -> (Vec<Line<'static>>, Option<(usize, usize)>) {
    let fixed = INDICATOR_WIDTH + RANK_WIDTH + 1 + USERNAME_WIDTH + 1 + ROLE_WIDTH + POINTS_WIDTH;
    let name_width = (width as usize).saturating_sub(fixed + 1);

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "{}{} {} {} {}{}",
            " ".repeat(INDICATOR_WIDTH),
            fit_right("#", RANK_WIDTH),
            fit("Username", USERNAME_WIDTH),
            fit("Name", name_width),
            fit("Role", ROLE_WIDTH),
            fit_right("Points", POINTS_WIDTH),
        ),
        theme::directory::COLUMN_HEADER,
    ))];

    for (idx, contributor) in state.visible_contributors().enumerate() {
        let selected = idx == state.selected_index();
        let indicator = if selected { "▌ " } else { "  " };
        let row_style = if selected {
            Style::default().bg(theme::directory::ROW_SELECTED_BG)
        } else {
            Style::default()
        };

        let line = Line::from(vec![
            Span::styled(
                indicator,
                Style::default().fg(theme::directory::ROW_SELECTED_INDICATOR),
            ),
            Span::styled(
                fit_right(&format!("#{}", contributor.rank), RANK_WIDTH),
                Style::default().fg(theme::directory::RANK),
            ),
            Span::raw(" "),
            Span::styled(
                fit(&contributor.username, USERNAME_WIDTH),
                theme::directory::USERNAME,
            ),
            Span::raw(" "),
            Span::styled(
                fit(contributor.name.as_deref().unwrap_or(""), name_width),
                Style::default().fg(theme::directory::NAME),
            ),
            Span::raw(" "),
            Span::styled(
                fit(contributor.role.as_deref().unwrap_or(""), ROLE_WIDTH),
                Style::default().fg(theme::directory::ROLE),
            ),
            Span::styled(
                fit_right(&contributor.total_points.to_string(), POINTS_WIDTH),
                Style::default().fg(theme::directory::POINTS),
            ),
        ])
        .style(row_style);
        lines.push(line);
    }

    // Rows start below the column header
    let top = state.selected_index().saturating_add(1);
    (lines, Some((top, 1)))
}

/// Search input with a visible/total count on the right
pub fn render_search_bar(state: &mut DirectoryState, frame: &mut Frame, area: Rect) {
    let focused = state.is_search_focused();
    let border_color = if focused {
        theme::search::BORDER_ACTIVE
    } else {
        theme::search::BORDER_INACTIVE
    };
    let title = if focused {
        " Search: "
    } else {
        " Search (press / to edit): "
    };
    let count = format!(" {}/{} ", state.visible_count(), state.total_count());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_top(
            Line::from(Span::styled(
                count,
                Style::default().fg(theme::search::MATCH_COUNT),
            ))
            .alignment(Alignment::Right),
        )
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme::search::BACKGROUND));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !focused && state.search_query().is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Type / to search by username or name",
                Style::default().fg(theme::search::PLACEHOLDER),
            )),
            inner,
        );
        return;
    }

    let textarea = state.search_textarea_mut();
    let text_color = if focused {
        theme::search::TEXT_ACTIVE
    } else {
        theme::search::TEXT_INACTIVE
    };
    textarea.set_style(
        Style::default()
            .fg(text_color)
            .bg(theme::search::BACKGROUND),
    );
    textarea.set_cursor_style(if focused {
        theme::palette::CURSOR
    } else {
        Style::default()
    });
    frame.render_widget(&*textarea, inner);
}

#[cfg(test)]
#[path = "directory_render_tests.rs"]
mod directory_render_tests;
