//! GitHub-style contribution calendar
//!
//! Columns are weeks starting on Sunday, rows are weekdays. The last column
//! holds the reference date; days after it stay empty.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::repository::DailyActivity;
use crate::theme;

pub const DEFAULT_WEEKS: usize = 53;
pub const LABEL_WIDTH: usize = 4;
pub const CELL_WIDTH: usize = 2;

const DAYS_PER_WEEK: usize = 7;
const LEVEL_SYMBOLS: [char; 5] = ['·', '░', '▒', '▓', '█'];
const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["    ", "Mon ", "    ", "Wed ", "    ", "Fri ", "    "];
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatCell {
    pub date: NaiveDate,
    pub count: u32,
    /// 0 (no activity) to 4 (busiest)
    pub level: u8,
}

type Week = [Option<HeatCell>; DAYS_PER_WEEK];

#[derive(Debug, Clone)]
pub struct Heatmap {
    weeks: Vec<Week>,
    max_count: u32,
    total_count: u64,
}

/// Intensity bucket for `count` relative to the busiest day
pub fn level_for(count: u32, max_count: u32) -> u8 {
    if count == 0 || max_count == 0 {
        return 0;
    }
    (count as u64 * 4).div_ceil(max_count as u64).clamp(1, 4) as u8
}

/// Weeks that fit in `width` columns next to the weekday labels
pub fn weeks_for_width(width: usize) -> usize {
    (width.saturating_sub(LABEL_WIDTH) / CELL_WIDTH).clamp(1, DEFAULT_WEEKS)
}

impl Heatmap {
    pub fn build(days: &[DailyActivity], end: NaiveDate, weeks: usize) -> Self {
        let weeks = weeks.max(1);
        let last_sunday = end - Days::new(end.weekday().num_days_from_sunday() as u64);
        let start = last_sunday - Days::new(((weeks - 1) * DAYS_PER_WEEK) as u64);

        let mut counts: HashMap<NaiveDate, u32> = HashMap::new();
        for day in days.iter().filter(|d| d.date >= start && d.date <= end) {
            let count = counts.entry(day.date).or_default();
            *count = count.saturating_add(day.count);
        }
        let max_count = counts.values().copied().max().unwrap_or(0);
        let total_count = counts.values().map(|&c| c as u64).sum();

        let weeks = (0..weeks)
            .map(|week| {
                std::array::from_fn(|weekday| {
                    let date = start + Days::new((week * DAYS_PER_WEEK + weekday) as u64);
                    (date <= end).then(|| {
                        let count = counts.get(&date).copied().unwrap_or(0);
                        HeatCell {
                            date,
                            count,
                            level: level_for(count, max_count),
                        }
                    })
                })
            })
            .collect();

        Self {
            weeks,
            max_count,
            total_count,
        }
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    /// Contributions inside the window
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn cell(&self, week: usize, weekday: usize) -> Option<&HeatCell> {
        self.weeks.get(week)?.get(weekday)?.as_ref()
    }

    /// Month names positioned over the week that contains the 1st
    pub fn month_label_line(&self) -> String {
        let width = LABEL_WIDTH + self.weeks.len() * CELL_WIDTH;
        let mut line: Vec<char> = vec![' '; width];
        let mut next_free = 0;

        for (idx, week) in self.weeks.iter().enumerate() {
            let Some(first) = week.iter().flatten().find(|cell| cell.date.day() == 1) else {
                continue;
            };
            let name = MONTH_NAMES[first.date.month0() as usize];
            let pos = LABEL_WIDTH + idx * CELL_WIDTH;
            if pos < next_free || pos + name.len() > width {
                continue;
            }
            for (offset, ch) in name.chars().enumerate() {
                line[pos + offset] = ch;
            }
            next_free = pos + name.len() + 1;
        }

        line.into_iter().collect::<String>().trim_end().to_string()
    }

    /// Unstyled rendering, one string per output line
    pub fn to_plain(&self) -> Vec<String> {
        let mut lines = vec![self.month_label_line()];
        for weekday in 0..DAYS_PER_WEEK {
            let mut row = String::from(WEEKDAY_LABELS[weekday]);
            for week in &self.weeks {
                let symbol = week[weekday].map_or(' ', |cell| LEVEL_SYMBOLS[cell.level as usize]);
                row.push(symbol);
                row.push(' ');
            }
            lines.push(row.trim_end().to_string());
        }
        lines
    }

    pub fn to_lines(&self) -> Vec<Line<'static>> {
        let label_style = Style::default().fg(theme::heatmap::LABEL);
        let mut lines = vec![Line::from(Span::styled(self.month_label_line(), label_style))];

        for weekday in 0..DAYS_PER_WEEK {
            let mut spans = vec![Span::styled(WEEKDAY_LABELS[weekday], label_style)];
            for week in &self.weeks {
                spans.push(match week[weekday] {
                    Some(cell) => Span::styled(
                        "■ ",
                        Style::default().fg(theme::heatmap::LEVELS[cell.level as usize]),
                    ),
                    None => Span::raw("  "),
                });
            }
            lines.push(Line::from(spans));
        }

        lines.push(self.legend());
        lines
    }

    fn legend(&self) -> Line<'static> {
        let label_style = Style::default().fg(theme::heatmap::LABEL);
        let mut spans = vec![Span::styled(
            format!("{}{} contributions  Less ", WEEKDAY_LABELS[0], self.total_count),
            label_style,
        )];
        for color in theme::heatmap::LEVELS {
            spans.push(Span::styled("■ ", Style::default().fg(color)));
        }
        spans.push(Span::styled("More", label_style));
        Line::from(spans)
    }
}

#[cfg(test)]
#[path = "heatmap_tests.rs"]
mod heatmap_tests;
