use chrono::{DateTime, NaiveDate, Utc};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::heatmap::{Heatmap, weeks_for_width};
use crate::repository::{ActivityStat, Contributor};
use crate::theme;
use crate::widgets::text::{fit, fit_right};

const RECENT_DAYS: usize = 7;
const KIND_WIDTH: usize = 28;
const NUMBER_WIDTH: usize = 8;

/// Last day shown in the heatmap.
///
/// The leaderboard's own timestamp wins so the calendar lines up with the
/// data; a person's latest active day is the fallback, then today.
pub fn heatmap_reference_date(
    updated_at: Option<DateTime<Utc>>,
    contributor: &Contributor,
) -> NaiveDate {
    updated_at
        .map(|at| at.date_naive())
        .or_else(|| contributor.latest_activity_date())
        .unwrap_or_else(|| Utc::now().date_naive())
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(title.to_string(), theme::detail::SECTION))
}

fn field(label: &str, value: String, value_style: Style) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().fg(theme::detail::LABEL),
        ),
        Span::styled(value, value_style),
    ]
}

fn breakdown_lines(contributor: &Contributor) -> Vec<Line<'static>> {
    if contributor.activity_breakdown.is_empty() {
        return vec![Line::from(Span::styled(
            "  No recorded activity",
            Style::default().fg(theme::detail::MUTED),
        ))];
    }

    let mut rows: Vec<(&String, &ActivityStat)> = contributor.activity_breakdown.iter().collect();
    rows.sort_by(|a, b| b.1.points.cmp(&a.1.points).then_with(|| a.0.cmp(b.0)));

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "  {}{}{}",
            fit("Kind", KIND_WIDTH),
            fit_right("Count", NUMBER_WIDTH),
            fit_right("Points", NUMBER_WIDTH)
        ),
        Style::default().fg(theme::detail::LABEL),
    ))];

    for (kind, stat) in rows {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", fit(kind, KIND_WIDTH)),
                Style::default().fg(theme::detail::VALUE),
            ),
            Span::styled(
                fit_right(&stat.count.to_string(), NUMBER_WIDTH),
                Style::default().fg(theme::detail::VALUE),
            ),
            Span::styled(
                fit_right(&stat.points.to_string(), NUMBER_WIDTH),
                Style::default().fg(theme::detail::POINTS),
            ),
        ]));
    }
    lines
}

fn recent_lines(contributor: &Contributor) -> Vec<Line<'static>> {
    let days = contributor.recent_days(RECENT_DAYS);
    if days.is_empty() {
        return vec![Line::from(Span::styled(
            "  No active days",
            Style::default().fg(theme::detail::MUTED),
        ))];
    }

    days.into_iter()
        .map(|day| {
            let noun = if day.count == 1 {
                "contribution"
            } else {
                "contributions"
            };
            Line::from(vec![
                Span::styled(
                    format!("  {}  ", day.date.format("%a %Y-%m-%d")),
                    Style::default().fg(theme::detail::LABEL),
                ),
                Span::styled(
                    format!("{} {}", day.count, noun),
                    Style::default().fg(theme::detail::VALUE),
                ),
                Span::styled(
                    format!("  {} pts", day.points),
                    Style::default().fg(theme::detail::POINTS),
                ),
            ])
        })
        .collect()
}

/// Every line of the detail page for `contributor`
pub fn build_detail_page(
    contributor: &Contributor,
    reference_date: NaiveDate,
    width: u16,
) -> Vec<Line<'static>> {
    let muted = Style::default().fg(theme::detail::MUTED);
    let value = Style::default().fg(theme::detail::VALUE);

    let mut heading = vec![
        Span::styled(
            format!("#{} ", contributor.rank),
            Style::default().fg(theme::directory::RANK),
        ),
        Span::styled(contributor.username.clone(), theme::detail::USERNAME),
    ];
    if let Some(name) = contributor.name.as_ref().filter(|n| !n.trim().is_empty()) {
        heading.push(Span::styled(
            format!("  {}", name),
            Style::default().fg(theme::detail::NAME),
        ));
    }

    let mut facts = field(
        "Points",
        contributor.total_points.to_string(),
        Style::default().fg(theme::detail::POINTS),
    );
    if let Some(role) = &contributor.role {
        facts.push(Span::raw("   "));
        facts.extend(field("Role", role.clone(), value));
    }
    if !contributor.periods.is_empty() {
        facts.push(Span::raw("   "));
        facts.extend(field("Periods", contributor.periods.join(", "), value));
    }

    let mut lines = vec![
        Line::from(Span::styled("← Back to people (Esc)", muted)),
        Line::from(""),
        Line::from(heading),
        Line::from(facts),
        Line::from(field("Profile", contributor.profile_url(), theme::detail::LINK)),
        Line::from(""),
        section("Activity"),
    ];
    lines.extend(breakdown_lines(contributor));

    lines.push(Line::from(""));
    lines.push(section("Contributions"));
    let heatmap = Heatmap::build(
        &contributor.daily_activity,
        reference_date,
        weeks_for_width(width as usize),
    );
    lines.extend(heatmap.to_lines());

    lines.push(Line::from(""));
    lines.push(section("Recent activity"));
    lines.extend(recent_lines(contributor));

    lines
}

#[cfg(test)]
#[path = "detail_render_tests.rs"]
mod detail_render_tests;
