//! Tests for the activity heatmap

use super::*;
use crate::test_utils::test_helpers::day;
use proptest::prelude::*;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn sample_days() -> Vec<DailyActivity> {
    vec![
        day("2024-03-01", 50), // outside a three-week window
        day("2024-04-23", 2),
        day("2024-05-01", 8),
        day("2024-05-06", 3),
        day("2024-05-07", 1),
    ]
}

#[test]
fn test_plain_rendering_three_weeks() {
    // 2024-05-08 is a Wednesday
    let heatmap = Heatmap::build(&sample_days(), date("2024-05-08"), 3);

    assert_eq!(
        heatmap.to_plain(),
        vec![
            "      May",
            "    · · ·",
            "Mon · · ▒",
            "    ░ · ░",
            "Wed · █ ·",
            "    · ·",
            "Fri · ·",
            "    · ·",
        ]
    );
}

#[test]
fn test_window_ends_on_reference_date() {
    let heatmap = Heatmap::build(&sample_days(), date("2024-05-08"), 3);

    assert_eq!(heatmap.week_count(), 3);
    assert_eq!(heatmap.cell(0, 0).unwrap().date, date("2024-04-21"));
    assert_eq!(heatmap.cell(2, 3).unwrap().date, date("2024-05-08"));
    assert!(heatmap.cell(2, 4).is_none());
}

#[test]
fn test_days_outside_window_are_ignored() {
    let heatmap = Heatmap::build(&sample_days(), date("2024-05-08"), 3);

    assert_eq!(heatmap.max_count(), 8);
    assert_eq!(heatmap.total_count(), 14);
}

#[test]
fn test_duplicate_dates_are_summed() {
    let days = vec![day("2024-05-06", 2), day("2024-05-06", 5)];
    let heatmap = Heatmap::build(&days, date("2024-05-08"), 1);

    let monday = heatmap.cell(0, 1).unwrap();
    assert_eq!(monday.count, 7);
    assert_eq!(monday.level, 4);
}

#[test]
fn test_reference_on_saturday_fills_last_column() {
    let heatmap = Heatmap::build(&[], date("2024-05-11"), 2);

    assert!((0..7).all(|weekday| heatmap.cell(1, weekday).is_some()));
}

#[test]
fn test_empty_activity_is_all_level_zero() {
    let heatmap = Heatmap::build(&[], date("2024-05-08"), 4);

    assert_eq!(heatmap.max_count(), 0);
    assert!(
        (0..4)
            .flat_map(|w| (0..7).map(move |d| (w, d)))
            .filter_map(|(w, d)| heatmap.cell(w, d))
            .all(|cell| cell.level == 0)
    );
}

#[test]
fn test_level_for_buckets() {
    assert_eq!(level_for(0, 10), 0);
    assert_eq!(level_for(1, 10), 1);
    assert_eq!(level_for(3, 10), 2);
    assert_eq!(level_for(6, 10), 3);
    assert_eq!(level_for(10, 10), 4);
}

#[test]
fn test_weeks_for_width() {
    assert_eq!(weeks_for_width(0), 1);
    assert_eq!(weeks_for_width(24), 10);
    assert_eq!(weeks_for_width(500), DEFAULT_WEEKS);
}

#[test]
fn test_month_label_without_room_is_dropped() {
    // June 1st falls in the only column, but "Jun" would run past the edge
    let heatmap = Heatmap::build(&[], date("2024-06-01"), 1);
    assert_eq!(heatmap.month_label_line(), "");
}

#[test]
fn test_month_labels_sit_over_week_of_the_first() {
    let heatmap = Heatmap::build(&[], date("2024-07-13"), 10);
    assert_eq!(heatmap.month_label_line(), "          Jun       Jul");
}

#[test]
fn test_styled_lines_have_labels_rows_and_legend() {
    let heatmap = Heatmap::build(&sample_days(), date("2024-05-08"), 3);
    let lines = heatmap.to_lines();

    assert_eq!(lines.len(), 9);
    let legend: String = lines[8].spans.iter().map(|s| s.content.as_ref()).collect();
    assert!(legend.contains("14 contributions"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_levels_stay_in_range_and_busiest_day_is_four(
        counts in prop::collection::vec(0u32..1000, 1..30)
    ) {
        let end = date("2024-05-31");
        let days: Vec<DailyActivity> = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| DailyActivity {
                date: end - Days::new(i as u64),
                count,
                points: 0,
            })
            .collect();

        let heatmap = Heatmap::build(&days, end, 6);
        let max = counts.iter().copied().max().unwrap_or(0);

        for week in 0..heatmap.week_count() {
            for weekday in 0..7 {
                if let Some(cell) = heatmap.cell(week, weekday) {
                    prop_assert!(cell.level <= 4);
                    prop_assert_eq!(cell.level == 0, cell.count == 0);
                    if max > 0 && cell.count == max {
                        prop_assert_eq!(cell.level, 4);
                    }
                }
            }
        }
    }
}
