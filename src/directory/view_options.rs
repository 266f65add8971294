use std::cmp::Ordering;

use clap::ValueEnum;
use serde::Deserialize;

use crate::repository::Contributor;

/// How contributors are laid out on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Grid,
    List,
}

impl LayoutMode {
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Grid => LayoutMode::List,
            LayoutMode::List => LayoutMode::Grid,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::Grid => "Grid",
            LayoutMode::List => "List",
        }
    }
}

/// Primary ordering of the contributor list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Total points, highest first
    #[default]
    Points,
    /// Display name, A to Z
    Name,
    /// Number of recorded contributions, most first
    Activity,
}

impl SortKey {
    pub fn next(self) -> Self {
        match self {
            SortKey::Points => SortKey::Name,
            SortKey::Name => SortKey::Activity,
            SortKey::Activity => SortKey::Points,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Points => "Points",
            SortKey::Name => "Name",
            SortKey::Activity => "Activity",
        }
    }

    /// Natural order for this key, without the username tie-break
    pub fn compare(self, a: &Contributor, b: &Contributor) -> Ordering {
        match self {
            SortKey::Points => b.total_points.cmp(&a.total_points),
            SortKey::Name => a
                .display_name()
                .to_lowercase()
                .cmp(&b.display_name().to_lowercase()),
            SortKey::Activity => b.activity_count().cmp(&a.activity_count()),
        }
    }
}

/// Full ordering used by the list: key order, optionally reversed, then username
pub fn compare_contributors(
    key: SortKey,
    reversed: bool,
    a: &Contributor,
    b: &Contributor,
) -> Ordering {
    let primary = key.compare(a, b);
    let primary = if reversed { primary.reverse() } else { primary };
    primary.then_with(|| a.username.to_lowercase().cmp(&b.username.to_lowercase()))
}
