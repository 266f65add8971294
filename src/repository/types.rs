use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Points and occurrences for one kind of activity (e.g. "PR merged")
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStat {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub points: u64,
}

/// Activity recorded for a single calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub date: NaiveDate,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub points: u64,
}

/// One leaderboard entry, and after merging, one person in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub total_points: u64,
    #[serde(default)]
    pub activity_breakdown: BTreeMap<String, ActivityStat>,
    #[serde(default)]
    pub daily_activity: Vec<DailyActivity>,
    /// Leaderboard periods this person appeared in; filled while merging
    #[serde(default, skip_deserializing)]
    pub periods: Vec<String>,
    /// 1-based position by points; filled while merging
    #[serde(default, skip_deserializing)]
    pub rank: usize,
}

impl Contributor {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }

    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.username)
    }

    /// Sum of all daily activity counts
    pub fn activity_count(&self) -> u64 {
        self.daily_activity.iter().map(|day| day.count as u64).sum()
    }

    /// Days with activity, newest first
    pub fn recent_days(&self, limit: usize) -> Vec<&DailyActivity> {
        let mut days: Vec<&DailyActivity> = self
            .daily_activity
            .iter()
            .filter(|day| day.count > 0)
            .collect();
        days.sort_by(|a, b| b.date.cmp(&a.date));
        days.truncate(limit);
        days
    }

    pub fn latest_activity_date(&self) -> Option<NaiveDate> {
        self.daily_activity.iter().map(|day| day.date).max()
    }
}

/// On-disk shape of one per-period leaderboard file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardFile {
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub entries: Vec<Contributor>,
}

/// A leaderboard file the merge could not use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Merged, de-duplicated view over every leaderboard file
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Directory {
    pub contributors: Vec<Contributor>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub skipped: Vec<SkippedFile>,
}

impl Directory {
    /// Distinct roles in first-seen order
    pub fn roles(&self) -> Vec<String> {
        let mut roles: Vec<String> = Vec::new();
        for role in self.contributors.iter().filter_map(|c| c.role.as_ref()) {
            if !roles.contains(role) {
                roles.push(role.clone());
            }
        }
        roles
    }

    /// Distinct periods in first-seen order
    pub fn periods(&self) -> Vec<String> {
        let mut periods: Vec<String> = Vec::new();
        for period in self.contributors.iter().flat_map(|c| c.periods.iter()) {
            if !periods.contains(period) {
                periods.push(period.clone());
            }
        }
        periods
    }
}
