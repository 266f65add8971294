//! Shared test utilities for rollcall
//!
//! Fixture contributors and an `App` that starts with data already loaded.

#[cfg(test)]
pub mod test_helpers {
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::config::Config;
    use crate::repository::{
        BotFilter, Contributor, DailyActivity, Directory, LeaderboardFile, merge_leaderboards,
    };

    pub fn contributor(username: &str, points: u64) -> Contributor {
        serde_json::from_value(serde_json::json!({
            "username": username,
            "totalPoints": points,
        }))
        .unwrap()
    }

    pub fn with_profile(mut c: Contributor, name: &str, role: &str) -> Contributor {
        c.name = Some(name.to_string());
        c.role = Some(role.to_string());
        c
    }

    pub fn day(date: &str, count: u32) -> DailyActivity {
        DailyActivity {
            date: date.parse::<NaiveDate>().unwrap(),
            count,
            points: count as u64 * 5,
        }
    }

    /// Merge `(period, entries)` pairs the same way the repository does
    pub fn directory_from(files: Vec<(&str, Vec<Contributor>)>) -> Directory {
        let files = files.into_iter().map(|(period, entries)| {
            (
                period.to_string(),
                LeaderboardFile {
                    period: Some(period.to_string()),
                    updated_at: Some("2024-05-08T12:00:00Z".parse().unwrap()),
                    entries,
                },
            )
        });
        merge_leaderboards(files, &BotFilter::new())
    }

    /// Six people across two periods and two roles
    pub fn sample_directory() -> Directory {
        let mut alice = with_profile(contributor("alice", 420), "Alice Liddell", "core");
        alice.daily_activity = vec![day("2024-05-06", 3), day("2024-05-07", 1)];
        let mut bob = with_profile(contributor("bob", 310), "Bob Builder", "contributor");
        bob.daily_activity = vec![day("2024-05-01", 9)];

        directory_from(vec![
            (
                "week",
                vec![
                    alice.clone(),
                    bob.clone(),
                    with_profile(contributor("carol", 120), "Carol Danvers", "core"),
                ],
            ),
            (
                "month",
                vec![
                    alice,
                    with_profile(contributor("dave", 95), "Dave Lister", "contributor"),
                    with_profile(contributor("erin", 60), "Erin Brockovich", "contributor"),
                    contributor("frank", 10),
                ],
            ),
        ])
    }

    /// Helper to create App with default config and the sample directory loaded
    pub fn test_app() -> App {
        let mut app = App::new(&Config::default());
        app.apply_directory(sample_directory());
        app
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
