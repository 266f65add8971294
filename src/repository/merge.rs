use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(debug_assertions)]
use log::debug;
use log::warn;

use super::bots::BotFilter;
use super::types::{Contributor, Directory, LeaderboardFile, SkippedFile};
use crate::error::RollcallError;

const LEADERBOARD_EXTENSION: &str = "json";

/// Reads per-period leaderboard files from one directory and merges them
#[derive(Debug, Clone)]
pub struct ContributorRepository {
    dir: PathBuf,
    bots: BotFilter,
}

impl ContributorRepository {
    pub fn new(dir: impl Into<PathBuf>, bots: BotFilter) -> Self {
        Self {
            dir: dir.into(),
            bots,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Merge every leaderboard file in the directory.
    ///
    /// Files that cannot be read or parsed are logged, recorded in
    /// `Directory::skipped` and left out; only an unreadable directory fails.
    pub fn load(&self) -> Result<Directory, RollcallError> {
        let paths = self.leaderboard_files()?;
        #[cfg(debug_assertions)]
        debug!("Merging {} leaderboard files from {:?}", paths.len(), self.dir);

        let mut skipped = Vec::new();
        let mut files = Vec::with_capacity(paths.len());

        for path in paths {
            match read_leaderboard(&path) {
                Ok(file) => {
                    let period = file.period.clone().unwrap_or_else(|| file_stem(&path));
                    files.push((period, file));
                }
                Err(e) => {
                    warn!("Skipping leaderboard file {:?}: {}", path, e);
                    skipped.push(SkippedFile {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let mut directory = merge_leaderboards(files, &self.bots);
        directory.skipped = skipped;
        Ok(directory)
    }

    /// `*.json` regular files directly inside the directory, in name order
    fn leaderboard_files(&self) -> Result<Vec<PathBuf>, RollcallError> {
        let data_dir_error = |source| RollcallError::DataDir {
            path: self.dir.clone(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(data_dir_error)? {
            let path = entry.map_err(data_dir_error)?.path();
            let is_json = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(LEADERBOARD_EXTENSION));
            if is_json && path.is_file() {
                paths.push(path);
            }
        }

        paths.sort();
        Ok(paths)
    }
}

pub fn read_leaderboard(path: &Path) -> Result<LeaderboardFile, RollcallError> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| RollcallError::InvalidJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Union of `(period, file)` pairs, one entry per username.
///
/// Usernames compare case-insensitively. The entry with the most points
/// wins (the earlier one on a tie) while the periods of every duplicate
/// accumulate. Result is ordered by points, then username, and ranked.
pub fn merge_leaderboards<I>(files: I, bots: &BotFilter) -> Directory
where
    I: IntoIterator<Item = (String, LeaderboardFile)>,
{
    let mut contributors: Vec<Contributor> = Vec::new();
    let mut by_username: HashMap<String, usize> = HashMap::new();
    let mut updated_at = None;

    for (period, file) in files {
        updated_at = updated_at.max(file.updated_at);

        for entry in file.entries {
            if bots.is_bot(&entry.username) {
                continue;
            }

            let key = entry.username.to_lowercase();
            match by_username.get(&key) {
                Some(&idx) => {
                    let kept = &mut contributors[idx];
                    if entry.total_points > kept.total_points {
                        let periods = std::mem::take(&mut kept.periods);
                        *kept = Contributor { periods, ..entry };
                    }
                    if !kept.periods.contains(&period) {
                        kept.periods.push(period.clone());
                    }
                }
                None => {
                    by_username.insert(key, contributors.len());
                    contributors.push(Contributor {
                        periods: vec![period.clone()],
                        ..entry
                    });
                }
            }
        }
    }

    contributors.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.username.to_lowercase().cmp(&b.username.to_lowercase()))
    });
    for (idx, contributor) in contributors.iter_mut().enumerate() {
        contributor.rank = idx + 1;
    }

    Directory {
        contributors,
        updated_at,
        skipped: Vec::new(),
    }
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod merge_tests;
