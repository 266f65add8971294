//! Directory Loader
//!
//! Runs the leaderboard merge on a background thread so the first frame can
//! draw while files are still being read.

use std::sync::mpsc::{Receiver, TryRecvError, channel};

use super::merge::ContributorRepository;
use super::types::Directory;
use crate::error::RollcallError;

/// Where the background load currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingState {
    Loading,
    Complete,
    Failed,
}

pub struct DirectoryLoader {
    state: LoadingState,
    rx: Option<Receiver<Result<Directory, RollcallError>>>,
}

impl DirectoryLoader {
    /// Spawn a background thread that merges the repository's files
    pub fn spawn_load(repository: ContributorRepository) -> Self {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let _ = tx.send(repository.load());
        });

        Self {
            state: LoadingState::Loading,
            rx: Some(rx),
        }
    }

    /// Check for the merge result without blocking.
    ///
    /// Yields the result exactly once; `None` while loading and afterwards.
    pub fn poll(&mut self) -> Option<Result<Directory, RollcallError>> {
        let rx = self.rx.as_ref()?;

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(RollcallError::LoaderDisconnected),
        };

        self.rx = None;
        self.state = if result.is_ok() {
            LoadingState::Complete
        } else {
            LoadingState::Failed
        };
        Some(result)
    }

    pub fn state(&self) -> LoadingState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadingState::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::BotFilter;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn wait_for(loader: &mut DirectoryLoader) -> Result<Directory, RollcallError> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = loader.poll() {
                return result;
            }
            assert!(Instant::now() < deadline, "loader did not finish in time");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_loader_delivers_merged_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("week.json"),
            r#"{"entries": [{"username": "alice", "totalPoints": 3}]}"#,
        )
        .unwrap();

        let mut loader =
            DirectoryLoader::spawn_load(ContributorRepository::new(dir.path(), BotFilter::new()));
        assert!(loader.is_loading());

        let directory = wait_for(&mut loader).unwrap();
        assert_eq!(directory.contributors.len(), 1);
        assert_eq!(loader.state(), LoadingState::Complete);
        assert!(loader.poll().is_none(), "result is delivered only once");
    }

    #[test]
    fn test_loader_reports_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let mut loader =
            DirectoryLoader::spawn_load(ContributorRepository::new(missing, BotFilter::new()));

        assert!(matches!(
            wait_for(&mut loader),
            Err(RollcallError::DataDir { .. })
        ));
        assert_eq!(loader.state(), LoadingState::Failed);
    }
}
