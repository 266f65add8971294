use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RollcallError {
    #[error("Cannot read leaderboard directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid leaderboard JSON in {path}: {message}")]
    InvalidJson { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory loader stopped before sending a result")]
    LoaderDisconnected,
}
