use std::path::PathBuf;

use thiserror::Error;
use yun_time::TimeError;

/// Errors returned by the facade, lottery and profile APIs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum YunError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error("profile I/O at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("profile JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no birth data given and no saved profile")]
    NoProfile,
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
}

impl YunError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
