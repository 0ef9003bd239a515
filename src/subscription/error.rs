use crate::azcli::ErrorAzCli;
use std::{io, path::PathBuf};
use thiserror::Error;

pub type ProfileResult<T> = Result<T, ProfileError>;
pub type SourceResult<T> = Result<T, SourceError>;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Unable to locate {0}")]
    Missing(PathBuf),
    #[error("Unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("No subscriptions in {0}")]
    Empty(PathBuf),
}

#[derive(Debug, Error)]
pub enum SourceError {
    /// Neither the cached profile nor the external CLI produced subscriptions.
    #[error("{source}")]
    Unavailable {
        cached: ProfileError,
        #[source]
        source: ErrorAzCli,
    },
}

impl SourceError {
    pub fn cli_error(&self) -> &ErrorAzCli {
        match self {
            SourceError::Unavailable { source, .. } => source,
        }
    }
}
