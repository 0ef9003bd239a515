use std::path::PathBuf;
use thiserror::Error;

pub type AliasResult<T> = Result<T, AliasError>;

#[derive(Debug, Error)]
pub enum AliasError {
    #[error("Invalid alias format. Use <subscriptionId>:<alias>")]
    InvalidFormat,
    #[error("Error opening alias file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error writing to alias file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
