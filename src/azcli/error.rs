use std::{io, time::Duration};
use thiserror::Error;

pub type ResultAzCli<T> = Result<T, ErrorAzCli>;

#[derive(Debug, Error)]
pub enum ErrorAzCli {
    #[error("Azure CLI (az) executable not found. Install Azure CLI to continue.")]
    AzNotInstalled,
    #[error("Unable to fetch any of your subscriptions with Azure CLI. Please login using `az login`.")]
    NotLoggedIn,
    #[error("Azure CLI did not finish within {0:?}")]
    Timeout(Duration),
    #[error("Azure CLI command failed with code {code:?}: {stderr}")]
    CommandFailure { code: Option<i32>, stderr: String },
    #[error("Failed to parse Azure CLI response: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Failed to execute Azure CLI: {0}")]
    Io(#[from] io::Error),
}
