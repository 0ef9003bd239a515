use crate::{
    alias::AliasError,
    azcli::ErrorAzCli,
    config::ConfigError,
    subscription::SourceError,
};
use inquire::InquireError;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("Unable to set subscription: {0}")]
    AzCli(#[from] ErrorAzCli),
    #[error("Error saving alias: {0}")]
    Alias(#[from] AliasError),
    #[error("Failed to read selection: {0}")]
    Prompt(#[from] InquireError),
    #[error("No subscription matches '{0}'")]
    SelectionNotFound(String),
}

impl AppError {
    /// The CLI answered but has no subscriptions, so the user has to log in first.
    pub fn needs_login(&self) -> bool {
        matches!(self, AppError::Source(err) if matches!(err.cli_error(), ErrorAzCli::NotLoggedIn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscription::ProfileError;
    use std::path::PathBuf;

    fn unavailable(source: ErrorAzCli) -> AppError {
        AppError::Source(SourceError::Unavailable {
            cached: ProfileError::Missing(PathBuf::from("azureProfile.json")),
            source,
        })
    }

    #[test]
    fn empty_cli_listing_needs_login() {
        assert!(unavailable(ErrorAzCli::NotLoggedIn).needs_login());
        assert!(!unavailable(ErrorAzCli::AzNotInstalled).needs_login());
        assert!(!AppError::SelectionNotFound("x".into()).needs_login());
    }

    #[test]
    fn unavailable_source_reports_the_cli_failure() {
        let message = unavailable(ErrorAzCli::AzNotInstalled).to_string();

        assert!(message.contains("executable not found"));
    }
}
