use directories::BaseDirs;
use std::{path::PathBuf, time::Duration};
use thiserror::Error;

const AZURE_DIR: &str = ".azure";
const PROFILE_FILE: &str = "azureProfile.json";
const ALIAS_FILE: &str = "aliases";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to find home directory")]
    MissingHomeDir,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Everything the components need to find their files and the external tool.
#[derive(Debug, Clone)]
pub struct Config {
    pub azure_dir: PathBuf,
    pub profile_path: PathBuf,
    pub alias_path: PathBuf,
    pub az_program: PathBuf,
    pub timeout: Duration,
}

impl Config {
    /// Resolves the azure directory from the explicit override first, then the
    /// user's home directory.
    pub fn resolve(
        azure_dir: Option<PathBuf>,
        az_program: PathBuf,
        timeout: Duration,
    ) -> ConfigResult<Self> {
        let azure_dir = match azure_dir {
            Some(dir) => dir,
            None => default_azure_dir()?,
        };

        Ok(Self::with_azure_dir(azure_dir, az_program, timeout))
    }

    pub fn with_azure_dir(azure_dir: PathBuf, az_program: PathBuf, timeout: Duration) -> Self {
        Self {
            profile_path: azure_dir.join(PROFILE_FILE),
            alias_path: azure_dir.join(ALIAS_FILE),
            azure_dir,
            az_program,
            timeout,
        }
    }
}

fn default_azure_dir() -> ConfigResult<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(AZURE_DIR))
        .ok_or(ConfigError::MissingHomeDir)
}
