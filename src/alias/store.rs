use super::error::{AliasError, AliasResult};
use super::model::AliasEntry;
use std::{
    collections::HashMap,
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

/// Append-only `<subscriptionId>:<alias>` file.
#[derive(Debug, Clone)]
pub struct AliasStore {
    path: PathBuf,
}

impl AliasStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Subscription id to alias. Later lines override earlier ones for the same id.
    pub fn load(&self) -> AliasResult<HashMap<String, String>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(source) => {
                return Err(AliasError::Open {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let contents = String::from_utf8_lossy(&bytes);
        let mut aliases = HashMap::new();

        for (number, line) in contents.lines().enumerate() {
            match AliasEntry::from_line(line) {
                Some(entry) => {
                    aliases.insert(entry.subscription_id, entry.alias);
                }
                None => debug!(line = number + 1, "skipping malformed alias line"),
            }
        }

        Ok(aliases)
    }

    pub fn append(&self, entry: &AliasEntry) -> AliasResult<()> {
        let write_err = |source| AliasError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| AliasError::Open {
                path: self.path.clone(),
                source,
            })?;

        writeln!(file, "{entry}").map_err(write_err)?;
        debug!(path = %self.path.display(), %entry, "appended alias");

        Ok(())
    }
}
