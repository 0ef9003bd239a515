//! Reader for the profile file the Azure CLI keeps next to its other state.

use super::error::{ProfileError, ProfileResult};
use super::model::Subscription;
use serde::Deserialize;
use std::{fs, io, path::Path};

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

#[derive(Debug, Deserialize)]
struct Profile {
    #[serde(default)]
    subscriptions: Vec<Subscription>,
}

/// Reads the cached subscriptions. An empty list is an error so callers fall
/// back to asking the CLI, which can tell the user to log in.
pub fn read(path: &Path) -> ProfileResult<Vec<Subscription>> {
    let payload = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ProfileError::Missing(path.to_path_buf()),
        _ => ProfileError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let subscriptions = parse(&payload).map_err(|source| ProfileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if subscriptions.is_empty() {
        return Err(ProfileError::Empty(path.to_path_buf()));
    }

    Ok(subscriptions)
}

fn parse(payload: &[u8]) -> serde_json::Result<Vec<Subscription>> {
    // The CLI writes this file with a byte order mark on some platforms.
    let payload = payload.strip_prefix(UTF8_BOM).unwrap_or(payload);
    let profile: Profile = serde_json::from_slice(payload)?;
    Ok(profile.subscriptions)
}
