use crate::alias::{AliasEntry, AliasStore};
use crate::error::AppResult;
use tracing::debug;

pub fn handle(store: &AliasStore, entry: &AliasEntry) -> AppResult<()> {
    debug!(path = %store.path().display(), "saving alias");
    store.append(entry)?;
    println!(
        "Alias '{}' added for subscription ID '{}'.",
        entry.alias, entry.subscription_id
    );
    Ok(())
}
