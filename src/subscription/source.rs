use super::error::{ProfileResult, SourceError, SourceResult};
use super::model::Subscription;
use crate::azcli::ResultAzCli;
use tracing::{debug, info};

/// Tries the cached read first and only runs the fallback when it fails.
pub fn load_with_fallback<C, F>(cached: C, fallback: F) -> SourceResult<Vec<Subscription>>
where
    C: FnOnce() -> ProfileResult<Vec<Subscription>>,
    F: FnOnce() -> ResultAzCli<Vec<Subscription>>,
{
    let cached = match cached() {
        Ok(subscriptions) => {
            debug!(count = subscriptions.len(), "loaded subscriptions from profile");
            return Ok(subscriptions);
        }
        Err(err) => err,
    };

    info!(reason = %cached, "profile unusable, asking the cli");

    match fallback() {
        Ok(subscriptions) => {
            debug!(count = subscriptions.len(), "loaded subscriptions from cli");
            Ok(subscriptions)
        }
        Err(source) => Err(SourceError::Unavailable { cached, source }),
    }
}
