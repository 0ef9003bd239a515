use super::error::{ErrorAzCli, ResultAzCli};
use super::run::{CommandRunner, az, az_unit};
use crate::subscription::Subscription;

pub fn list_subscriptions(runner: &dyn CommandRunner) -> ResultAzCli<Vec<Subscription>> {
    let subscriptions: Vec<Subscription> = az(runner, &["account", "list", "-o", "json"])?;

    if subscriptions.is_empty() {
        return Err(ErrorAzCli::NotLoggedIn);
    }

    Ok(subscriptions)
}

pub fn set_subscription(runner: &dyn CommandRunner, id: &str) -> ResultAzCli<()> {
    az_unit(runner, &["account", "set", "--subscription", id])
}
