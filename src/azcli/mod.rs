mod error;
mod run;
mod subscription;

pub use error::*;
pub use run::{AzCli, CommandOutput, CommandRunner};
pub use subscription::{list_subscriptions, set_subscription};
