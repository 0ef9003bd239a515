pub mod alias;
pub mod select;

use crate::{alias::AliasEntry, config::DEFAULT_TIMEOUT_SECS};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "azs",
    version,
    about = "alias and switch azure cli subscriptions",
    long_about = "Lists your Azure subscriptions with the aliases you gave them and switches the Azure CLI to the one you pick."
)]
pub struct Cli {
    /// Set a subscription alias by <subscriptionId>:<alias>
    #[arg(long, value_name = "SUBSCRIPTION_ID:ALIAS")]
    pub alias: Option<AliasEntry>,

    /// Azure CLI configuration directory (defaults to ~/.azure)
    #[arg(long, env = "AZURE_CONFIG_DIR", value_name = "DIR")]
    pub azure_dir: Option<PathBuf>,

    /// Azure CLI executable
    #[arg(long, env = "AZS_AZ_PATH", default_value = "az", value_name = "PATH")]
    pub az_path: PathBuf,

    /// Seconds to wait for each Azure CLI invocation
    #[arg(long, env = "AZS_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS, value_name = "SECS")]
    pub timeout: u64,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_flag_is_parsed() {
        let cli = Cli::try_parse_from(["azs", "--alias", "abc-123:dev"]).unwrap();

        let entry = cli.alias.unwrap();
        assert_eq!(entry.subscription_id, "abc-123");
        assert_eq!(entry.alias, "dev");
    }

    #[test]
    fn empty_alias_flag_is_accepted() {
        let cli = Cli::try_parse_from(["azs", "--alias", "abc-123:"]).unwrap();

        let entry = cli.alias.unwrap();
        assert_eq!(entry.subscription_id, "abc-123");
        assert_eq!(entry.alias, "");
    }

    #[test]
    fn azure_dir_flag_wins_over_environment() {
        // Other tests in this process never read AZURE_CONFIG_DIR back.
        unsafe { std::env::set_var("AZURE_CONFIG_DIR", "/tmp/from-env") };

        let from_env = Cli::try_parse_from(["azs"]).unwrap();
        let from_flag = Cli::try_parse_from(["azs", "--azure-dir", "/tmp/from-flag"]).unwrap();

        unsafe { std::env::remove_var("AZURE_CONFIG_DIR") };

        assert_eq!(from_env.azure_dir, Some(PathBuf::from("/tmp/from-env")));
        assert_eq!(from_flag.azure_dir, Some(PathBuf::from("/tmp/from-flag")));
    }

    #[test]
    fn malformed_alias_flag_is_rejected() {
        assert!(Cli::try_parse_from(["azs", "--alias", "abc-123"]).is_err());
    }

    #[test]
    fn debug_flag_counts() {
        let cli = Cli::try_parse_from(["azs", "-dd", "--timeout", "3"]).unwrap();

        assert_eq!(cli.debug, 2);
        assert_eq!(cli.timeout, 3);
        assert!(cli.alias.is_none());
    }
}
