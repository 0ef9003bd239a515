mod alias;
mod azcli;
mod cmd;
mod config;
mod error;
mod prompt;
mod subscription;
mod view;

use alias::AliasStore;
use clap::Parser;
use cmd::Cli;
use config::Config;
use error::AppResult;
use owo_colors::OwoColorize;
use std::time::Duration;
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(err) = run(cli) {
        if err.needs_login() {
            eprintln!("{}", err.yellow());
        } else {
            eprintln!("{}", format!("Error: {err}").red());
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = Config::resolve(
        cli.azure_dir,
        cli.az_path,
        Duration::from_secs(cli.timeout),
    )?;
    debug!(azure_dir = %config.azure_dir.display(), "resolved configuration");

    match cli.alias {
        Some(entry) => cmd::alias::handle(&AliasStore::new(&config.alias_path), &entry),
        None => cmd::select::handle(&config),
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
