use crate::{
    alias::AliasStore,
    azcli::{self, AzCli, CommandRunner},
    config::Config,
    error::{AppError, AppResult},
    prompt,
    subscription::{profile, source},
    view::{self, SubscriptionView},
};
use indicatif::ProgressBar;
use inquire::InquireError;
use owo_colors::OwoColorize;
use std::time::Duration;
use tracing::{debug, info};

pub fn handle(config: &Config) -> AppResult<()> {
    let runner = AzCli::new(&config.az_program, config.timeout);
    let store = AliasStore::new(&config.alias_path);

    let views = load_views(config, &runner, &store)?;
    println!("{}", prompt::render_table(&views));
    println!();

    let input = match prompt::prompt_selection() {
        Ok(input) => input,
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            info!("selection cancelled");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    switch(&runner, &views, &input)
}

fn load_views(
    config: &Config,
    runner: &dyn CommandRunner,
    store: &AliasStore,
) -> AppResult<Vec<SubscriptionView>> {
    let subscriptions = source::load_with_fallback(
        || profile::read(&config.profile_path),
        || {
            with_spinner("Fetching subscriptions from Azure CLI", || {
                azcli::list_subscriptions(runner)
            })
        },
    )?;

    let aliases = store.load()?;
    debug!(aliases = aliases.len(), "loaded aliases");

    Ok(view::reconcile(&subscriptions, &aliases))
}

fn switch(runner: &dyn CommandRunner, views: &[SubscriptionView], input: &str) -> AppResult<()> {
    let selected = view::find_selection(views, input)
        .ok_or_else(|| AppError::SelectionNotFound(input.trim().to_string()))?;

    println!("Selected {} with ID {}", selected.name.green(), selected.id);
    azcli::set_subscription(runner, &selected.id)?;

    Ok(())
}

fn with_spinner<T>(message: &'static str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = f();

    spinner.finish_and_clear();
    result
}
