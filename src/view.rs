use crate::subscription::Subscription;
use std::collections::HashMap;

pub const NO_ALIAS: &str = "(no alias)";

/// A subscription as shown in the selection table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionView {
    pub index: usize,
    pub alias: Option<String>,
    pub name: String,
    pub id: String,
    pub selected: bool,
}

impl SubscriptionView {
    pub fn alias_label(&self) -> &str {
        self.alias.as_deref().unwrap_or(NO_ALIAS)
    }

    /// `token` must already be lowercased.
    fn matches(&self, token: &str) -> bool {
        token == self.index.to_string()
            || self
                .alias
                .as_deref()
                .is_some_and(|alias| alias.to_lowercase() == token)
            || self.name.to_lowercase() == token
            || self.id.to_lowercase() == token
    }
}

/// Joins subscriptions with their aliases, keeping source order and numbering from 1.
pub fn reconcile(
    subscriptions: &[Subscription],
    aliases: &HashMap<String, String>,
) -> Vec<SubscriptionView> {
    subscriptions
        .iter()
        .enumerate()
        .map(|(i, sub)| SubscriptionView {
            index: i + 1,
            // An empty stored alias clears the previous one.
            alias: aliases.get(&sub.id).filter(|a| !a.is_empty()).cloned(),
            name: sub.name.clone(),
            id: sub.id.clone(),
            selected: sub.is_default,
        })
        .collect()
}

/// First row matching the first whitespace-delimited token of `input`.
pub fn find_selection<'a>(
    views: &'a [SubscriptionView],
    input: &str,
) -> Option<&'a SubscriptionView> {
    let token = input.split_whitespace().next()?.to_lowercase();
    views.iter().find(|view| view.matches(&token))
}
