//! Selected grouping and ordering, persisted across sessions.

use super::{GroupKey, SortKey};
use crate::integrations::preferences::PreferenceStore;
use anyhow::{Context, Result};
use std::str::FromStr;

/// Preference key for the grouping choice
pub const GROUP_BY_KEY: &str = "groupBy";
/// Preference key for the ordering choice
pub const SORT_BY_KEY: &str = "sortBy";

pub struct ViewState {
    group_by: GroupKey,
    sort_by: SortKey,
    store: Box<dyn PreferenceStore>,
}

impl std::fmt::Debug for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewState")
            .field("group_by", &self.group_by)
            .field("sort_by", &self.sort_by)
            .finish_non_exhaustive()
    }
}

impl ViewState {
    /// Read both preferences, falling back to defaults when a value is
    /// absent or not recognized.
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let group_by: GroupKey = read_key(&*store, GROUP_BY_KEY);
        let sort_by: SortKey = read_key(&*store, SORT_BY_KEY);
        tracing::debug!("View state loaded: group_by={} sort_by={}", group_by, sort_by);
        Self {
            group_by,
            sort_by,
            store,
        }
    }

    pub fn group_by(&self) -> GroupKey {
        self.group_by
    }

    pub fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    /// Change the grouping and write it through to the preference store.
    ///
    /// The in-memory value is updated even when persisting fails.
    pub fn set_group_by(&mut self, key: GroupKey) -> Result<()> {
        self.group_by = key;
        self.store
            .set(GROUP_BY_KEY, key.as_str())
            .context("Failed to persist grouping preference")
    }

    /// Change the ordering and write it through to the preference store.
    pub fn set_sort_by(&mut self, key: SortKey) -> Result<()> {
        self.sort_by = key;
        self.store
            .set(SORT_BY_KEY, key.as_str())
            .context("Failed to persist ordering preference")
    }

    /// Hand back the underlying store (used to simulate a restart).
    pub fn into_store(self) -> Box<dyn PreferenceStore> {
        self.store
    }
}

fn read_key<K>(store: &dyn PreferenceStore, name: &str) -> K
where
    K: FromStr + Default,
    K::Err: std::fmt::Display,
{
    match store.get(name) {
        None => K::default(),
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!("Ignoring stored {}: {}", name, e);
            K::default()
        }),
    }
}
