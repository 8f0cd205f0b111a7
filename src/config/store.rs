use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What a write does when the new value equals the stored one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ChangePolicy {
    /// Deep-equal writes leave the tree alone and notify nobody.
    #[default]
    SkipUnchanged,

    /// Every write notifies, even when nothing changed.
    Always,
}

/// Options a [`PathStore`](crate::store::PathStore) is created with.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct StoreOptions {
    /// Whether redundant writes notify subscribers.
    #[serde(default)]
    pub change_policy: ChangePolicy,

    /// How many notification passes may nest inside a subscriber callback
    /// that writes to the store. Deeper writes are applied but notify nobody;
    /// with 0, writes made from callbacks notify nobody. Top-level writes
    /// always notify.
    #[serde(default = "StoreOptions::default_max_notify_depth")]
    pub max_notify_depth: usize,
}

impl StoreOptions {
    const DEFAULT_MAX_NOTIFY_DEPTH: usize = 32;

    /// Largest accepted `max_notify_depth`. Every nested pass adds stack
    /// frames on the writing thread.
    pub const MAX_NOTIFY_DEPTH_LIMIT: usize = 1024;

    fn default_max_notify_depth() -> usize {
        Self::DEFAULT_MAX_NOTIFY_DEPTH
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            change_policy: ChangePolicy::default(),
            max_notify_depth: Self::DEFAULT_MAX_NOTIFY_DEPTH,
        }
    }
}
