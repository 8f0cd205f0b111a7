//! Configuration schema definitions and loading.
//!
//! Defines the configuration for the `pathstate` binary and the options a
//! [`PathStore`](crate::store::PathStore) is built with. All configuration is
//! serializable to/from TOML.

mod general;
mod loading;
mod paths;
mod store;

#[cfg(test)]
mod tests;

pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use store::{ChangePolicy, StoreOptions};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
///
/// Every section has defaults, so an empty file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Behavior of the state store.
    #[serde(default)]
    pub store: StoreOptions,
}
