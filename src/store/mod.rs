//! Reactive path store.
//!
//! Holds application state as one JSON tree addressed by dot-separated paths
//! and notifies subscribers synchronously when a path or any of its
//! descendants changes.

mod change;
mod path;
mod path_ops;
mod path_store;
mod registry;

#[cfg(test)]
mod tests;

pub use change::{StateChange, StoreError};
pub use path::StatePath;
pub use path_store::PathStore;
pub use registry::{Subscription, SubscriptionId};
