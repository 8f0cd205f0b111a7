//! pathstate - reactive application state addressed by dot-separated paths.
//!
//! The heart of the crate is [`PathStore`](store::PathStore): one in-memory
//! JSON tree per instance, read and written by path, with subscribers that
//! are notified synchronously when a path or anything below it changes.
//!
//! - `get` never fails; missing paths read as `None`
//! - `set` creates intermediate mappings as needed
//! - subscribers on an ancestor path receive the updated subtree
//!
//! # Quick Start
//!
//! ```rust
//! use pathstate::store::PathStore;
//! use serde_json::json;
//!
//! let store = PathStore::new();
//! let subscription = store
//!     .subscribe("app", |new, _old| println!("app is now {new:?}"))
//!     .unwrap();
//!
//! store.set("app.config", json!({ "theme": "dark" })).unwrap();
//! assert_eq!(store.get("app.config.theme"), Some(json!("dark")));
//!
//! subscription.unsubscribe();
//! ```

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Reactive path store with synchronous change notification.
pub mod store;

/// Script-driven command-line interface over a store.
pub mod cli;

/// Tracing subscriber setup for the binary.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{PathStateError, Result};
pub use store::{PathStore, StateChange, StatePath, StoreError, Subscription, SubscriptionId};
