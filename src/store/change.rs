use std::time::Instant;

use serde_json::Value;

/// A single notification delivered to a subscriber.
///
/// `path` is the location that was written. `scope` is the path the receiving
/// subscription was registered on, which is either `path` itself or one of its
/// ancestors. The values are read at `scope`, so an ancestor subscriber sees
/// the whole subtree it watches.
#[derive(Debug, Clone, PartialEq)]
pub struct StateChange {
    /// Path that was written or removed (e.g., "app.config.theme").
    pub path: String,
    /// Path of the subscription this change is reported to.
    pub scope: String,
    /// Value at `scope` before the mutation, if any.
    pub old_value: Option<Value>,
    /// Value at `scope` after the mutation, if any.
    pub new_value: Option<Value>,
    /// When the mutation happened.
    pub timestamp: Instant,
}

/// Errors returned by the state store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The path does not follow the dot-separated segment grammar.
    #[error("invalid state path '{path}': {reason}")]
    InvalidPath {
        /// The path as given by the caller
        path: String,
        /// Why the path was rejected
        reason: &'static str,
    },

    /// The stored value does not match the requested type.
    #[error("Type mismatch at {path}: Expected {expected_type}, got {actual_value}")]
    TypeMismatch {
        /// The path where the type mismatch occurred.
        path: String,
        /// The expected type name.
        expected_type: &'static str,
        /// The value that was found.
        actual_value: Value,
    },

    /// A typed value could not be turned into a JSON value.
    #[error("failed to serialize value for '{path}': {details}")]
    Serialization {
        /// The path the value was meant for
        path: String,
        /// Serialization error details
        details: String,
    },
}

impl StoreError {
    pub(crate) fn invalid_path(path: &str, reason: &'static str) -> Self {
        Self::InvalidPath {
            path: path.to_string(),
            reason,
        }
    }
}

impl StateChange {
    pub(crate) fn new(
        path: String,
        scope: String,
        old_value: Option<Value>,
        new_value: Option<Value>,
    ) -> Self {
        Self {
            path,
            scope,
            old_value,
            new_value,
            timestamp: Instant::now(),
        }
    }

    /// True when the notification was delivered to a subscription on the
    /// written path itself rather than on one of its ancestors.
    pub fn is_exact(&self) -> bool {
        self.path == self.scope
    }

    /// True when the watched value no longer exists.
    pub fn is_removal(&self) -> bool {
        self.new_value.is_none()
    }

    /// Extracts the new value as a specific type.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TypeMismatch` if the value is absent or cannot be
    /// deserialized into the requested type.
    pub fn extract<T>(&self) -> Result<T, StoreError>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.new_value.clone().unwrap_or(Value::Null);

        serde_json::from_value(value.clone()).map_err(|_| StoreError::TypeMismatch {
            path: self.scope.clone(),
            expected_type: std::any::type_name::<T>(),
            actual_value: value,
        })
    }

    /// Attempts to extract the new value as a string.
    ///
    /// Returns `None` if the value is missing or not a string.
    pub fn as_string(&self) -> Option<String> {
        match &self.new_value {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    /// Extracts the new value as a string with a fallback default.
    pub fn as_string_or(&self, default: &str) -> String {
        self.as_string().unwrap_or_else(|| default.to_string())
    }
}
