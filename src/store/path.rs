use std::fmt;

use super::StoreError;

const SEPARATOR: char = '.';

/// A validated, dot-separated location in the state tree.
///
/// Every segment is a non-empty mapping key. There is no index syntax, so a
/// segment such as `"0"` addresses a key named `"0"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatePath {
    raw: String,
    segments: Vec<String>,
}

impl StatePath {
    /// Parses a path such as `"app.config.theme"`.
    ///
    /// # Errors
    /// * `StoreError::InvalidPath` - If the path is empty, starts or ends with a
    ///   dot, or contains consecutive dots
    pub fn parse(path: &str) -> Result<Self, StoreError> {
        if path.is_empty() {
            return Err(StoreError::invalid_path(path, "path is empty"));
        }

        let segments: Vec<String> = path.split(SEPARATOR).map(str::to_string).collect();

        if let Some(position) = segments.iter().position(String::is_empty) {
            let reason = if position == 0 {
                "path starts with a separator"
            } else if position == segments.len() - 1 {
                "path ends with a separator"
            } else {
                "path contains an empty segment"
            };

            return Err(StoreError::invalid_path(path, reason));
        }

        Ok(Self {
            raw: path.to_string(),
            segments,
        })
    }

    /// The path exactly as it was written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The individual keys, root first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns true if `self` equals `other` or is a strict prefix of it on
    /// segment boundaries.
    ///
    /// # Examples
    /// * `"parent"` covers `"parent"` and `"parent.child"`
    /// * `"parent"` does not cover `"parental"` or `"other.parent"`
    pub fn covers(&self, other: &StatePath) -> bool {
        self.segments.len() <= other.segments.len()
            && self
                .segments
                .iter()
                .zip(other.segments.iter())
                .all(|(mine, theirs)| mine == theirs)
    }
}

impl fmt::Display for StatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for StatePath {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
