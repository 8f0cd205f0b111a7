//! Formatting utilities for CLI output.
//!
//! Provides consistent formatting for state values and styled help text.

use serde_json::Value;

use crate::store::StateChange;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Blue color
    pub const BLUE: &'static str = "\x1b[34m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats category names with styling
pub fn format_category(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::BLUE, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats a JSON value as a short summary.
///
/// Scalars are shown as-is; sequences and mappings show their size rather
/// than their contents.
///
/// # Examples
///
/// ```
/// use pathstate::cli::formatting::format_json_value;
/// use serde_json::json;
///
/// assert_eq!(format_json_value(&json!("hello")), "\"hello\"");
/// assert_eq!(format_json_value(&json!(42)), "42");
/// assert_eq!(format_json_value(&json!({"a": 1, "b": 2})), "{2}");
/// ```
pub fn format_json_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => format!("\"{s}\""),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => format!("[{}]", arr.len()),
        Value::Object(map) => format!("{{{}}}", map.len()),
    }
}

/// Formats an optional value, rendering absence as `-`.
pub fn format_optional_value(value: Option<&Value>) -> String {
    value.map_or_else(|| "-".to_string(), format_json_value)
}

/// Formats a notification received by a `watch` subscription.
///
/// Shows the watched scope, the path that was written, and the old and new
/// value at the scope.
pub fn format_change(change: &StateChange) -> String {
    format!(
        "[watch {}] {}: {} -> {}",
        change.scope,
        change.path,
        format_optional_value(change.old_value.as_ref()),
        format_optional_value(change.new_value.as_ref()),
    )
}
