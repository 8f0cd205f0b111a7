use std::sync::Arc;

use serde_json::Value;

use crate::cli::{
    CliError, Command, CommandResult,
    context::CliContext,
    formatting::format_json_value,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Command for writing a value into the state store.
pub struct SetCommand {
    context: Arc<CliContext>,
}

impl SetCommand {
    /// Creates a new SetCommand over the shared session context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }

    /// Reads the argument as JSON; anything that is not valid JSON is taken
    /// as a plain string, so `dark` and `"dark"` store the same value.
    pub(crate) fn parse_value(value_str: &str) -> Value {
        serde_json::from_str(value_str).unwrap_or_else(|_| Value::String(value_str.to_string()))
    }
}

impl Command for SetCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let path = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <path> argument for 'set' command".to_string())
        })?;

        let value_str = args.get(1).ok_or_else(|| {
            CliError::InvalidArguments("Expected <value> argument for 'set' command".to_string())
        })?;
        let value = Self::parse_value(value_str);
        let summary = format_json_value(&value);

        self.context.store().set(path, value)?;

        Ok(format!("Set {path} = {summary}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set".to_string(),
            description: "Set the value at a path, creating parents as needed".to_string(),
            category: "state".to_string(),
            args: vec![
                CommandArg {
                    name: "path".to_string(),
                    description: "State path".to_string(),
                    required: true,
                    value_type: ArgType::Path,
                },
                CommandArg {
                    name: "value".to_string(),
                    description: "New value; JSON, or a plain string".to_string(),
                    required: true,
                    value_type: ArgType::Json,
                },
            ],
            examples: vec![
                "state set user.name Alice".to_string(),
                "state set app.config {\"theme\": \"dark\", \"language\": \"fr\"}".to_string(),
            ],
        }
    }
}
