use std::sync::Arc;

use crate::cli::{
    CliError, Command, CommandResult,
    context::CliContext,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Command for reading a value from the state store.
///
/// Prints the value as compact JSON, or `(unset)` when nothing is stored.
///
/// # Example Usage
///
/// ```text
/// state get app.config.theme
/// state get app
/// ```
pub struct GetCommand {
    context: Arc<CliContext>,
}

impl GetCommand {
    /// Creates a new GetCommand over the shared session context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

impl Command for GetCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let path = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <path> argument for 'get' command".to_string())
        })?;

        match self.context.store().get(path) {
            Some(value) => Ok(format!("{path}: {value}")),
            None => Ok(format!("{path}: (unset)")),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Get the value stored at a path".to_string(),
            category: "state".to_string(),
            args: vec![CommandArg {
                name: "path".to_string(),
                description: "State path (e.g., app.config.theme)".to_string(),
                required: true,
                value_type: ArgType::Path,
            }],
            examples: vec![
                "state get app.config.theme".to_string(),
                "state get auth.role".to_string(),
            ],
        }
    }
}
