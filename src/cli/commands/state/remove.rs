use std::sync::Arc;

use crate::cli::{
    CliError, Command, CommandResult,
    context::CliContext,
    formatting::format_json_value,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Command for deleting a value from the state store.
pub struct RemoveCommand {
    context: Arc<CliContext>,
}

impl RemoveCommand {
    /// Creates a new RemoveCommand over the shared session context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

impl Command for RemoveCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let path = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <path> argument for 'remove' command".to_string())
        })?;

        match self.context.store().remove(path)? {
            Some(removed) => Ok(format!("Removed {path} (was {})", format_json_value(&removed))),
            None => Ok(format!("Nothing stored at {path}")),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "remove".to_string(),
            description: "Remove the value at a path".to_string(),
            category: "state".to_string(),
            args: vec![CommandArg {
                name: "path".to_string(),
                description: "State path".to_string(),
                required: true,
                value_type: ArgType::Path,
            }],
            examples: vec!["state remove auth.token".to_string()],
        }
    }
}
