use std::sync::Arc;

use crate::cli::{Command, CommandResult, context::CliContext, types::CommandMetadata};

/// Prints the whole state tree as pretty JSON.
pub struct DumpCommand {
    context: Arc<CliContext>,
}

impl DumpCommand {
    /// Creates a new DumpCommand over the shared session context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

impl Command for DumpCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        Ok(format!("{:#}", self.context.store().snapshot()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "dump".to_string(),
            description: "Print the whole state tree".to_string(),
            category: "state".to_string(),
            args: vec![],
            examples: vec!["state dump".to_string()],
        }
    }
}
