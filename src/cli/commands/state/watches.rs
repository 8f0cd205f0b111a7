use std::sync::Arc;

use crate::cli::{Command, CommandResult, context::CliContext, types::CommandMetadata};

/// Lists the watches that are still running.
pub struct WatchesCommand {
    context: Arc<CliContext>,
}

impl WatchesCommand {
    /// Creates a new WatchesCommand over the shared session context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

impl Command for WatchesCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let watches = self.context.active_watches();

        if watches.is_empty() {
            return Ok("No active watches".to_string());
        }

        let lines: Vec<String> = watches
            .into_iter()
            .map(|(id, path)| format!("{id}\t{path}"))
            .collect();

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "watches".to_string(),
            description: "List active watches".to_string(),
            category: "state".to_string(),
            args: vec![],
            examples: vec!["state watches".to_string()],
        }
    }
}
