use std::sync::Arc;

use crate::cli::{
    CliError, Command, CommandResult, context::CliContext, types::CommandMetadata,
};

/// Prints the effective configuration as TOML.
pub struct ShowCommand {
    context: Arc<CliContext>,
}

impl ShowCommand {
    /// Creates a new ShowCommand over the shared session context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

impl Command for ShowCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        self.context
            .config()
            .to_toml_string()
            .map(|toml| toml.trim_end().to_string())
            .map_err(|e| CliError::ConfigError(e.to_string()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Show the effective configuration".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["config show".to_string()],
        }
    }
}
