use std::sync::Arc;

use crate::{config::Config, store::PathStore};

use super::{CliError, CommandRegistry, context::CliContext, types::CommandMetadata};

/// High-level service for managing and executing CLI commands.
///
/// Owns the command registry and the session context the commands share.
pub struct CliService {
    registry: CommandRegistry,
    context: Arc<CliContext>,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// # Arguments
    /// * `store` - The store every state command operates on
    /// * `config` - The configuration the store was built from
    pub fn new(store: PathStore, config: Config) -> Self {
        let context = Arc::new(CliContext::new(store, config));
        let mut registry = CommandRegistry::new(context.clone());
        registry.register_all_commands();

        CliService { registry, context }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category,
    /// or the command's own error if it fails.
    pub fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        self.registry.execute(category, command_name, args)
    }

    /// Metadata of a command, used to split its arguments.
    pub fn command_metadata(&self, category: &str, command_name: &str) -> Option<CommandMetadata> {
        self.registry.metadata(category, command_name)
    }

    /// Takes the notification lines produced since the last call.
    pub fn drain_notifications(&self) -> Vec<String> {
        self.context.events().drain()
    }

    /// Help text for every registered command.
    pub fn help_text(&self) -> String {
        self.registry.help_text()
    }

    /// The store commands operate on.
    pub fn store(&self) -> &PathStore {
        self.context.store()
    }
}
