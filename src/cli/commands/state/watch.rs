use std::sync::Arc;

use crate::cli::{
    CliError, Command, CommandResult,
    context::CliContext,
    formatting::format_change,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Command for subscribing to a path for the rest of the session.
///
/// Every notification is printed after the output of the command that
/// caused it.
pub struct WatchCommand {
    context: Arc<CliContext>,
}

impl WatchCommand {
    /// Creates a new WatchCommand over the shared session context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

impl Command for WatchCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let path = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <path> argument for 'watch' command".to_string())
        })?;

        let events = self.context.events().clone();
        let subscription = self
            .context
            .store()
            .watch(path, move |change| events.push(format_change(change)))?;

        let id = subscription.id();
        self.context.add_watch(subscription);

        Ok(format!("Watching '{path}' (subscription {id})"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "watch".to_string(),
            description: "Print changes to a path and everything below it".to_string(),
            category: "state".to_string(),
            args: vec![CommandArg {
                name: "path".to_string(),
                description: "The state path to watch".to_string(),
                required: true,
                value_type: ArgType::Path,
            }],
            examples: vec!["state watch app.config".to_string()],
        }
    }
}
