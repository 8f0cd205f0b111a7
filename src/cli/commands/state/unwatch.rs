use std::sync::Arc;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        context::CliContext,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    store::SubscriptionId,
};

/// Command for cancelling a watch started earlier in the session.
pub struct UnwatchCommand {
    context: Arc<CliContext>,
}

impl UnwatchCommand {
    /// Creates a new UnwatchCommand over the shared session context.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

impl Command for UnwatchCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let raw_id = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <id> argument for 'unwatch' command".to_string())
        })?;

        let id = raw_id
            .parse::<u64>()
            .map(SubscriptionId::from)
            .map_err(|_| CliError::InvalidArguments(format!("Invalid subscription id '{raw_id}'")))?;

        let subscription = self.context.take_watch(id).ok_or_else(|| {
            CliError::InvalidArguments(format!("No active watch with id {id}"))
        })?;

        subscription.unsubscribe();

        Ok(format!("Stopped watching '{}'", subscription.path()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "unwatch".to_string(),
            description: "Stop a watch by its subscription id".to_string(),
            category: "state".to_string(),
            args: vec![CommandArg {
                name: "id".to_string(),
                description: "Subscription id printed by 'state watch'".to_string(),
                required: true,
                value_type: ArgType::Number,
            }],
            examples: vec!["state unwatch 1".to_string()],
        }
    }
}
