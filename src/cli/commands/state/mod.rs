//! State store commands.
mod dump;
mod get;
mod remove;
mod set;
mod unwatch;
mod watch;
mod watches;

use std::sync::Arc;

pub use dump::DumpCommand;
pub use get::GetCommand;
pub use remove::RemoveCommand;
pub use set::SetCommand;
pub use unwatch::UnwatchCommand;
pub use watch::WatchCommand;
pub use watches::WatchesCommand;

use crate::cli::{CommandRegistry, context::CliContext};

/// Registers all state commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `context` - Shared session context for the commands
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    const CATEGORY_NAME: &str = "state";

    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SetCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(RemoveCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(WatchCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(UnwatchCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(WatchesCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(DumpCommand::new(context)));
}
