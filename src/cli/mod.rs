//! Command-line interface for driving a state store from a script.
//!
//! Provides a hierarchical command system for interacting with one
//! [`PathStore`](crate::store::PathStore). Commands are organized by category
//! and automatically generate help text from metadata.

mod commands;
mod context;
pub mod formatting;
mod registry;
mod service;
mod session;
mod types;

#[cfg(test)]
mod tests;

pub use commands::{config::ShowCommand, state::GetCommand};
pub use context::{CliContext, EventSink};
pub use registry::CommandRegistry;
pub use service::CliService;
pub use session::{Session, SessionReport};
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
