use std::{collections::HashMap, sync::Arc};

use super::{
    CliError, Command,
    commands::{config, state},
    context::CliContext,
    formatting::{format_category, format_command, format_description, format_header},
    types::CommandMetadata,
};

/// Registry for CLI commands organized by category.
///
/// The CommandRegistry provides a hierarchical structure for managing CLI commands,
/// allowing commands to be grouped by logical categories (e.g., "state", "config").
/// This design enables scalable command organization and avoids the anti-pattern of
/// giant match statements that become unmaintainable as the CLI grows.
///
/// # Example Structure
///
/// ```text
/// registry
/// ├── state
/// │   ├── get
/// │   ├── set
/// │   ├── remove
/// │   ├── watch
/// │   ├── unwatch
/// │   ├── watches
/// │   └── dump
/// └── config
///     ├── show
///     └── schema
/// ```
pub struct CommandRegistry {
    /// Nested HashMap structure: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    context: Arc<CliContext>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    ///
    /// The registry starts with no commands registered. Commands must be added
    /// using the `register_command` method, typically during application initialization.
    pub fn new(context: Arc<CliContext>) -> Self {
        let categories = HashMap::new();
        Self {
            categories,
            context,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// Commands are automatically organized by category, with the command's name
    /// (from its metadata) used as the key within that category. If a command
    /// with the same name already exists in the category, it will be replaced.
    ///
    /// # Arguments
    ///
    /// * `category` - The category to register the command under (e.g., "state")
    /// * `command` - The command implementation to register
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// This method looks up the command in the registry's hierarchical structure
    /// and delegates execution to the command implementation. The command is
    /// responsible for its own argument validation and execution logic.
    ///
    /// # Arguments
    ///
    /// * `category` - The category containing the command
    /// * `command_name` - The name of the command to execute
    /// * `args` - Arguments to pass to the command
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if:
    /// - The specified category doesn't exist
    /// - The specified command doesn't exist within the category
    ///
    /// Other errors may be returned by the command's execute method.
    pub fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find command '{command_name}'"))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args)
    }

    /// Lists all registered commands organized by category.
    ///
    /// Returns a vector of tuples where each tuple contains:
    /// - Category name
    /// - Vector of command names within that category
    ///
    /// Categories and commands are sorted alphabetically for consistent display.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut categories: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut command_list: Vec<String> = commands.keys().cloned().collect();
                command_list.sort();

                (category.clone(), command_list)
            })
            .collect();

        categories.sort();

        categories
    }

    /// Returns the metadata of a registered command, if it exists.
    pub fn metadata(&self, category: &str, command_name: &str) -> Option<CommandMetadata> {
        self.categories
            .get(category)
            .and_then(|commands| commands.get(command_name))
            .map(|command| command.metadata())
    }

    /// Renders help for every registered command, grouped by category.
    pub fn help_text(&self) -> String {
        let mut lines = vec![format_header("pathstate script commands")];

        for (category, command_names) in self.list_commands() {
            lines.push(String::new());
            lines.push(format_category(&category));

            for name in command_names {
                let Some(metadata) = self.metadata(&category, &name) else {
                    continue;
                };

                let args: Vec<String> = metadata
                    .args
                    .iter()
                    .map(|arg| {
                        if arg.required {
                            format!("<{}:{}>", arg.name, arg.value_type.hint())
                        } else {
                            format!("[{}:{}]", arg.name, arg.value_type.hint())
                        }
                    })
                    .collect();

                lines.push(format!(
                    "  {} {}  {}",
                    format_command(&name),
                    args.join(" "),
                    format_description(&metadata.description)
                ));

                for example in &metadata.examples {
                    lines.push(format!("      {}", format_description(example)));
                }
            }
        }

        lines.join("\n")
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers all available CLI commands in their respective categories.
    ///
    /// This function serves as the central registration point for all CLI commands,
    /// delegating to individual modules to register their commands.
    pub fn register_all_commands(&mut self) {
        let context = Arc::clone(&self.context);

        state::register_commands(self, context.clone());
        config::register_commands(self, context);
    }
}
