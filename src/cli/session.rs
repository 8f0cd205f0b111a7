use std::io::{BufRead, Write};

use tracing::{debug, warn};

use super::{CliError, CliService, CommandResult, formatting::format_error};

/// Outcome of running a script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    /// Commands that were run, excluding blank lines and comments.
    pub executed: usize,
    /// Commands that returned an error.
    pub failed: usize,
}

impl SessionReport {
    /// True when every command succeeded.
    pub fn succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Runs script lines against one [`CliService`].
///
/// Each line is `<category> <command> [args...]`. The last argument of a
/// command takes the rest of the line, so `state set app.config {"a": 1}`
/// passes the whole JSON object as the value. Blank lines and lines
/// starting with `#` are skipped; `help` prints the command list.
pub struct Session<'a> {
    service: &'a CliService,
}

impl<'a> Session<'a> {
    /// Creates a session over a service.
    pub fn new(service: &'a CliService) -> Self {
        Self { service }
    }

    /// Runs every line of `input`.
    ///
    /// Command output and notifications go to `out`; errors go to `err` and
    /// do not stop the session.
    ///
    /// # Errors
    /// Returns `CliError::IoError` if reading the script or writing output fails.
    pub fn run<R, O, E>(&self, input: R, out: &mut O, err: &mut E) -> Result<SessionReport, CliError>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        let mut report = SessionReport::default();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            report.executed += 1;
            debug!(line = line_number, command = trimmed, "Executing script line");

            match self.execute_line(trimmed) {
                Ok(output) => {
                    if !output.trim().is_empty() {
                        writeln!(out, "{output}")?;
                    }
                }
                Err(e) => {
                    report.failed += 1;
                    warn!(line = line_number, error = %e, "Command failed");
                    writeln!(err, "{}", format_error(&format!("line {line_number}: {e}")))?;
                }
            }

            for notification in self.service.drain_notifications() {
                writeln!(out, "{notification}")?;
            }
        }

        Ok(report)
    }

    /// Parses and executes a single line.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` or `CliError::InvalidArguments` for
    /// lines that do not name a registered command, and the command's own
    /// error otherwise.
    pub fn execute_line(&self, line: &str) -> CommandResult {
        let (category, rest) = split_word(line);
        if category == "help" {
            return Ok(self.service.help_text());
        }

        let (command, rest) = split_word(rest);
        if command.is_empty() {
            return Err(CliError::InvalidArguments(format!(
                "Expected a command after '{category}'"
            )));
        }

        let max_args = self
            .service
            .command_metadata(category, command)
            .map_or(0, |metadata| metadata.args.len());

        let args = split_args(rest, max_args);
        self.service.execute_command(category, command, &args)
    }
}

/// Splits off the first whitespace-delimited word.
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();

    match text.find(char::is_whitespace) {
        Some(end) => (&text[..end], text[end..].trim_start()),
        None => (text, ""),
    }
}

/// Splits arguments on whitespace; the last expected argument keeps the rest
/// of the line. With `max_args == 0` every word is split so that argument
/// validation can report the surplus.
fn split_args(rest: &str, max_args: usize) -> Vec<String> {
    let mut args = Vec::new();
    let mut remaining = rest.trim();

    while !remaining.is_empty() {
        if max_args > 0 && args.len() + 1 == max_args {
            args.push(remaining.to_string());
            break;
        }

        let (word, tail) = split_word(remaining);
        args.push(word.to_string());
        remaining = tail;
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_word_handles_extra_whitespace() {
        assert_eq!(split_word("  state   get a.b"), ("state", "get a.b"));
        assert_eq!(split_word("help"), ("help", ""));
        assert_eq!(split_word(""), ("", ""));
    }

    #[test]
    fn last_argument_keeps_rest_of_line() {
        let args = split_args(r#"app.config {"theme": "dark", "language": "fr"}"#, 2);

        assert_eq!(
            args,
            vec![
                "app.config".to_string(),
                r#"{"theme": "dark", "language": "fr"}"#.to_string()
            ]
        );
    }

    #[test]
    fn surplus_words_are_kept_for_validation() {
        assert_eq!(split_args("a b c", 0), vec!["a", "b", "c"]);
        assert_eq!(split_args("", 2), Vec::<String>::new());
    }
}
