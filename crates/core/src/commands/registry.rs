use super::{context::CommandSource, node::CommandTree, parser, usage};
use crate::commands::error::{CommandError, CommandResult};
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use tracing::{debug, error, warn};

/// The set of top-level commands a host exposes, looked up by label.
///
/// Labels are matched case-insensitively. Commands are registered explicitly,
/// usually from one startup function per feature.
#[derive(Default)]
pub struct CommandRegistry {
    commands: IndexMap<String, CommandTree>,
    aliases: IndexMap<String, String>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: CommandTree) {
        let label = command.name().to_lowercase();
        if self.commands.insert(label.clone(), command).is_some() {
            warn!("Command /{} was registered twice, keeping the latest", label);
        }
    }

    /// Makes `alias` invoke the command registered as `label`.
    pub fn add_alias(&mut self, alias: impl Into<String>, label: impl Into<String>) {
        self.aliases
            .insert(alias.into().to_lowercase(), label.into().to_lowercase());
    }

    pub fn get(&self, label: &str) -> Option<&CommandTree> {
        let label = label.to_lowercase();
        let label = self.aliases.get(&label).unwrap_or(&label);
        self.commands.get(label)
    }

    pub fn commands(&self) -> impl Iterator<Item = &CommandTree> {
        self.commands.values()
    }

    /// Parses and runs one command line. Leading slashes are not stripped,
    /// the host is expected to have removed them.
    pub fn execute(&self, source: CommandSource<'_>, command_line: &str) -> CommandResult<()> {
        let tokens = parser::tokenize(command_line);
        let Some(label) = tokens.first() else {
            return Ok(());
        };

        let Some(command) = self.get(label) else {
            debug!("{} tried unknown command /{}", source.sender().name(), label);
            return Err(CommandError::UnknownCommand {
                label: label.to_string(),
            });
        };

        command.dispatch(source, &tokens)
    }

    /// Suggestions for the last token of a partially typed command line.
    pub fn complete(&self, source: CommandSource<'_>, command_line: &str) -> Vec<String> {
        let tokens = parser::tokenize_partial(command_line);
        let edit_index = tokens.len() - 1;

        if edit_index == 0 {
            let partial = tokens[0].to_lowercase();
            let labels: IndexSet<&String> = self
                .commands
                .keys()
                .chain(self.aliases.keys())
                .filter(|label| label.starts_with(&partial))
                .collect();
            return labels.into_iter().cloned().collect();
        }

        match self.get(tokens[0]) {
            Some(command) => command.complete(source, &tokens, edit_index),
            None => Vec::new(),
        }
    }

    /// Tells the sender why a command failed.
    pub fn report(&self, source: CommandSource<'_>, err: &CommandError) {
        let sender = source.sender();
        match err {
            CommandError::Internal(err) => {
                error!("Error executing command for {}: {}", sender.name(), err);
                sender.send_message("An internal error occurred while executing this command.");
            }
            CommandError::UnknownCommand { .. } => {
                sender.send_message("Command not found! Run /help for a list of commands.");
            }
            err => sender.send_message(&err.to_string()),
        }
    }

    pub fn help_lines(&self) -> Vec<String> {
        self.commands
            .values()
            .map(usage::generate_help_line)
            .sorted()
            .collect()
    }
}
