use super::argument_set::ArgumentSet;
use crate::commands::error::{CommandResult, RuntimeError};
use crate::player::Player;
use crate::server::{CommandSender, Server};

/// The host and sender a command line is being parsed, completed or executed for.
#[derive(Clone, Copy)]
pub struct CommandSource<'a> {
    server: &'a dyn Server,
    sender: &'a dyn CommandSender,
}

impl<'a> CommandSource<'a> {
    pub fn new(server: &'a dyn Server, sender: &'a dyn CommandSender) -> Self {
        Self { server, sender }
    }

    pub fn server(&self) -> &'a dyn Server {
        self.server
    }

    pub fn sender(&self) -> &'a dyn CommandSender {
        self.sender
    }

    pub fn player(&self) -> Option<Player> {
        self.sender.as_player()
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.sender.has_permission(permission)
    }
}

pub struct ExecutionContext<'a> {
    source: CommandSource<'a>,
    arguments: ArgumentSet,
    command_path: String,
}

impl<'a> ExecutionContext<'a> {
    pub(super) fn new(
        source: CommandSource<'a>,
        arguments: ArgumentSet,
        command_path: String,
    ) -> Self {
        Self {
            source,
            arguments,
            command_path,
        }
    }

    pub fn args(&self) -> &ArgumentSet {
        &self.arguments
    }

    pub fn source(&self) -> CommandSource<'a> {
        self.source
    }

    pub fn server(&self) -> &'a dyn Server {
        self.source.server()
    }

    pub fn sender(&self) -> &'a dyn CommandSender {
        self.source.sender()
    }

    /// The sub-command names that led to this executor, e.g. `plot add`.
    pub fn command_path(&self) -> &str {
        &self.command_path
    }

    pub fn reply(&self, message: &str) -> CommandResult<()> {
        self.sender().send_message(message);
        Ok(())
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.source.has_permission(permission)
    }

    pub fn player(&self) -> CommandResult<Player> {
        self.source
            .player()
            .ok_or_else(|| RuntimeError::PlayerOnly.into())
    }
}
