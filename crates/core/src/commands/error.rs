use thiserror::Error;

pub const DEFAULT_PERMISSION_MESSAGE: &str =
    "I'm sorry, but you do not have permission to perform this command.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("@s can only be used by players")]
    SenderNotPlayer,
    #[error("There are no players online")]
    NoPlayersOnline,
}

/// Why a single token could not be turned into an argument value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("Player {name} not found")]
    PlayerNotFound { name: String },
    #[error("World {name} not found")]
    WorldNotFound { name: String },
    #[error("Invalid time: {token}")]
    InvalidDuration { token: String },
    #[error("Invalid number: {token}")]
    InvalidNumber { token: String },
    #[error("Invalid coordinate: {token}")]
    InvalidCoordinate { token: String },
    #[error("Invalid integer: {token}")]
    InvalidInteger { token: String },
    #[error("{value} is out of range ({min}..{max})")]
    OutOfRange { value: i32, min: i32, max: i32 },
    #[error(transparent)]
    Selector(#[from] SelectorError),
    #[error("{0}")]
    Message(String),
}

impl ParseFailure {
    pub fn message(message: impl Into<String>) -> Self {
        ParseFailure::Message(message.into())
    }
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("This command can only be executed by players")]
    PlayerOnly,
    #[error("{0}")]
    Message(String),
}

#[derive(Debug, Error)]
pub enum InternalError {
    #[error(
        "Internal error: Argument {index} not found in ArgumentSet (command registration bug)"
    )]
    MissingArgument { index: usize },
    #[error("Internal error: Argument {index} has wrong type, expected {expected} (command registration bug)")]
    WrongArgumentType { index: usize, expected: String },
    #[error("Internal error (bug): {message}")]
    Message { message: String },
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{message}")]
    PermissionDenied { permission: String, message: String },
    #[error("Usage: /{usage}")]
    UsageMismatch { usage: String },
    #[error("Unknown command: {label}")]
    UnknownCommand { label: String },
    #[error(transparent)]
    Parse(#[from] ParseFailure),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl CommandError {
    pub fn runtime(message: impl Into<String>) -> Self {
        CommandError::Runtime(RuntimeError::Message(message.into()))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CommandError::Internal(InternalError::Message {
            message: message.into(),
        })
    }
}

impl From<SelectorError> for CommandError {
    fn from(err: SelectorError) -> Self {
        CommandError::Parse(err.into())
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Misuse of [`CommandTreeBuilder`](super::CommandTreeBuilder), reported by `build()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Command '{command}': required argument <{usage}> can not follow an optional argument")]
    RequiredAfterOptional { command: String, usage: String },
    #[error("Command '{command}' already has a sub-command named '{name}'")]
    DuplicateSubCommand { command: String, name: String },
    #[error("Invalid command name '{name}'")]
    InvalidName { name: String },
}
