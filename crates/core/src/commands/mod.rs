mod argument;
mod argument_parser;
mod argument_set;
mod autocomplete;
mod context;
mod error;
mod executor;
mod node;
mod parser;
mod registry;
mod selector;
mod usage;
mod value;

pub use argument::{ArgumentNode, BOOLEANS, NUMBERS, PLAYERS, TIMES, WORLDS, X, Y, Z, filter_prefix};
pub use argument_parser::{ArgumentParseResult, Axis};
pub use argument_set::ArgumentSet;
pub use context::{CommandSource, ExecutionContext};
pub use error::{
    BuildError, CommandError, CommandResult, DEFAULT_PERMISSION_MESSAGE, InternalError,
    ParseFailure, RuntimeError, SelectorError,
};
pub use node::{CommandTree, CommandTreeBuilder, Executor};
pub use parser::{tokenize, tokenize_partial};
pub use registry::CommandRegistry;
pub use selector::{Selector, resolve_players};
pub use usage::{generate_help_line, generate_usage};
pub use value::Value;
