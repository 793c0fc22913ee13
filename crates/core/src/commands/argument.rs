use super::argument_parser::{self, *};
use super::context::CommandSource;
use crate::commands::error::ParseFailure;
use crate::commands::value::Value;
use once_cell::sync::Lazy;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

type SuggestFn = Arc<dyn Fn(CommandSource<'_>) -> Vec<String> + Send + Sync>;
type ParseFn = Arc<dyn Fn(CommandSource<'_>, &str) -> ArgumentParseResult + Send + Sync>;

pub static PLAYERS: Lazy<ArgumentNode> = Lazy::new(ArgumentNode::players);
pub static WORLDS: Lazy<ArgumentNode> = Lazy::new(ArgumentNode::worlds);
pub static BOOLEANS: Lazy<ArgumentNode> = Lazy::new(ArgumentNode::booleans);
pub static TIMES: Lazy<ArgumentNode> = Lazy::new(ArgumentNode::times);
pub static NUMBERS: Lazy<ArgumentNode> = Lazy::new(ArgumentNode::numbers);
pub static X: Lazy<ArgumentNode> = Lazy::new(|| ArgumentNode::coordinate(Axis::X));
pub static Y: Lazy<ArgumentNode> = Lazy::new(|| ArgumentNode::coordinate(Axis::Y));
pub static Z: Lazy<ArgumentNode> = Lazy::new(|| ArgumentNode::coordinate(Axis::Z));

/// Describes one positional slot of a command: how to suggest values for it
/// and how to parse a token into a [`Value`].
///
/// Nodes are declared once and attached to any number of commands. Attaching
/// copies the node, so the slot index and optional flag belong to the copy
/// inside one command and never to the declared node.
#[derive(Clone)]
pub struct ArgumentNode {
    usage: String,
    suggest: SuggestFn,
    parse: ParseFn,
    pub(super) optional: bool,
    pub(super) index: usize,
}

impl ArgumentNode {
    pub fn new(
        usage: impl Into<String>,
        suggest: impl Fn(CommandSource<'_>) -> Vec<String> + Send + Sync + 'static,
        parse: impl Fn(CommandSource<'_>, &str) -> ArgumentParseResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            usage: usage.into(),
            suggest: Arc::new(suggest),
            parse: Arc::new(parse),
            optional: false,
            index: 0,
        }
    }

    /// A node producing a host-defined type, read back with
    /// [`ArgumentSet::custom`](super::ArgumentSet::custom).
    pub fn custom<T: Any + Send + Sync>(
        usage: impl Into<String>,
        suggest: impl Fn(CommandSource<'_>) -> Vec<String> + Send + Sync + 'static,
        parse: impl Fn(CommandSource<'_>, &str) -> Result<T, ParseFailure> + Send + Sync + 'static,
    ) -> Self {
        Self::new(usage, suggest, move |source, token| {
            let value = parse(source, token)?;
            Ok(Value::Custom(Arc::new(value)))
        })
    }

    pub fn players() -> Self {
        Self::new("player", suggest_players, parse_players)
    }

    pub fn worlds() -> Self {
        Self::new("world", suggest_worlds, parse_world)
    }

    pub fn booleans() -> Self {
        Self::new("boolean", suggest_booleans, parse_boolean)
    }

    pub fn times() -> Self {
        Self::new("time", suggest_times, parse_time)
    }

    pub fn numbers() -> Self {
        Self::new("number", suggest_numbers, parse_number)
    }

    pub fn coordinate(axis: Axis) -> Self {
        Self::new(
            axis.usage(),
            move |source| suggest_coordinate(source, axis),
            parse_coordinate,
        )
    }

    pub fn string(usage: impl Into<String>, suggestions: &[&str]) -> Self {
        let suggestions: Vec<String> = suggestions.iter().map(|s| s.to_string()).collect();
        Self::new(usage, move |_| suggestions.clone(), parse_string)
    }

    pub fn integer(usage: impl Into<String>, min: i32, max: i32) -> Self {
        Self::new(
            usage,
            move |_| vec![min.to_string(), max.to_string()],
            move |_, token| argument_parser::parse_integer(token, min, max),
        )
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Suggestions for a partially typed token. An empty `partial` returns
    /// every candidate; otherwise candidates are filtered by case-insensitive
    /// prefix.
    pub fn complete(&self, source: CommandSource<'_>, partial: &str) -> Vec<String> {
        filter_prefix((self.suggest)(source), partial)
    }

    pub fn parse(&self, source: CommandSource<'_>, token: &str) -> ArgumentParseResult {
        (self.parse)(source, token)
    }

    pub(super) fn attach(&self, index: usize, optional: bool) -> Self {
        let mut node = self.clone();
        node.index = index;
        node.optional = optional;
        node
    }

    pub(super) fn display_usage(&self) -> String {
        if self.optional {
            format!("[{}]", self.usage)
        } else {
            format!("<{}>", self.usage)
        }
    }
}

impl fmt::Debug for ArgumentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentNode")
            .field("usage", &self.usage)
            .field("optional", &self.optional)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

pub fn filter_prefix(candidates: impl IntoIterator<Item = String>, partial: &str) -> Vec<String> {
    let partial = partial.to_uppercase();
    candidates
        .into_iter()
        .filter(|candidate| candidate.to_uppercase().starts_with(&partial))
        .collect()
}
