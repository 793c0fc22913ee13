use crate::commands::argument::ArgumentNode;
use crate::commands::context::ExecutionContext;
use crate::commands::error::{BuildError, CommandResult, DEFAULT_PERMISSION_MESSAGE};
use crate::player::Player;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

pub type Executor = Arc<dyn Fn(&mut ExecutionContext<'_>) -> CommandResult<()> + Send + Sync>;

/// One level of a command hierarchy: its argument slots, named sub-commands
/// and the executor run when dispatch stops at this level.
///
/// Trees are assembled with [`CommandTree::builder`] and are immutable once
/// built.
pub struct CommandTree {
    pub(super) name: String,
    pub(super) description: String,
    pub(super) permission: Option<String>,
    pub(super) permission_message: Option<String>,
    pub(super) arguments: Vec<ArgumentNode>,
    pub(super) children: IndexMap<String, CommandTree>,
    pub(super) executor: Option<Executor>,
}

impl CommandTree {
    pub fn builder(name: impl Into<String>) -> CommandTreeBuilder {
        CommandTreeBuilder::new(name.into())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    pub fn permission_message(&self) -> &str {
        self.permission_message
            .as_deref()
            .unwrap_or(DEFAULT_PERMISSION_MESSAGE)
    }

    pub fn arguments(&self) -> &[ArgumentNode] {
        &self.arguments
    }

    pub fn child(&self, name: &str) -> Option<&CommandTree> {
        self.children.get(name)
    }

    pub fn children(&self) -> impl Iterator<Item = &CommandTree> {
        self.children.values()
    }

    pub fn has_executor(&self) -> bool {
        self.executor.is_some()
    }

    pub fn required_arguments(&self) -> usize {
        self.arguments.iter().filter(|arg| !arg.optional).count()
    }
}

impl fmt::Debug for CommandTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandTree")
            .field("name", &self.name)
            .field("permission", &self.permission)
            .field("arguments", &self.arguments)
            .field("children", &self.children.values().collect::<Vec<_>>())
            .field("has_executor", &self.has_executor())
            .finish()
    }
}

pub struct CommandTreeBuilder {
    tree: CommandTree,
    error: Option<BuildError>,
}

impl CommandTreeBuilder {
    fn new(name: String) -> Self {
        let error = if name.is_empty() || name.contains(char::is_whitespace) {
            Some(BuildError::InvalidName { name: name.clone() })
        } else {
            None
        };
        Self {
            tree: CommandTree {
                name,
                description: String::new(),
                permission: None,
                permission_message: None,
                arguments: Vec::new(),
                children: IndexMap::new(),
                executor: None,
            },
            error,
        }
    }

    fn fail(&mut self, error: BuildError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.tree.description = description.into();
        self
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.tree.permission = Some(permission.into());
        self
    }

    pub fn permission_message(mut self, message: impl Into<String>) -> Self {
        self.tree.permission_message = Some(message.into());
        self
    }

    /// Appends a required argument slot. The node is copied, so the same
    /// declared node can be attached to any number of commands.
    pub fn argument(self, node: &ArgumentNode) -> Self {
        self.push_argument(node, false)
    }

    /// Appends an optional argument slot. Only trailing slots may be optional.
    pub fn optional_argument(self, node: &ArgumentNode) -> Self {
        self.push_argument(node, true)
    }

    fn push_argument(mut self, node: &ArgumentNode, optional: bool) -> Self {
        let follows_optional = self.tree.arguments.last().is_some_and(|last| last.optional);
        if follows_optional && !optional {
            let error = BuildError::RequiredAfterOptional {
                command: self.tree.name.clone(),
                usage: node.usage().to_string(),
            };
            self.fail(error);
            return self;
        }
        let index = self.tree.arguments.len();
        self.tree.arguments.push(node.attach(index, optional));
        self
    }

    pub fn executes<F>(mut self, executor: F) -> Self
    where
        F: Fn(&mut ExecutionContext<'_>) -> CommandResult<()> + Send + Sync + 'static,
    {
        self.tree.executor = Some(Arc::new(executor));
        self
    }

    /// Registers an executor that only runs for player senders. Anyone else
    /// gets [`RuntimeError::PlayerOnly`](super::RuntimeError::PlayerOnly).
    pub fn executes_as_player<F>(self, executor: F) -> Self
    where
        F: Fn(&mut ExecutionContext<'_>, Player) -> CommandResult<()> + Send + Sync + 'static,
    {
        self.executes(move |ctx| {
            let player = ctx.player()?;
            executor(ctx, player)
        })
    }

    pub fn sub_command(mut self, builder: CommandTreeBuilder) -> Self {
        match builder.build() {
            Ok(child) => self.sub(child),
            Err(err) => {
                self.fail(err);
                self
            }
        }
    }

    pub fn sub(mut self, child: CommandTree) -> Self {
        if self.tree.children.contains_key(&child.name) {
            let error = BuildError::DuplicateSubCommand {
                command: self.tree.name.clone(),
                name: child.name,
            };
            self.fail(error);
            return self;
        }
        self.tree.children.insert(child.name.clone(), child);
        self
    }

    pub fn build(self) -> Result<CommandTree, BuildError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.tree),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::argument::{BOOLEANS, NUMBERS, PLAYERS, WORLDS};

    #[test]
    fn indices_increase_per_level() {
        let tree = CommandTree::builder("tp")
            .argument(&PLAYERS)
            .optional_argument(&WORLDS)
            .sub_command(CommandTree::builder("here").argument(&PLAYERS))
            .build()
            .unwrap();

        let indices: Vec<_> = tree.arguments().iter().map(ArgumentNode::index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(tree.required_arguments(), 1);
        assert_eq!(tree.child("here").unwrap().arguments()[0].index(), 0);
    }

    #[test]
    fn shared_node_state_does_not_leak() {
        let first = CommandTree::builder("a")
            .argument(&NUMBERS)
            .optional_argument(&BOOLEANS)
            .build()
            .unwrap();
        let second = CommandTree::builder("b").argument(&BOOLEANS).build().unwrap();

        assert!(first.arguments()[1].is_optional());
        assert_eq!(first.arguments()[1].index(), 1);
        assert!(!second.arguments()[0].is_optional());
        assert_eq!(second.arguments()[0].index(), 0);
        assert!(!BOOLEANS.is_optional());
    }

    #[test]
    fn required_after_optional_is_rejected() {
        let err = CommandTree::builder("tp")
            .optional_argument(&PLAYERS)
            .argument(&WORLDS)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::RequiredAfterOptional {
                command: "tp".to_string(),
                usage: "world".to_string(),
            }
        );
    }

    #[test]
    fn child_errors_propagate() {
        let err = CommandTree::builder("plot")
            .sub_command(
                CommandTree::builder("add")
                    .optional_argument(&PLAYERS)
                    .argument(&PLAYERS),
            )
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::RequiredAfterOptional { command, .. } if command == "add"));
    }

    #[test]
    fn duplicate_and_invalid_names() {
        let err = CommandTree::builder("plot")
            .sub_command(CommandTree::builder("add"))
            .sub_command(CommandTree::builder("add"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateSubCommand {
                command: "plot".to_string(),
                name: "add".to_string(),
            }
        );

        assert!(CommandTree::builder("two words").build().is_err());
        assert!(CommandTree::builder("").build().is_err());
    }

    #[test]
    fn permission_message_defaults() {
        let tree = CommandTree::builder("stop").permission("server.stop").build().unwrap();
        assert_eq!(tree.permission(), Some("server.stop"));
        assert_eq!(tree.permission_message(), DEFAULT_PERMISSION_MESSAGE);

        let tree = CommandTree::builder("stop")
            .permission("server.stop")
            .permission_message("No.")
            .build()
            .unwrap();
        assert_eq!(tree.permission_message(), "No.");
    }
}
