use crate::commands::{
    argument_set::ArgumentSet,
    context::{CommandSource, ExecutionContext},
    error::{CommandError, CommandResult},
    node::CommandTree,
    parser, usage,
};
use itertools::Itertools;
use tracing::debug;

impl CommandTree {
    /// Runs the command line `tokens` against this tree. `tokens[0]` is the
    /// label the command was invoked with.
    ///
    /// The executor only runs once every argument has parsed; any failure
    /// before that point leaves no side effects behind.
    pub fn dispatch(&self, source: CommandSource<'_>, tokens: &[&str]) -> CommandResult<()> {
        let descent = parser::descend(self, tokens, tokens.len(), |tree| {
            check_permission(source, tree)
        })?;
        let path = descent.path.as_slice();
        let tree = descent.tree();
        let rest = tokens.get(descent.next..).unwrap_or_default();

        let Some(executor) = &tree.executor else {
            return Err(usage_mismatch(path));
        };

        if rest.len() < tree.required_arguments() || rest.len() > tree.arguments.len() {
            debug!(
                "Wrong argument count for /{}: got {}, expected {}..={}",
                tree.name,
                rest.len(),
                tree.required_arguments(),
                tree.arguments.len()
            );
            return Err(usage_mismatch(path));
        }

        let mut values = Vec::with_capacity(tree.arguments.len());
        for (node, token) in tree.arguments.iter().zip(rest) {
            values.push(Some(node.parse(source, token)?));
        }
        values.resize(tree.arguments.len(), None);

        let command_path = path.iter().map(|tree| tree.name()).join(" ");
        debug!(
            "{} issued /{} {}",
            source.sender().name(),
            command_path,
            rest.join(" ")
        );
        let mut ctx = ExecutionContext::new(source, ArgumentSet::new(values), command_path);
        executor(&mut ctx)
    }
}

fn check_permission(source: CommandSource<'_>, tree: &CommandTree) -> CommandResult<()> {
    let Some(permission) = &tree.permission else {
        return Ok(());
    };
    if source.has_permission(permission) {
        return Ok(());
    }
    debug!(
        "{} lacks permission {} for /{}",
        source.sender().name(),
        permission,
        tree.name
    );
    Err(CommandError::PermissionDenied {
        permission: permission.clone(),
        message: tree.permission_message().to_string(),
    })
}

fn usage_mismatch(path: &[&CommandTree]) -> CommandError {
    CommandError::UsageMismatch {
        usage: usage::generate_usage(path),
    }
}
