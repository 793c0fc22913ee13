use crate::commands::error::CommandResult;
use crate::commands::node::CommandTree;

/// Splits a command line into whitespace-delimited tokens.
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

/// Like [`tokenize`], but a line that is empty or ends in whitespace gets a
/// trailing empty token: the one the user is about to type.
pub fn tokenize_partial(input: &str) -> Vec<&str> {
    let mut tokens = tokenize(input);
    if input.is_empty() || input.ends_with(char::is_whitespace) {
        tokens.push("");
    }
    tokens
}

pub(super) struct Descent<'a> {
    /// The trees entered, starting with the root.
    pub(super) path: Vec<&'a CommandTree>,
    /// Index of the first token that was not a sub-command name.
    pub(super) next: usize,
}

impl<'a> Descent<'a> {
    pub(super) fn tree(&self) -> &'a CommandTree {
        self.path[self.path.len() - 1]
    }
}

/// Follows exact sub-command names starting at `tokens[1]` (`tokens[0]` is the
/// label the root was invoked with), never looking at `tokens[limit..]`.
/// `enter` runs for every tree entered, the root included, before its
/// sub-commands are considered.
pub(super) fn descend<'a>(
    root: &'a CommandTree,
    tokens: &[&str],
    limit: usize,
    mut enter: impl FnMut(&'a CommandTree) -> CommandResult<()>,
) -> CommandResult<Descent<'a>> {
    let limit = limit.min(tokens.len());
    let mut descent = Descent {
        path: vec![root],
        next: 1,
    };
    enter(root)?;

    while descent.next < limit {
        let Some(child) = descent.tree().child(tokens[descent.next]) else {
            break;
        };
        enter(child)?;
        descent.path.push(child);
        descent.next += 1;
    }

    Ok(descent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  tp   Alice\tworld "), vec!["tp", "Alice", "world"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn tokenize_partial_adds_pending_token() {
        assert_eq!(tokenize_partial("tp Al"), vec!["tp", "Al"]);
        assert_eq!(tokenize_partial("tp "), vec!["tp", ""]);
        assert_eq!(tokenize_partial(""), vec![""]);
    }

    #[test]
    fn descend_stops_at_first_non_child() {
        let tree = CommandTree::builder("plot")
            .sub_command(CommandTree::builder("add").sub_command(CommandTree::builder("all")))
            .build()
            .unwrap();

        let mut entered = Vec::new();
        let descent = descend(&tree, &["plot", "add", "all", "add"], 4, |tree| {
            entered.push(tree.name().to_string());
            Ok(())
        })
        .unwrap();
        assert_eq!(descent.next, 3);
        assert_eq!(descent.tree().name(), "all");
        assert_eq!(entered, vec!["plot", "add", "all"]);

        let descent = descend(&tree, &["plot", "add", "all"], 2, |_| Ok(())).unwrap();
        assert_eq!(descent.tree().name(), "add");
        assert_eq!(descent.next, 2);
    }
}
