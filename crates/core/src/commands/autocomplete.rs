use crate::commands::{context::CommandSource, node::CommandTree, parser};
use indexmap::IndexSet;

impl CommandTree {
    /// Suggestions for `tokens[edit_index]`, the token being typed.
    ///
    /// Tokens before `edit_index` are matched the way dispatch matches them:
    /// sub-command names exactly, then one argument slot per token. Only the
    /// token being typed is matched by prefix. Permissions are not checked
    /// here, dispatch enforces them.
    pub fn complete(
        &self,
        source: CommandSource<'_>,
        tokens: &[&str],
        edit_index: usize,
    ) -> Vec<String> {
        let partial = tokens.get(edit_index).copied().unwrap_or("");

        if edit_index == 0 {
            return if starts_with_ignore_case(&self.name, partial) {
                vec![self.name.clone()]
            } else {
                Vec::new()
            };
        }

        let Ok(descent) = parser::descend(self, tokens, edit_index, |_| Ok(())) else {
            return Vec::new();
        };
        let tree = descent.tree();
        let consumed = edit_index.saturating_sub(descent.next);

        let mut candidates = IndexSet::new();
        if consumed == 0 {
            candidates.extend(
                tree.children
                    .keys()
                    .filter(|name| starts_with_ignore_case(name, partial))
                    .cloned(),
            );
        }
        if let Some(node) = tree.arguments.iter().find(|node| node.index == consumed) {
            candidates.extend(node.complete(source, partial));
        }

        candidates.into_iter().collect()
    }
}

fn starts_with_ignore_case(candidate: &str, partial: &str) -> bool {
    candidate.to_uppercase().starts_with(&partial.to_uppercase())
}
