use super::node::CommandTree;
use itertools::Itertools;

/// Renders the usage of the last tree in `path`, prefixed by the names of every
/// tree leading to it: `tp <player> [world]`.
///
/// A level without argument slots lists its sub-commands instead, as
/// `(add | remove)`, or `[add | remove]` when the level can also run on its own.
pub fn generate_usage(path: &[&CommandTree]) -> String {
    let mut parts = path.iter().map(|tree| tree.name().to_string()).collect_vec();

    if let Some(tree) = path.last() {
        let suffix = build_usage_suffix(tree);
        if !suffix.is_empty() {
            parts.push(suffix);
        }
    }

    parts.join(" ")
}

fn build_usage_suffix(tree: &CommandTree) -> String {
    if !tree.arguments.is_empty() {
        return tree.arguments.iter().map(|arg| arg.display_usage()).join(" ");
    }

    if tree.children.is_empty() {
        return String::new();
    }

    let alternatives = tree.children.keys().join(" | ");
    if tree.has_executor() {
        format!("[{}]", alternatives)
    } else {
        format!("({})", alternatives)
    }
}

/// The `name - description` line shown by help listings.
pub fn generate_help_line(tree: &CommandTree) -> String {
    if tree.description().is_empty() {
        format!("/{}", generate_usage(&[tree]))
    } else {
        format!("/{} - {}", generate_usage(&[tree]), tree.description())
    }
}
