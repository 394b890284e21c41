//! Discovery of commentable function definitions
//!
//! Global invariants enforced:
//! - Depth-first, pre-order traversal; children in source order
//! - No deduplication of overloads or repeated nodes

use crate::language::SyntaxNode;
use std::path::Path;

/// True if the node is a function definition that gets a doc block
///
/// Methods, constructors, destructors and free functions qualify, but only
/// when they carry a body; prototypes are skipped.
pub fn is_commentable<N: SyntaxNode>(node: &N) -> bool {
    node.is_definition() && node.kind().is_function()
}

/// Collect every commentable node under `root` (including `root` itself)
pub fn commentable_nodes<N: SyntaxNode>(root: N) -> Vec<N> {
    let mut nodes = Vec::new();
    collect_recursive(root, &mut nodes);
    nodes
}

/// Collect commentable nodes declared in `file`
///
/// Nodes whose location names any other file (for example definitions
/// pulled in from an included header) are dropped. The comparison is exact
/// path equality.
pub fn commentable_nodes_in_file<N: SyntaxNode>(root: N, file: &Path) -> Vec<N> {
    commentable_nodes(root)
        .into_iter()
        .filter(|node| node.location().file == file)
        .collect()
}

fn collect_recursive<N: SyntaxNode>(node: N, nodes: &mut Vec<N>) {
    let children = node.children();
    if is_commentable(&node) {
        nodes.push(node);
    }
    for child in children {
        collect_recursive(child, nodes);
    }
}

#[cfg(test)]
#[path = "walker/tests.rs"]
mod tests;
