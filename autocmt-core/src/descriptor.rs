//! Function descriptors: the metadata a doc block is rendered from

use crate::language::SyntaxNode;

/// Display name and argument names of one function definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    name: String,
    args: Vec<String>,
}

impl FunctionDescriptor {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        FunctionDescriptor {
            name: name.into(),
            args,
        }
    }

    /// Build the descriptor for a commentable node
    ///
    /// The name is prefixed with `<scope>::` when the node has a non-empty
    /// enclosing scope, and suffixed with ` const` when the function type is
    /// const-qualified. Arguments keep declaration order; unnamed parameters
    /// appear as empty strings.
    pub fn from_node<N: SyntaxNode>(node: &N) -> Self {
        let mut name = match node.semantic_parent_name() {
            Some(scope) if !scope.is_empty() => format!("{}::{}", scope, node.spelling()),
            _ => node.spelling(),
        };
        if node.is_const_qualified() {
            name.push_str(" const");
        }
        FunctionDescriptor::new(name, node.arguments())
    }

    /// Qualified display name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}
