//! Parser abstraction layer
//!
//! The rest of the pipeline only talks to [`SyntaxNode`], a narrow view of a
//! parsed syntax tree. The C++ adapter in [`cpp`] implements it over
//! tree-sitter; tests implement it over in-memory trees.

pub mod cpp;
pub mod tree_sitter_utils;

use std::path::PathBuf;

pub use cpp::{CppNode, CppParser, CppUnit};

/// Syntactic category of a node, as far as annotation cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Member function (in-class or out-of-line `Class::name`)
    Method,
    /// Constructor
    Constructor,
    /// Destructor (`~Name`)
    Destructor,
    /// Function at namespace or file scope
    FreeFunction,
    /// Anything else
    Other,
}

impl NodeKind {
    /// True for the function-like categories that receive a doc block
    pub fn is_function(&self) -> bool {
        matches!(
            self,
            NodeKind::Method | NodeKind::Constructor | NodeKind::Destructor | NodeKind::FreeFunction
        )
    }
}

/// Where a node was declared
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: PathBuf,
    /// Line number (1-indexed)
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        SourceLocation {
            file: file.into(),
            line,
        }
    }
}

/// Read-only view of a node in a parsed translation unit
///
/// Only the queries needed to build a documentation block are exposed, so
/// the walker and renderer stay independent of the concrete parser.
pub trait SyntaxNode: Sized {
    /// Category of this node
    fn kind(&self) -> NodeKind;

    /// True if the node carries a body (not just a prototype)
    fn is_definition(&self) -> bool;

    /// Name of the enclosing named scope (class, struct, namespace), if any
    fn semantic_parent_name(&self) -> Option<String>;

    /// The node's own unqualified name
    fn spelling(&self) -> String;

    /// True if the function type carries a trailing `const`
    fn is_const_qualified(&self) -> bool;

    /// Formal parameter names in declaration order (empty string if unnamed)
    fn arguments(&self) -> Vec<String>;

    /// File and line of the node's name
    fn location(&self) -> SourceLocation;

    /// Direct children, in source order
    fn children(&self) -> Vec<Self>;
}
