//! C++ language support
//!
//! This module provides C++ parsing and a [`SyntaxNode`](super::SyntaxNode)
//! adapter over the tree-sitter-cpp grammar.

pub mod node;
pub mod parser;

pub use node::CppNode;
pub use parser::{CppParser, CppUnit};
