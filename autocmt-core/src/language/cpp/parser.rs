//! C++ parser using tree-sitter

use crate::language::cpp::CppNode;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tree_sitter::{Parser, Tree};

/// C++ parser using tree-sitter
///
/// The grammar is compiled into the binary, so there is no native library to
/// locate at startup; `new` only checks that the grammar's ABI is accepted by
/// the linked tree-sitter runtime.
pub struct CppParser;

impl CppParser {
    /// Create a new C++ parser
    pub fn new() -> Result<Self> {
        // Just validate that we can create a parser
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_cpp::LANGUAGE.into())
            .context("Failed to set C++ language for parser")?;
        Ok(CppParser)
    }

    /// Parse `source`, recording `path` as the file every node belongs to
    ///
    /// tree-sitter is error-tolerant: malformed source still produces a tree
    /// (with error nodes). Only a parser that returns no tree at all is
    /// reported as an error.
    pub fn parse(&self, source: &str, path: &Path) -> Result<CppUnit> {
        // tree_sitter::Parser::parse needs &mut, so build one per call
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_cpp::LANGUAGE.into())
            .context("Failed to set C++ language")?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("Failed to parse C++ file: {}", path.display()))?;

        Ok(CppUnit {
            tree,
            source: source.to_string(),
            path: path.to_path_buf(),
        })
    }
}

/// A parsed C++ translation unit
pub struct CppUnit {
    tree: Tree,
    source: String,
    path: PathBuf,
}

impl CppUnit {
    /// Root node of the translation unit
    pub fn root(&self) -> CppNode<'_> {
        CppNode::new(self.tree.root_node(), &self.source, &self.path)
    }

    /// True if tree-sitter had to recover from syntax errors
    pub fn has_syntax_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
