//! autocmt core library - standard doc blocks for C++ function definitions

// Global invariants enforced in this crate:
// - Single-threaded, synchronous, one file per run
// - No state survives a run
// - Identical input yields byte-for-byte identical output
// - Source text outside inserted blocks is never altered

pub mod descriptor;
pub mod language;
pub mod patch;
pub mod render;
pub mod source;
pub mod walker;

#[cfg(test)]
mod test_support;

pub use descriptor::FunctionDescriptor;
pub use language::{CppParser, NodeKind, SourceLocation, SyntaxNode};
pub use patch::{source_with_doc_blocks, InsertionRecord};
pub use render::doc_block_comment;
pub use source::{read_source, write_source};

use anyhow::Result;
use std::path::Path;

/// Render a doc block for every commentable definition in `file`
///
/// Records come out in traversal order; [`source_with_doc_blocks`] sorts
/// them before patching.
pub fn doc_comments<N: SyntaxNode>(root: N, file: &Path) -> Vec<InsertionRecord> {
    walker::commentable_nodes_in_file(root, file)
        .iter()
        .map(|node| {
            let info = FunctionDescriptor::from_node(node);
            let line = node.location().line;
            tracing::debug!(line, function = info.name(), "doc block");
            InsertionRecord::new(line, doc_block_comment(&info))
        })
        .collect()
}

/// Annotate C++ source text that was read from `path`
pub fn annotate_source(source: &str, path: &Path) -> Result<String> {
    let parser = CppParser::new()?;
    let unit = parser.parse(source, path)?;
    if unit.has_syntax_errors() {
        tracing::warn!(
            file = %path.display(),
            "syntax errors in source; annotation may be incomplete or spurious"
        );
    }

    let records = doc_comments(unit.root(), unit.path());
    tracing::info!(file = %path.display(), blocks = records.len(), "annotated");
    Ok(source_with_doc_blocks(source, records))
}

/// Read `path` and return its annotated text
pub fn annotate_file(path: &Path) -> Result<String> {
    let source = read_source(path)?;
    annotate_source(&source, path)
}
