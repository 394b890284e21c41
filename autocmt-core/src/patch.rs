//! Re-insertion of doc blocks into the original source text
//!
//! Global invariants enforced:
//! - Original bytes (including `\r\n` terminators and a missing final
//!   newline) are preserved exactly
//! - Records are applied in ascending original-line order; records on the
//!   same line keep their relative order

/// A rendered doc block and the 1-indexed line it goes above
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionRecord {
    line: usize,
    comment: String,
}

impl InsertionRecord {
    pub fn new(line: usize, comment: impl Into<String>) -> Self {
        InsertionRecord {
            line,
            comment: comment.into(),
        }
    }

    /// Original line number (1-indexed)
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

/// Split `source` into lines, each keeping its own terminator
pub fn split_lines(source: &str) -> Vec<&str> {
    source.split_inclusive('\n').collect()
}

/// Insert every record's comment immediately before its original line
///
/// Each insertion shifts all later original lines down by one buffer slot,
/// so the slot for a record is `(line - 1) + offset`, where `offset` counts
/// the records already applied. Records are sorted by line first, so the
/// offset arithmetic holds whatever order they arrive in. A line past the
/// end of the file appends at the end.
pub fn source_with_doc_blocks(source: &str, mut records: Vec<InsertionRecord>) -> String {
    records.sort_by_key(|record| record.line);

    let mut lines = split_lines(source);
    for (offset, record) in records.iter().enumerate() {
        let slot = (record.line.saturating_sub(1) + offset).min(lines.len());
        lines.insert(slot, record.comment.as_str());
    }

    lines.concat()
}
