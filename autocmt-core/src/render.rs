//! Doc block rendering
//!
//! The block layout is fixed by the coding standard:
//!
//! ```text
//! /****************************************************************
//!
//!     FUNCTION: Stack::push
//!
//!     ARGUMENTS:
//!         item -
//!
//!     RETURNS:
//!
//!     NOTES:
//! ****************************************************************/
//! ```
//!
//! Indentation is literal tabs and the header lines keep a trailing space.

use crate::descriptor::FunctionDescriptor;
use std::fmt::Write;

const BANNER_OPEN: &str = "/****************************************************************";
const BANNER_CLOSE: &str = "****************************************************************/";

/// Render the doc block for one function; every line ends in `\n`
pub fn doc_block_comment(info: &FunctionDescriptor) -> String {
    let mut block = String::new();
    block.push_str(BANNER_OPEN);
    block.push_str("\n\n");
    // Writing to a String cannot fail
    let _ = write!(block, "\tFUNCTION: {}\n\n", info.name());
    block.push_str("\tARGUMENTS: \n");
    for arg in info.args() {
        let _ = writeln!(block, "\t\t{} - ", arg);
    }
    block.push('\n');
    block.push_str("\tRETURNS: \n\n");
    block.push_str("\tNOTES: \n");
    block.push_str(BANNER_CLOSE);
    block.push('\n');
    block
}
