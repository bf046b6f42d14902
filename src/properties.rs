//! Property-file text format
//!
//! Read and write support for the `key=value` property format: `#`/`!`
//! comments, `=`/`:`/whitespace separators, backslash escapes and line
//! continuations on read; escaped, key-sorted `key=value` lines on write.

mod parse;
mod write;

pub use parse::parse;
pub use write::to_string;
