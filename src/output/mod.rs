//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `utils` - Line layout shared by formatters (indentation, markers, summary)
//! - `streaming` - Streaming formatter for console output

mod streaming;
mod utils;

// Re-export public types and functions
pub use streaming::StreamingFormatter;
pub use utils::{FILE_MARKER, INDENT, elapsed_line, indent, node_line, summary_line};
