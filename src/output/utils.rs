//! Shared utility functions for output formatting

use std::path::Path;
use std::time::Duration;

use crate::tree::{NodeKind, VisitedNode};

/// One level of indentation.
pub const INDENT: &str = "  ";

/// Prefix that sets file lines apart from directory lines.
pub const FILE_MARKER: &str = "|____";

/// Indentation for an entry at `depth`.
pub fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Full text of a tree line, without the trailing newline.
pub fn node_line(node: &VisitedNode<'_>) -> String {
    let marker = match node.kind {
        NodeKind::File => FILE_MARKER,
        NodeKind::Directory | NodeKind::DirectoryLike => "",
    };
    format!("{}{}{}", indent(node.depth), marker, node.path.display())
}

/// Per-root closing line.
pub fn summary_line(file_count: usize, root: &Path) -> String {
    format!(
        "There were a total of {} files in {}",
        file_count,
        root.display()
    )
}

/// Closing line printed once after every root has been walked.
pub fn elapsed_line(elapsed: Duration) -> String {
    format!("--- {} seconds ---", elapsed.as_secs_f64())
}
