//! Filetree - print an indented tree of directories and files with a file count

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::TreeError;
pub use output::StreamingFormatter;
pub use tree::{
    DepthCalculator, ExclusionFilter, NodeKind, StreamingOutput, TreePrinter, VisitedNode,
    WalkSummary, WalkerConfig,
};
