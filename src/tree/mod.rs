//! Directory tree walking logic
//!
//! `TreePrinter` walks one starting root with an explicit work-list and hands
//! every visited directory and file to a `StreamingOutput` sink, indented by
//! the depth `DepthCalculator` measures from that root.

mod config;
mod depth;
mod filter;
mod streaming;
mod traversal;
mod walker;

// Re-export public types
pub use config::{DEFAULT_EXCLUDE_MARKER, DEFAULT_MAX_DEPTH, WalkerConfig};
pub use depth::{DepthCalculator, normalize, parent_of};
pub use filter::ExclusionFilter;
pub use streaming::{CollectingOutput, NodeKind, StreamingOutput, VisitedNode};
pub use traversal::{Listing, file_kind, read_listing};
pub use walker::{TreePrinter, WalkSummary};
