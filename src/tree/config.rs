//! Configuration types for the tree walker

/// Marker that identifies OS-reserved directories such as `$RECYCLE.BIN`.
pub const DEFAULT_EXCLUDE_MARKER: &str = "$";

/// Deepest level the walker will descend to.
pub const DEFAULT_MAX_DEPTH: usize = 1500;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Directories whose full path contains any of these substrings are
    /// skipped along with everything beneath them. Empty disables filtering.
    pub exclude_markers: Vec<String>,
    /// Directories deeper than this are reported and not entered.
    pub max_depth: usize,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            exclude_markers: vec![DEFAULT_EXCLUDE_MARKER.to_string()],
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
