//! Directory exclusion for tree walking

use std::path::Path;

/// Skips directories whose full path contains a reserved marker.
///
/// This is a plain substring test over the whole path as displayed, so a
/// directory beneath an excluded one is excluded too, and a legitimate name
/// that happens to contain a marker is excluded as well.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    markers: Vec<String>,
}

impl ExclusionFilter {
    pub fn new(markers: &[String]) -> Self {
        Self {
            markers: markers
                .iter()
                .filter(|m| !m.is_empty())
                .cloned()
                .collect(),
        }
    }

    /// Check if a directory should be skipped.
    pub fn is_excluded(&self, dir: &Path) -> bool {
        if self.markers.is_empty() {
            return false;
        }
        let path = dir.to_string_lossy();
        self.markers.iter().any(|m| path.contains(m.as_str()))
    }
}
