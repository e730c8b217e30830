//! TreePrinter - walks one root and streams indented lines

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::TreeError;

use super::config::WalkerConfig;
use super::depth::DepthCalculator;
use super::filter::ExclusionFilter;
use super::streaming::{NodeKind, StreamingOutput, VisitedNode};
use super::traversal::{file_kind, read_listing};

/// Outcome of walking one root.
#[derive(Debug, Default)]
pub struct WalkSummary {
    /// Entries printed as file lines.
    pub files: usize,
    /// Directories and entries that were left out, with the reason.
    pub skipped: Vec<TreeError>,
}

/// Prints the tree beneath a fixed starting root.
///
/// Depth is always measured from the root given to [`TreePrinter::new`],
/// even when [`TreePrinter::print`] is pointed at a subdirectory of it.
pub struct TreePrinter {
    root: PathBuf,
    depth: DepthCalculator,
    filter: ExclusionFilter,
    config: WalkerConfig,
}

impl TreePrinter {
    pub fn new(root: &Path, config: WalkerConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            depth: DepthCalculator::new(root),
            filter: ExclusionFilter::new(&config.exclude_markers),
            config,
        }
    }

    /// Print the whole tree under the starting root, then the summary line.
    pub fn show<O: StreamingOutput>(&self, output: &mut O) -> Result<WalkSummary, TreeError> {
        debug!(root = %self.root.display(), "walking");
        let summary = self.print(&self.root, output)?;
        output.finish(summary.files, &self.root)?;
        debug!(
            root = %self.root.display(),
            files = summary.files,
            skipped = summary.skipped.len(),
            "finished"
        );
        Ok(summary)
    }

    /// Walk `dir` depth-first, streaming one line per directory and file.
    ///
    /// A `dir` that is missing or not a directory prints nothing and counts
    /// zero files. Unreadable directories are skipped and recorded in the
    /// summary. Only a failing `output` aborts the walk.
    pub fn print<O: StreamingOutput>(
        &self,
        dir: &Path,
        output: &mut O,
    ) -> Result<WalkSummary, TreeError> {
        let mut summary = WalkSummary::default();

        if !dir.is_dir() {
            debug!(
                "{}",
                TreeError::InvalidRoot {
                    path: dir.to_path_buf()
                }
            );
            return Ok(summary);
        }

        let mut pending = vec![dir.to_path_buf()];
        while let Some(current) = pending.pop() {
            if self.filter.is_excluded(&current) {
                trace!(path = %current.display(), "excluded");
                continue;
            }

            let level = match self.depth.level(&current) {
                Ok(level) => level,
                Err(e) => {
                    debug!("skipping: {}", e);
                    summary.skipped.push(e);
                    continue;
                }
            };
            if level > self.config.max_depth {
                let e = TreeError::DepthLimitExceeded {
                    path: current,
                    limit: self.config.max_depth,
                };
                debug!("skipping: {}", e);
                summary.skipped.push(e);
                continue;
            }

            let listing = match read_listing(&current) {
                Ok(listing) => listing,
                Err(source) => {
                    let e = TreeError::FilesystemAccess {
                        path: current,
                        source,
                    };
                    debug!("skipping: {}", e);
                    summary.skipped.push(e);
                    continue;
                }
            };

            self.emit(&current, level, NodeKind::Directory, output)?;

            for link in &listing.dir_links {
                trace!(path = %link.display(), "directory link not followed");
            }

            for path in &listing.files {
                let depth = match self.depth.depth(path) {
                    Ok(depth) => depth,
                    // Unreachable while `current` resolved under the root
                    Err(e) => {
                        debug!("skipping: {}", e);
                        summary.skipped.push(e);
                        continue;
                    }
                };
                summary.files += 1;
                self.emit(path, depth, file_kind(path), output)?;
            }

            // Reversed so the alphabetically first subdirectory pops next
            pending.extend(listing.dirs.into_iter().rev());
        }

        Ok(summary)
    }

    fn emit<O: StreamingOutput>(
        &self,
        path: &Path,
        depth: usize,
        kind: NodeKind,
        output: &mut O,
    ) -> Result<(), TreeError> {
        trace!(path = %path.display(), depth, ?kind, "visit");
        output.output_node(&VisitedNode { path, depth, kind })?;
        Ok(())
    }
}
