//! Node types handed to output sinks while a walk is in progress

use std::io;
use std::path::Path;

/// How a visited entry is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A directory that is walked; printed bare.
    Directory,
    /// Anything listed as a file; printed with the file marker.
    File,
    /// Listed as a file but a directory by the time it is printed (it was
    /// swapped mid-walk). Counted like a file, printed bare, never walked.
    DirectoryLike,
}

impl NodeKind {
    /// Whether this entry contributes to the file count.
    pub fn is_counted(self) -> bool {
        !matches!(self, NodeKind::Directory)
    }
}

/// One line of tree output. Lives only as long as the line is being written.
#[derive(Debug, Clone, Copy)]
pub struct VisitedNode<'a> {
    pub path: &'a Path,
    pub depth: usize,
    pub kind: NodeKind,
}

/// Callback for streaming output - receives nodes in traversal order.
pub trait StreamingOutput {
    fn output_node(&mut self, node: &VisitedNode<'_>) -> io::Result<()>;

    fn finish(&mut self, file_count: usize, root: &Path) -> io::Result<()>;
}

/// Collects nodes in memory. Handy for callers that post-process a walk.
#[derive(Debug, Default)]
pub struct CollectingOutput {
    pub nodes: Vec<(std::path::PathBuf, usize, NodeKind)>,
    pub file_count: Option<usize>,
}

impl StreamingOutput for CollectingOutput {
    fn output_node(&mut self, node: &VisitedNode<'_>) -> io::Result<()> {
        self.nodes.push((node.path.to_path_buf(), node.depth, node.kind));
        Ok(())
    }

    fn finish(&mut self, file_count: usize, _root: &Path) -> io::Result<()> {
        self.file_count = Some(file_count);
        Ok(())
    }
}
