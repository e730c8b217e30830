//! Error types for tree walking

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while printing a tree.
///
/// Only [`TreeError::Output`] aborts a walk. The other variants are collected
/// into [`crate::WalkSummary::skipped`] and the walk carries on.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Depth was requested for a path that does not live under the root.
    #[error("'{}' is not under root '{}'", path.display(), root.display())]
    PathNotUnderRoot { path: PathBuf, root: PathBuf },

    /// The starting root does not exist or is not a directory.
    #[error("cannot access '{}': No such directory", path.display())]
    InvalidRoot { path: PathBuf },

    /// A directory could not be read mid-walk.
    #[error("cannot read '{}': {source}", path.display())]
    FilesystemAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory sits deeper than the configured ceiling.
    #[error("not descending into '{}': deeper than {limit} levels", path.display())]
    DepthLimitExceeded { path: PathBuf, limit: usize },

    /// No root was named and the working directory cannot be determined.
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// Writing tree lines failed.
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}
