//! Reading and classifying a single directory's entries.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::streaming::NodeKind;

/// Entries of one directory, split the way the walk consumes them.
#[derive(Debug, Default)]
pub struct Listing {
    /// Subdirectories to descend into, sorted by name.
    pub dirs: Vec<PathBuf>,
    /// Entries printed as file lines, sorted by name.
    pub files: Vec<PathBuf>,
    /// Symbolic links to directories. Never walked, printed or counted.
    pub dir_links: Vec<PathBuf>,
}

/// Read, classify and sort the entries of `dir`.
///
/// Failing to open `dir` is an error. Individual entries that vanish or
/// cannot be stat'ed mid-listing are dropped or treated as plain files.
/// Symbolic links to directories count as directories that are never
/// entered, so they land in `dir_links` rather than `dirs` or `files`.
pub fn read_listing(dir: &Path) -> io::Result<Listing> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|a| a.file_name());

    let mut listing = Listing::default();
    for entry in entries {
        let path = entry.path();
        match entry.file_type() {
            Ok(t) if t.is_dir() => listing.dirs.push(path),
            // `is_dir` follows the link
            Ok(t) if t.is_symlink() && path.is_dir() => listing.dir_links.push(path),
            _ => listing.files.push(path),
        }
    }

    Ok(listing)
}

/// Presentation of an entry from [`Listing::files`], checked again when it
/// is about to be printed.
pub fn file_kind(path: &Path) -> NodeKind {
    if path.is_dir() {
        NodeKind::DirectoryLike
    } else {
        NodeKind::File
    }
}
