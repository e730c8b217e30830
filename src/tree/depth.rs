//! Depth calculation for indentation
//!
//! Depth is counted in path segments between a fixed root and a target, after
//! both have been normalized lexically. Nothing here touches the filesystem,
//! so the calculator works for paths that do not exist.

use std::path::{Component, Path, PathBuf};

use crate::error::TreeError;

/// Make `path` absolute and resolve `.` and `..` without following symlinks.
///
/// Case is preserved and trailing separators are irrelevant, since only
/// components are compared afterwards.
pub fn normalize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` refuses to remove the root or prefix, so `/..` stays `/`
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Normalized absolute parent of `path`, the equivalent of `path/..`.
pub fn parent_of(path: &Path) -> PathBuf {
    normalize(&path.join(".."))
}

/// Computes indentation depth relative to one starting root.
#[derive(Debug, Clone)]
pub struct DepthCalculator {
    root: PathBuf,
}

impl DepthCalculator {
    pub fn new(root: &Path) -> Self {
        Self {
            root: normalize(root),
        }
    }

    /// Number of levels between the root and `path`'s parent directory.
    ///
    /// Ancestors of the root (and the root itself) are at depth 0. A path
    /// outside the root yields [`TreeError::PathNotUnderRoot`].
    pub fn depth(&self, path: &Path) -> Result<usize, TreeError> {
        let path = normalize(path);
        if self.root.starts_with(&path) {
            return Ok(0);
        }
        self.level(&parent_of(&path))
    }

    /// Number of levels between the root and `dir` itself.
    ///
    /// This is what a directory line is indented by, and it equals the
    /// [`depth`](Self::depth) of any entry inside `dir`.
    pub fn level(&self, dir: &Path) -> Result<usize, TreeError> {
        let dir = normalize(dir);
        if self.root.starts_with(&dir) {
            return Ok(0);
        }
        dir.strip_prefix(&self.root)
            .map(|relative| relative.components().count())
            .map_err(|_| TreeError::PathNotUnderRoot {
                path: dir.clone(),
                root: self.root.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested(root: &Path, levels: usize) -> PathBuf {
        (0..levels).fold(root.to_path_buf(), |p, i| p.join(format!("d{}", i)))
    }

    #[test]
    fn test_normalize_resolves_dots() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/a/b/")), PathBuf::from("/a/b"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
    }

    #[test]
    fn test_normalize_makes_relative_paths_absolute() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(normalize(Path::new("some/dir")), cwd.join("some").join("dir"));
        assert_eq!(normalize(Path::new(".")), cwd);
    }

    #[test]
    fn test_parent_of() {
        assert_eq!(parent_of(Path::new("/a/b/c")), PathBuf::from("/a/b"));
        assert_eq!(parent_of(Path::new("/a/b/c/")), PathBuf::from("/a/b"));
        assert_eq!(parent_of(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn test_root_is_depth_zero() {
        let calc = DepthCalculator::new(Path::new("/a"));
        assert_eq!(calc.depth(Path::new("/a")).unwrap(), 0);
        assert_eq!(calc.level(Path::new("/a")).unwrap(), 0);
    }

    #[test]
    fn test_scenario_depths() {
        let calc = DepthCalculator::new(Path::new("/a"));
        assert_eq!(calc.depth(Path::new("/a/x.txt")).unwrap(), 0);
        assert_eq!(calc.level(Path::new("/a/b")).unwrap(), 1);
        assert_eq!(calc.depth(Path::new("/a/b/y.txt")).unwrap(), 1);
    }

    #[test]
    fn test_nested_directories_up_to_fifty_levels() {
        let root = Path::new("/r");
        let calc = DepthCalculator::new(root);
        for k in 0..=50 {
            let dir = nested(root, k);
            assert_eq!(calc.level(&dir).unwrap(), k, "level of {}", dir.display());
            assert_eq!(
                calc.depth(&dir.join("file.txt")).unwrap(),
                k,
                "depth of file in {}",
                dir.display()
            );
        }
    }

    #[test]
    fn test_ancestors_of_root_are_depth_zero() {
        let root = Path::new("/x/y/z");
        let calc = DepthCalculator::new(root);
        for ancestor in root.ancestors() {
            assert_eq!(calc.depth(ancestor).unwrap(), 0, "{}", ancestor.display());
            assert_eq!(calc.level(ancestor).unwrap(), 0, "{}", ancestor.display());
        }
    }

    #[test]
    fn test_path_outside_root_is_an_error() {
        let calc = DepthCalculator::new(Path::new("/a/b"));
        let err = calc.depth(Path::new("/c/d/e")).unwrap_err();
        assert!(matches!(err, TreeError::PathNotUnderRoot { .. }));

        // Sibling that shares a string prefix but not a segment
        assert!(calc.level(Path::new("/a/bc")).is_err());
    }

    #[test]
    fn test_trailing_separator_and_dot_segments_do_not_matter() {
        let calc = DepthCalculator::new(Path::new("/a/"));
        assert_eq!(calc.level(Path::new("/a/b/./c/")).unwrap(), 2);
        assert_eq!(calc.level(Path::new("/a/b/../c")).unwrap(), 1);
    }

    #[test]
    fn test_case_is_preserved() {
        let calc = DepthCalculator::new(Path::new("/Data"));
        assert_eq!(calc.level(Path::new("/Data/sub")).unwrap(), 1);
        assert!(calc.level(Path::new("/data/sub")).is_err());
    }

    #[test]
    fn test_relative_root_and_relative_target() {
        let calc = DepthCalculator::new(Path::new("proj"));
        assert_eq!(calc.level(Path::new("proj/src/tree")).unwrap(), 2);
        assert_eq!(calc.depth(Path::new("proj/src/lib.rs")).unwrap(), 1);
    }
}
