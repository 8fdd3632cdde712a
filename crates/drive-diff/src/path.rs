//! Logical tree paths shared by both sides of a diff

use std::path::Path;

/// A logical path within a file tree, relative to a common root.
///
/// Always uses forward slashes internally, never carries a leading or
/// trailing slash. Both the local and the remote lister normalize into this
/// form before anything is diffed; the engine itself performs no further
/// normalization and compares paths by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreePath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl TreePath {
    /// Create a new TreePath from any path-like input.
    ///
    /// Converts backslashes to forward slashes and strips leading and
    /// trailing separators.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self {
            inner: normalized.trim_matches('/').to_string(),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.trim_matches('/');
        if self.inner.is_empty() {
            Self::new(segment)
        } else {
            Self {
                inner: format!("{}/{}", self.inner, segment),
            }
        }
    }

    /// Get the final path segment.
    pub fn file_name(&self) -> &str {
        self.inner.rsplit('/').next().unwrap_or(&self.inner)
    }

    /// True if `other` is a strict descendant of this path.
    ///
    /// The test is segment-aligned: `Docs` contains `Docs/a.txt` but not
    /// `Docs2/a.txt`, and never contains itself.
    pub fn contains(&self, other: &TreePath) -> bool {
        other.inner.len() > self.inner.len() + 1
            && other.inner.starts_with(&self.inner)
            && other.inner.as_bytes()[self.inner.len()] == b'/'
    }

    /// True if this path equals `prefix` or lies anywhere under it.
    ///
    /// This is the exclusion-prefix test: the prefix may denote either a
    /// single file or a whole subtree.
    pub fn is_within(&self, prefix: &str) -> bool {
        let prefix = prefix.trim_matches('/');
        self.inner == prefix
            || (self.inner.len() > prefix.len()
                && self.inner.starts_with(prefix)
                && self.inner.as_bytes()[prefix.len()] == b'/')
    }

    /// The path with the final extension removed, if it has one.
    ///
    /// Splits on the last `.` of the final segment only, so dotted
    /// directory names earlier in the path are untouched. Returns `None`
    /// when the final segment has no extension.
    pub fn with_extension_stripped(&self) -> Option<TreePath> {
        let name = self.file_name();
        let dot = name.rfind('.')?;
        if dot == 0 {
            // Hidden files like `.gitignore` have no extension to strip
            return None;
        }
        let cut = self.inner.len() - (name.len() - dot);
        Some(Self {
            inner: self.inner[..cut].to_string(),
        })
    }
}

impl std::fmt::Display for TreePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for TreePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TreePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_strips_leading_and_trailing_slashes() {
        assert_eq!(TreePath::new("/Docs/a.txt/").as_str(), "Docs/a.txt");
        assert_eq!(TreePath::new("Docs").as_str(), "Docs");
    }

    #[test]
    fn new_normalizes_backslashes() {
        assert_eq!(TreePath::new("Docs\\sub\\a.txt").as_str(), "Docs/sub/a.txt");
    }

    #[test]
    fn join_appends_segment() {
        let base = TreePath::new("Docs");
        assert_eq!(base.join("sub/a.txt").as_str(), "Docs/sub/a.txt");
        assert_eq!(TreePath::new("").join("a.txt").as_str(), "a.txt");
    }

    #[test]
    fn file_name_returns_last_segment() {
        assert_eq!(TreePath::new("Docs/sub/a.txt").file_name(), "a.txt");
        assert_eq!(TreePath::new("Docs").file_name(), "Docs");
    }

    #[test]
    fn contains_is_segment_aligned() {
        let dir = TreePath::new("Docs/foo");
        assert!(dir.contains(&TreePath::new("Docs/foo/bar.txt")));
        assert!(dir.contains(&TreePath::new("Docs/foo/sub/deep.txt")));
        assert!(!dir.contains(&TreePath::new("Docs/foo2/bar.txt")));
        assert!(!dir.contains(&TreePath::new("Docs/foo")));
        assert!(!dir.contains(&TreePath::new("Docs")));
    }

    #[rstest::rstest]
    #[case("a/secret.key", "a/secret.key", true)]
    #[case("a/secret.key", "a", true)]
    #[case("a/secret.key", "a/secret", false)]
    #[case("ab/x", "a", false)]
    #[case("a/b/c", "a/b", true)]
    #[case("a", "a/b", false)]
    fn is_within_matches_exact_and_descendants(
        #[case] path: &str,
        #[case] prefix: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(TreePath::new(path).is_within(prefix), expected);
    }

    #[test]
    fn extension_strip_uses_last_dot_of_final_segment() {
        assert_eq!(
            TreePath::new("a/report.xlsx").with_extension_stripped(),
            Some(TreePath::new("a/report"))
        );
        assert_eq!(
            TreePath::new("a.b/report.tar.gz").with_extension_stripped(),
            Some(TreePath::new("a.b/report.tar"))
        );
        assert_eq!(TreePath::new("a/report").with_extension_stripped(), None);
        assert_eq!(TreePath::new("a/.hidden").with_extension_stripped(), None);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut paths = vec![
            TreePath::new("b"),
            TreePath::new("a/z"),
            TreePath::new("a"),
        ];
        paths.sort();
        let strs: Vec<_> = paths.iter().map(|p| p.as_str()).collect();
        assert_eq!(strs, vec!["a", "a/z", "b"]);
    }
}
