//! Paths locating a failure inside nested input.
//!
//! This module provides [`StructPath`] and [`PathSegment`]. Paths are built
//! bottom-up: a failing leaf starts with an empty path and every enclosing
//! combinator prepends its own key or index as the error travels back to the
//! caller, so the finished path reads root-to-leaf.

use std::collections::VecDeque;
use std::fmt::{self, Display};

/// A segment of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key (e.g., `user`, `email`)
    Field(String),
    /// An array position (e.g., `[0]`, `[42]`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// Keys print as-is and indices print as their decimal string.
impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index(idx) => write!(f, "{}", idx),
        }
    }
}

/// A path to a value in a nested structure.
///
/// # Example
///
/// ```rust
/// use litmus::StructPath;
///
/// let mut path = StructPath::root();
/// path.prepend_field("email");
/// path.prepend_index(0);
/// path.prepend_field("users");
///
/// assert_eq!(path.to_string(), "users[0].email");
/// assert_eq!(path.join("."), "users.0.email");
/// assert_eq!(path.to_strings(), vec!["users", "0", "email"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StructPath {
    segments: VecDeque<PathSegment>,
}

impl StructPath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Inserts a field segment in front of the existing ones.
    pub fn prepend_field(&mut self, name: impl Into<String>) {
        self.segments.push_front(PathSegment::Field(name.into()));
    }

    /// Inserts an index segment in front of the existing ones.
    pub fn prepend_index(&mut self, index: usize) {
        self.segments.push_front(PathSegment::Index(index));
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments, root first.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the first segment, or None if this is root.
    pub fn first(&self) -> Option<&PathSegment> {
        self.segments.front()
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.back()
    }

    /// Returns every segment as a string, indices in decimal.
    pub fn to_strings(&self) -> Vec<String> {
        self.segments.iter().map(ToString::to_string).collect()
    }

    /// Joins the string form of every segment with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.to_strings().join(separator)
    }
}

impl Display for StructPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for StructPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Field(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Field(name)
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_is_empty() {
        let path = StructPath::root();
        assert!(path.is_root());
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.to_string(), "");
        assert!(path.to_strings().is_empty());
    }

    #[test]
    fn test_prepend_builds_root_to_leaf() {
        let mut path = StructPath::root();
        path.prepend_field("n");
        path.prepend_index(1);
        path.prepend_field("items");

        assert_eq!(path.to_strings(), vec!["items", "1", "n"]);
        assert_eq!(path.to_string(), "items[1].n");
        assert_eq!(path.first(), Some(&PathSegment::field("items")));
        assert_eq!(path.last(), Some(&PathSegment::field("n")));
    }

    #[test]
    fn test_collected_and_prepended_paths_agree() {
        let collected: StructPath = [
            PathSegment::from("a"),
            PathSegment::from(2usize),
            PathSegment::from("b"),
        ]
        .into_iter()
        .collect();

        let mut prepended = StructPath::root();
        prepended.prepend_field("b");
        prepended.prepend_index(2);
        prepended.prepend_field("a");

        assert_eq!(collected, prepended);
    }

    #[test]
    fn test_leading_index_display() {
        let mut path = StructPath::root();
        path.prepend_index(2);
        assert_eq!(path.to_string(), "[2]");
        assert_eq!(path.join("."), "2");
    }

    #[test]
    fn test_from_iterator() {
        let path: StructPath = vec![
            PathSegment::from("a"),
            PathSegment::from(1usize),
            PathSegment::from("b"),
        ]
        .into_iter()
        .collect();
        assert_eq!(path.join("/"), "a/1/b");
    }

    #[test]
    fn test_unicode_keys() {
        let mut path = StructPath::root();
        path.prepend_index(0);
        path.prepend_field("名前");
        assert_eq!(path.to_string(), "名前[0]");
    }
}
