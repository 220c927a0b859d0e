//! Type definitions for dot-paths.

use std::borrow::Cow;
use std::fmt;

/// A dot-path split into segments.
///
/// Segments borrow from the path string they were split from.
pub type Path<'a> = Vec<&'a str>;

/// The key of one entry of a container.
///
/// Sequences are keyed by position, mappings by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRef<'a> {
    Index(usize),
    Name(&'a str),
}

impl KeyRef<'_> {
    /// Check if this key addresses the same entry as a path segment.
    pub fn matches(&self, segment: &str) -> bool {
        match self {
            KeyRef::Index(idx) => crate::util::parse_index(segment) == Some(*idx),
            KeyRef::Name(name) => *name == segment,
        }
    }
}

impl fmt::Display for KeyRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRef::Index(idx) => write!(f, "{idx}"),
            KeyRef::Name(name) => f.write_str(name),
        }
    }
}

/// One or many dot-paths, as accepted by `forget`, `has` and `has_any`.
///
/// Converts from a single path, a list of paths, or an `Option` of either
/// (`None` is the empty key set).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keys<'a>(Vec<Cow<'a, str>>);

impl<'a> Keys<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|key| key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if any key names the given top-level entry.
    pub fn contains_entry(&self, key: KeyRef<'_>) -> bool {
        self.iter().any(|k| key.matches(k))
    }
}

impl<'a> From<&'a str> for Keys<'a> {
    fn from(key: &'a str) -> Self {
        Keys(vec![Cow::Borrowed(key)])
    }
}

impl<'a> From<&'a String> for Keys<'a> {
    fn from(key: &'a String) -> Self {
        Keys(vec![Cow::Borrowed(key.as_str())])
    }
}

impl From<String> for Keys<'static> {
    fn from(key: String) -> Self {
        Keys(vec![Cow::Owned(key)])
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Keys<'a> {
    fn from(keys: [&'a str; N]) -> Self {
        Keys(keys.into_iter().map(Cow::Borrowed).collect())
    }
}

impl<'a> From<&'a [&'a str]> for Keys<'a> {
    fn from(keys: &'a [&'a str]) -> Self {
        Keys(keys.iter().copied().map(Cow::Borrowed).collect())
    }
}

impl<'a> From<Vec<&'a str>> for Keys<'a> {
    fn from(keys: Vec<&'a str>) -> Self {
        Keys(keys.into_iter().map(Cow::Borrowed).collect())
    }
}

impl<'a> From<&'a [String]> for Keys<'a> {
    fn from(keys: &'a [String]) -> Self {
        Keys(keys.iter().map(|k| Cow::Borrowed(k.as_str())).collect())
    }
}

impl From<Vec<String>> for Keys<'static> {
    fn from(keys: Vec<String>) -> Self {
        Keys(keys.into_iter().map(Cow::Owned).collect())
    }
}

impl<'a, T> From<Option<T>> for Keys<'a>
where
    T: Into<Keys<'a>>,
{
    fn from(keys: Option<T>) -> Self {
        keys.map(Into::into).unwrap_or_default()
    }
}

/// A single path, either dotted or already split into segments.
///
/// Split segments are walked as given, so a segment may itself contain the
/// delimiter. No segments at all addresses the container itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathInput<'a> {
    Dotted(&'a str),
    Segments(Vec<&'a str>),
}

impl<'a> From<&'a str> for PathInput<'a> {
    fn from(path: &'a str) -> Self {
        PathInput::Dotted(path)
    }
}

impl<'a> From<&'a String> for PathInput<'a> {
    fn from(path: &'a String) -> Self {
        PathInput::Dotted(path.as_str())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for PathInput<'a> {
    fn from(segments: [&'a str; N]) -> Self {
        PathInput::Segments(segments.to_vec())
    }
}

impl<'a> From<&'a [&'a str]> for PathInput<'a> {
    fn from(segments: &'a [&'a str]) -> Self {
        PathInput::Segments(segments.to_vec())
    }
}

impl<'a> From<Vec<&'a str>> for PathInput<'a> {
    fn from(segments: Vec<&'a str>) -> Self {
        PathInput::Segments(segments)
    }
}
