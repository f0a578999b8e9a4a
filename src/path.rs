//! Dot-notation paths and the walker that resolves them.
//!
//! This module provides [`ConfigPath`] for representing paths like `a.b.c`,
//! the [`Container`] capability for keyed lookup, and [`walk`] which resolves
//! a path against a root value while requiring every ancestor to be defined.

use std::fmt::{self, Display};

use crate::check::Check;
use crate::error::PreconditionError;
use crate::value::Value;

/// A dot-delimited path to a value in a nested structure.
///
/// Segments are produced by splitting on `.`; there is no escaping, so a key
/// containing a dot cannot be addressed.
///
/// # Example
///
/// ```rust
/// use preconditions::ConfigPath;
///
/// let path = ConfigPath::parse("server.tls.cert");
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.last(), Some("cert"));
/// assert_eq!(path.location_tag(), " {server.tls.cert}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigPath {
    segments: Vec<String>,
}

impl ConfigPath {
    /// Splits a dot-delimited string into a path.
    ///
    /// The empty string yields a path with one empty segment.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// Returns a new path with a segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Returns the parent path (all segments except the last), or None if
    /// this path has a single segment.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() <= 1 {
            None
        } else {
            Some(Self {
                segments: self.segments[..self.segments.len() - 1].to_vec(),
            })
        }
    }

    /// Returns the last segment.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Returns the tag appended to messages of errors raised for this path.
    pub fn location_tag(&self) -> String {
        format!(" {{{}}}", self)
    }
}

impl Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl From<&str> for ConfigPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

/// Keyed lookup over a nested value.
///
/// Implementors expose their children by string key. Kinds without children
/// return `None` for every key.
pub trait Container {
    /// Returns the child stored under `key`.
    fn get_key(&self, key: &str) -> Option<&Self>;

    /// Returns true if a child is stored under `key`.
    fn has_key(&self, key: &str) -> bool {
        self.get_key(key).is_some()
    }
}

impl Container for Value {
    fn get_key(&self, key: &str) -> Option<&Self> {
        self.get(key)
    }
}

impl Container for serde_json::Value {
    fn get_key(&self, key: &str) -> Option<&Self> {
        match self {
            serde_json::Value::Object(map) => map.get(key),
            serde_json::Value::Array(items) => {
                key.parse::<usize>().ok().and_then(|i| items.get(i))
            }
            _ => None,
        }
    }
}

/// Resolves `path` against `root` and hands the result to `verify`.
///
/// Every segment except the last must resolve to a defined value; the first
/// missing ancestor fails with the "should be defined" message followed by
/// the path's location tag, before `verify` runs. The final segment may be
/// missing, in which case `verify` receives `None`. A missing root behaves
/// like an empty container.
///
/// # Example
///
/// ```rust
/// use preconditions::path::{walk, ConfigPath};
/// use serde_json::json;
///
/// let root = json!({"a": {"b": {"c": "X"}}});
///
/// let leaf = walk(Some(&root), &ConfigPath::parse("a.b.c"), |v| Ok(v.cloned()));
/// assert_eq!(leaf.unwrap(), Some(json!("X")));
///
/// let missing = walk(Some(&root), &ConfigPath::parse("a.x.c"), |v| Ok(v.cloned()));
/// assert!(missing.unwrap_err().message.starts_with("value should be defined"));
/// ```
pub fn walk<'v, C, T, F>(
    root: Option<&'v C>,
    path: &ConfigPath,
    verify: F,
) -> Result<T, PreconditionError>
where
    C: Container,
    F: FnOnce(Option<&'v C>) -> Result<T, PreconditionError>,
{
    tracing::trace!(path = %path, "walking config path");

    let mut current = root;
    let last = path.len().saturating_sub(1);

    for (i, segment) in path.segments().enumerate() {
        let next = current.and_then(|c| c.get_key(segment));
        if i < last && next.is_none() {
            tracing::debug!(path = %path, segment, "ancestor segment is undefined");
            return Err(undefined_ancestor(path));
        }
        current = next;
    }

    verify(current)
}

fn undefined_ancestor(path: &ConfigPath) -> PreconditionError {
    PreconditionError::new(format!(
        "{}{}",
        Check::Defined.default_message(),
        path.location_tag()
    ))
    .with_code(Check::Defined.code())
    .with_path(path.clone())
}
