//! An owned container with the accessors as chainable methods.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::collection::{collapse, flatten, pluck};
use crate::fallback::Fallback;
use crate::forget::forget;
use crate::get::get;
use crate::has::{has, has_any};
use crate::ops::{except, only};
use crate::probe::Keyed;
use crate::set::set;
use crate::types::{Keys, PathInput};
use crate::DotPathError;

/// An owned container.
///
/// # Example
///
/// ```
/// use dot_path::{Dot, Fallback};
/// use serde_json::json;
///
/// let mut dot = Dot::from_json(r#"{"a": {"b": 1}}"#).unwrap();
/// dot.set("a.c", json!(2)).forget("a.b");
/// assert_eq!(*dot.get("a.c", Fallback::null()), json!(2));
/// assert!(!dot.has("a.b"));
/// assert_eq!(dot.to_string(), r#"{"a":{"c":2}}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dot {
    storage: Value,
}

impl Dot {
    pub fn new(storage: Value) -> Self {
        Self { storage }
    }

    /// Parse a JSON document into a new container.
    pub fn from_json(text: &str) -> Result<Self, DotPathError> {
        Ok(Self::new(serde_json::from_str(text)?))
    }

    /// The held container.
    pub fn all(&self) -> &Value {
        &self.storage
    }

    pub fn into_inner(self) -> Value {
        self.storage
    }

    pub fn get<F>(&self, path: &str, default: Fallback<F>) -> Cow<'_, Value>
    where
        F: FnOnce() -> Value,
    {
        get(&self.storage, Some(path), default)
    }

    pub fn set(&mut self, path: &str, value: Value) -> &mut Self {
        set(&mut self.storage, Some(path), value);
        self
    }

    /// Replace the held container.
    pub fn replace(&mut self, value: Value) -> &mut Self {
        set(&mut self.storage, None, value);
        self
    }

    pub fn forget<'k>(&mut self, keys: impl Into<Keys<'k>>) -> &mut Self {
        forget(&mut self.storage, keys);
        self
    }

    pub fn has<'k>(&self, keys: impl Into<Keys<'k>>) -> bool {
        has(&self.storage, keys)
    }

    pub fn has_any<'k>(&self, keys: impl Into<Keys<'k>>) -> bool {
        has_any(&self.storage, keys)
    }

    pub fn except<'k>(&self, keys: impl Into<Keys<'k>>) -> Dot {
        Dot::new(except(&self.storage, keys))
    }

    pub fn only<'k>(&self, keys: impl Into<Keys<'k>>) -> Result<Dot, DotPathError> {
        Ok(Dot::new(only(&self.storage, keys)?))
    }

    pub fn pluck<'v, 'k>(
        &self,
        value_path: impl Into<PathInput<'v>>,
        key_path: Option<impl Into<PathInput<'k>>>,
    ) -> Result<Value, DotPathError> {
        pluck(&self.storage, value_path, key_path)
    }

    pub fn flatten(&self, depth: i64) -> Result<Vec<Value>, DotPathError> {
        flatten(&self.storage, depth)
    }

    pub fn collapse(&self) -> Result<Value, DotPathError> {
        collapse(&self.storage)
    }
}

impl From<Value> for Dot {
    fn from(storage: Value) -> Self {
        Self::new(storage)
    }
}

impl From<Dot> for Value {
    fn from(dot: Dot) -> Self {
        dot.storage
    }
}

impl Keyed for Dot {
    fn is_accessible(&self) -> bool {
        self.storage.is_accessible()
    }

    fn is_falsy(&self) -> bool {
        self.storage.is_falsy()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.storage.contains_key(key)
    }

    fn get_key(&self, key: &str) -> Option<&Value> {
        self.storage.get_key(key)
    }

    fn get_key_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.storage.get_key_mut(key)
    }

    fn remove_key(&mut self, key: &str) -> Option<Value> {
        self.storage.remove_key(key)
    }

    fn to_value(&self) -> Cow<'_, Value> {
        Cow::Borrowed(&self.storage)
    }
}

impl fmt::Display for Dot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.storage)
    }
}
