//! Container probing: what can be descended into, and which keys exist.

use std::borrow::Cow;
use std::iter::Enumerate;
use std::slice;

use serde_json::{map, Map, Value};

use crate::types::KeyRef;
use crate::util::parse_index;

/// Keyed access to a container.
///
/// Implemented for [`Value`], [`Map`] and `Vec<Value>`. Implement it for a
/// custom root type to run the accessors against it directly; anything
/// nested below the root is walked as a [`Value`].
pub trait Keyed {
    /// Whether this value can be descended into.
    fn is_accessible(&self) -> bool {
        true
    }

    /// Whether this value counts as empty for `has` / `has_any`.
    fn is_falsy(&self) -> bool;

    /// Whether `key` is present. Presence is about the key: a key holding
    /// `null` exists.
    fn contains_key(&self, key: &str) -> bool {
        self.get_key(key).is_some()
    }

    fn get_key(&self, key: &str) -> Option<&Value>;

    fn get_key_mut(&mut self, key: &str) -> Option<&mut Value>;

    /// Remove `key`, keeping the order of the remaining entries.
    fn remove_key(&mut self, key: &str) -> Option<Value>;

    /// The whole container as a value.
    fn to_value(&self) -> Cow<'_, Value>;
}

impl Keyed for Value {
    fn is_accessible(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty() || s == "0",
            Value::Array(arr) => arr.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }

    fn get_key(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get_key(key),
            Value::Array(arr) => arr.get_key(key),
            _ => None,
        }
    }

    fn get_key_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Value::Object(map) => map.get_key_mut(key),
            Value::Array(arr) => arr.get_key_mut(key),
            _ => None,
        }
    }

    fn remove_key(&mut self, key: &str) -> Option<Value> {
        match self {
            Value::Object(map) => map.remove_key(key),
            Value::Array(arr) => arr.remove_key(key),
            _ => None,
        }
    }

    fn to_value(&self) -> Cow<'_, Value> {
        Cow::Borrowed(self)
    }
}

impl Keyed for Map<String, Value> {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }

    fn contains_key(&self, key: &str) -> bool {
        Map::contains_key(self, key)
    }

    fn get_key(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn get_key_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.get_mut(key)
    }

    fn remove_key(&mut self, key: &str) -> Option<Value> {
        self.shift_remove(key)
    }

    fn to_value(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::Object(self.clone()))
    }
}

impl Keyed for Vec<Value> {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }

    fn get_key(&self, key: &str) -> Option<&Value> {
        self.get(parse_index(key)?)
    }

    fn get_key_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.get_mut(parse_index(key)?)
    }

    fn remove_key(&mut self, key: &str) -> Option<Value> {
        let idx = parse_index(key).filter(|&idx| idx < self.len())?;
        Some(self.remove(idx))
    }

    fn to_value(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::Array(self.clone()))
    }
}

/// Check if a value can be descended into.
pub fn is_accessible<C: Keyed + ?Sized>(value: &C) -> bool {
    value.is_accessible()
}

/// Check if `key` is present in `container`.
pub fn exists<C: Keyed + ?Sized>(container: &C, key: &str) -> bool {
    container.contains_key(key)
}

/// Iterator over the entries of a container value.
///
/// Yields nothing for scalars.
pub enum Entries<'a> {
    Array(Enumerate<slice::Iter<'a, Value>>),
    Object(map::Iter<'a>),
    Empty,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (KeyRef<'a>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Array(iter) => iter.next().map(|(idx, v)| (KeyRef::Index(idx), v)),
            Entries::Object(iter) => iter.next().map(|(k, v)| (KeyRef::Name(k.as_str()), v)),
            Entries::Empty => None,
        }
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Array(iter) => iter.next_back().map(|(idx, v)| (KeyRef::Index(idx), v)),
            Entries::Object(iter) => iter.next_back().map(|(k, v)| (KeyRef::Name(k.as_str()), v)),
            Entries::Empty => None,
        }
    }
}

/// Iterate the entries of a container value.
pub fn entries(value: &Value) -> Entries<'_> {
    match value {
        Value::Array(arr) => Entries::Array(arr.iter().enumerate()),
        Value::Object(map) => Entries::Object(map.iter()),
        _ => Entries::Empty,
    }
}
