//! Whole-container helpers built on the accessors.
//!
//! Containers here behave as ordered maps: arrays are maps with index keys.
//! A result whose keys are exactly `0..n` in order comes back as an array,
//! anything else as an object.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::fallback::Fallback;
use crate::forget::forget;
use crate::probe::{entries, Keyed};
use crate::types::{KeyRef, Keys};
use crate::util::{kind_of, parse_index};
use crate::DotPathError;

/// Owned ordered entries, before being turned back into a container.
type Entry = (OwnedKey, Value);

#[derive(Debug, Clone, PartialEq, Eq)]
enum OwnedKey {
    Index(usize),
    Name(String),
}

impl From<KeyRef<'_>> for OwnedKey {
    fn from(key: KeyRef<'_>) -> Self {
        match key {
            KeyRef::Index(idx) => OwnedKey::Index(idx),
            KeyRef::Name(name) => match parse_index(name) {
                Some(idx) => OwnedKey::Index(idx),
                None => OwnedKey::Name(name.to_string()),
            },
        }
    }
}

fn owned_entries(value: &Value) -> Vec<Entry> {
    entries(value)
        .map(|(key, v)| (OwnedKey::from(key), v.clone()))
        .collect()
}

/// Build a container from ordered entries.
///
/// With `renumber`, index keys are reassigned `0, 1, ...` in order.
fn assemble(entries: Vec<Entry>, renumber: bool) -> Value {
    let mut next = 0usize;
    let entries: Vec<Entry> = if renumber {
        entries
            .into_iter()
            .map(|(key, v)| match key {
                OwnedKey::Index(_) => {
                    next += 1;
                    (OwnedKey::Index(next - 1), v)
                }
                named => (named, v),
            })
            .collect()
    } else {
        entries
    };

    let is_list = entries
        .iter()
        .enumerate()
        .all(|(pos, (key, _))| *key == OwnedKey::Index(pos));
    if is_list {
        return Value::Array(entries.into_iter().map(|(_, v)| v).collect());
    }

    let map = entries
        .into_iter()
        .map(|(key, v)| match key {
            OwnedKey::Index(idx) => (idx.to_string(), v),
            OwnedKey::Name(name) => (name, v),
        })
        .collect::<Map<String, Value>>();
    Value::Object(map)
}

fn next_free_index(entries: &[Entry]) -> usize {
    entries
        .iter()
        .filter_map(|(key, _)| match key {
            OwnedKey::Index(idx) => Some(idx + 1),
            OwnedKey::Name(_) => None,
        })
        .max()
        .unwrap_or(0)
}

/// Copy of the container without the given dot-paths.
///
/// ```
/// use dot_path::except;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 1, "c": 2}, "d": 3});
/// assert_eq!(except(&doc, ["a.b", "d"]), json!({"a": {"c": 2}}));
/// ```
pub fn except<'k>(container: &Value, keys: impl Into<Keys<'k>>) -> Value {
    let mut copy = container.clone();
    forget(&mut copy, keys);
    copy
}

/// Keep only the given top-level keys, in container order.
///
/// Keys are matched as-is; there is no dot-walk. Array positions keep
/// their original index.
pub fn only<'k>(container: &Value, keys: impl Into<Keys<'k>>) -> Result<Value, DotPathError> {
    if !container.is_accessible() {
        return Err(DotPathError::NotIterable {
            found: kind_of(container),
        });
    }
    let keys = keys.into();
    let kept = entries(container)
        .filter(|(key, _)| keys.contains_entry(*key))
        .map(|(key, v)| (OwnedKey::from(key), v.clone()))
        .collect();
    Ok(assemble(kept, false))
}

/// First value of a container, or the fallback when it is empty.
pub fn first<'a, F>(items: &'a Value, default: Fallback<F>) -> Cow<'a, Value>
where
    F: FnOnce() -> Value,
{
    first_where(items, |_, _| true, default)
}

/// First value passing `predicate(value, key)`, or the fallback.
///
/// ```
/// use dot_path::{first_where, Fallback};
/// use serde_json::json;
///
/// let items = json!([1, 5, 10]);
/// let big = first_where(&items, |v, _| v.as_i64() > Some(3), Fallback::null());
/// assert_eq!(*big, json!(5));
/// ```
pub fn first_where<'a, P, F>(items: &'a Value, mut predicate: P, default: Fallback<F>) -> Cow<'a, Value>
where
    P: FnMut(&Value, KeyRef<'_>) -> bool,
    F: FnOnce() -> Value,
{
    match entries(items).find(|(key, v)| predicate(*v, *key)) {
        Some((_, value)) => Cow::Borrowed(value),
        None => Cow::Owned(default.resolve()),
    }
}

/// Last value of a container, or the fallback when it is empty.
pub fn last<'a, F>(items: &'a Value, default: Fallback<F>) -> Cow<'a, Value>
where
    F: FnOnce() -> Value,
{
    last_where(items, |_, _| true, default)
}

/// Last value passing `predicate(value, key)`, or the fallback.
pub fn last_where<'a, P, F>(items: &'a Value, mut predicate: P, default: Fallback<F>) -> Cow<'a, Value>
where
    P: FnMut(&Value, KeyRef<'_>) -> bool,
    F: FnOnce() -> Value,
{
    match entries(items).rev().find(|(key, v)| predicate(*v, *key)) {
        Some((_, value)) => Cow::Borrowed(value),
        None => Cow::Owned(default.resolve()),
    }
}

/// Wrap a value in an array: `null` becomes `[]`, containers are kept.
pub fn wrap(value: Value) -> Value {
    match value {
        Value::Null => Value::Array(Vec::new()),
        Value::Array(_) | Value::Object(_) => value,
        other => Value::Array(vec![other]),
    }
}

/// Check if any value of the container equals `needle`.
pub fn contains(items: &Value, needle: &Value) -> bool {
    entries(items).any(|(_, v)| v == needle)
}

/// Keep the entries whose value is one of `values`, keys unchanged.
///
/// `values` is wrapped first, so a single scalar works too.
pub fn accept_values(container: &Value, values: Value) -> Value {
    let accepted = wrap(values);
    let kept = entries(container)
        .filter(|(_, v)| contains(&accepted, v))
        .map(|(key, v)| (OwnedKey::from(key), v.clone()))
        .collect();
    assemble(kept, false)
}

/// Put a value at the front of a container.
///
/// Without a key, index keys are renumbered after the new value. With a
/// key, the new entry replaces any existing entry under that key.
///
/// ```
/// use dot_path::prepend;
/// use serde_json::json;
///
/// assert_eq!(prepend(json!([2, 3]), json!(1), None), json!([1, 2, 3]));
/// assert_eq!(
///     prepend(json!({"b": 2, "a": 0}), json!(1), Some("a")),
///     json!({"a": 1, "b": 2}),
/// );
/// ```
pub fn prepend(items: Value, value: Value, key: Option<&str>) -> Value {
    let existing = owned_entries(&wrap(items));
    match key {
        None => {
            let mut all = vec![(OwnedKey::Index(0), value)];
            all.extend(existing);
            assemble(all, true)
        }
        Some(key) => {
            let key = OwnedKey::from(KeyRef::Name(key));
            let mut all = vec![(key.clone(), value)];
            all.extend(existing.into_iter().filter(|(k, _)| *k != key));
            assemble(all, false)
        }
    }
}

/// Put a value at the back of a container.
///
/// Without a key, the value takes the next free index. With a key, an
/// existing entry under that key wins and the container is unchanged.
///
/// ```
/// use dot_path::append;
/// use serde_json::json;
///
/// assert_eq!(append(json!([1, 2]), json!(3), None), json!([1, 2, 3]));
/// assert_eq!(append(json!({"a": 1}), json!(9), Some("a")), json!({"a": 1}));
/// ```
pub fn append(items: Value, value: Value, key: Option<&str>) -> Value {
    let mut all = owned_entries(&wrap(items));
    let key = match key {
        None => OwnedKey::Index(next_free_index(&all)),
        Some(key) => OwnedKey::from(KeyRef::Name(key)),
    };
    if !all.iter().any(|(k, _)| *k == key) {
        all.push((key, value));
    }
    assemble(all, false)
}

/// Slice the entries of a container.
///
/// A negative `offset` counts from the end. A missing `length` runs to the
/// end, a negative one stops that many entries before the end. Index keys
/// are renumbered unless `preserve_keys` is set; named keys are always kept.
pub fn slice(items: &Value, offset: i64, length: Option<i64>, preserve_keys: bool) -> Value {
    let all = owned_entries(items);
    let len = all.len() as i64;
    let start = if offset < 0 { (len + offset).max(0) } else { offset.min(len) };
    let end = match length {
        None => len,
        Some(length) if length < 0 => (len + length).max(start),
        Some(length) => start.saturating_add(length).min(len),
    };
    let picked = all
        .into_iter()
        .skip(start as usize)
        .take((end - start) as usize)
        .collect();
    assemble(picked, !preserve_keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_except_leaves_original() {
        let doc = json!({"a": 1, "b": 2});
        assert_eq!(except(&doc, "a"), json!({"b": 2}));
        assert_eq!(doc, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_only() {
        let doc = json!({"a": 1, "b": 2, "c": 3});
        assert_eq!(only(&doc, ["c", "a", "z"]).unwrap(), json!({"a": 1, "c": 3}));
        assert_eq!(only(&json!([1, 2, 3]), ["0", "1"]).unwrap(), json!([1, 2]));
        assert_eq!(only(&json!([1, 2, 3]), ["2"]).unwrap(), json!({"2": 3}));
        assert!(only(&json!(1), "a").is_err());
    }

    #[test]
    fn test_first_and_last() {
        let items = json!([1, 2, 3]);
        assert_eq!(*first(&items, Fallback::null()), json!(1));
        assert_eq!(*last(&items, Fallback::null()), json!(3));
        assert_eq!(*first(&json!([]), Fallback::value("none")), json!("none"));
        assert_eq!(*last(&json!({}), Fallback::deferred(|| json!(0))), json!(0));
    }

    #[test]
    fn test_last_where_sees_keys() {
        let items = json!({"a": 1, "b": 2, "c": 3});
        let hit = last_where(&items, |_, key| key != KeyRef::Name("c"), Fallback::null());
        assert_eq!(*hit, json!(2));
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(Value::Null), json!([]));
        assert_eq!(wrap(json!("a")), json!(["a"]));
        assert_eq!(wrap(json!([1])), json!([1]));
        assert_eq!(wrap(json!({"a": 1})), json!({"a": 1}));
    }

    #[test]
    fn test_contains_and_accept_values() {
        let doc = json!({"a": "x", "b": "y", "c": "x"});
        assert!(contains(&doc, &json!("y")));
        assert!(!contains(&doc, &json!("X")));
        assert_eq!(accept_values(&doc, json!("x")), json!({"a": "x", "c": "x"}));
        assert_eq!(accept_values(&json!([1, 2, 3]), json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn test_prepend_renumbers() {
        let doc = json!({"0": "a", "k": "b", "1": "c"});
        assert_eq!(
            prepend(doc, json!("z"), None),
            json!({"0": "z", "1": "a", "k": "b", "2": "c"})
        );
        assert_eq!(prepend(Value::Null, json!(1), None), json!([1]));
    }

    #[test]
    fn test_append_next_free_index() {
        let doc = json!({"5": "a", "k": "b"});
        assert_eq!(append(doc, json!("c"), None), json!({"5": "a", "k": "b", "6": "c"}));
        assert_eq!(append(json!({"a": 1}), json!(2), Some("b")), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_slice() {
        let items = json!(["a", "b", "c", "d"]);
        assert_eq!(slice(&items, 1, Some(2), false), json!(["b", "c"]));
        assert_eq!(slice(&items, 1, Some(2), true), json!({"1": "b", "2": "c"}));
        assert_eq!(slice(&items, -2, None, false), json!(["c", "d"]));
        assert_eq!(slice(&items, 0, Some(-1), false), json!(["a", "b", "c"]));
        assert_eq!(slice(&items, 10, Some(2), false), json!([]));
        let doc = json!({"x": 1, "y": 2});
        assert_eq!(slice(&doc, 1, None, false), json!({"y": 2}));
    }
}
