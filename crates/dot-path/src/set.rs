use serde_json::{Map, Value};
use tracing::debug;

use crate::probe::Keyed;
use crate::util::{kind_of, parse_index, split_path};

/// Set a value in a container by dot-path, creating missing levels.
///
/// - `None` as the path replaces the whole container with `value`.
/// - Intermediate segments that are missing, `null`, or hold a non-container
///   value are replaced with an empty object before descending. The old
///   value is lost.
/// - On an array, an in-range index replaces and the index equal to the
///   length appends. Any other segment turns the array into an object keyed
///   by decimal indices first.
///
/// The container is mutated in place and returned for chaining.
///
/// # Example
///
/// ```
/// use dot_path::set;
/// use serde_json::json;
///
/// let mut doc = json!({"a": 1});
/// set(&mut doc, Some("a.b"), json!(2));
/// set(&mut doc, Some("x.y.z"), json!(5));
/// assert_eq!(doc, json!({"a": {"b": 2}, "x": {"y": {"z": 5}}}));
/// ```
pub fn set<'a>(container: &'a mut Value, path: Option<&str>, value: Value) -> &'a mut Value {
    let Some(path) = path else {
        *container = value;
        return container;
    };
    let segments = split_path(path);
    let Some((last, parents)) = segments.split_last() else {
        return container;
    };

    let mut current = &mut *container;
    for segment in parents {
        let child = slot(current, segment);
        if !child.is_accessible() {
            if !child.is_null() {
                debug!(
                    path,
                    segment,
                    kind = kind_of(child),
                    "overwriting non-container value with an empty object"
                );
            }
            *child = Value::Object(Map::new());
        }
        current = child;
    }
    *slot(current, last) = value;

    container
}

/// Find or create the entry for `segment` in `parent`.
///
/// A non-container parent becomes an empty object, and an array that cannot
/// take `segment` as an index becomes an object.
fn slot<'a>(parent: &'a mut Value, segment: &str) -> &'a mut Value {
    if !parent.is_accessible() {
        *parent = Value::Object(Map::new());
    }
    let position = match &*parent {
        Value::Array(arr) => parse_index(segment).filter(|&idx| idx <= arr.len()),
        _ => None,
    };
    if position.is_none() {
        promote_to_object(parent);
    }

    match parent {
        Value::Array(arr) => {
            let idx = position.unwrap_or(arr.len());
            if idx == arr.len() {
                arr.push(Value::Null);
            }
            &mut arr[idx]
        }
        Value::Object(map) => map.entry(segment).or_insert(Value::Null),
        _ => unreachable!(),
    }
}

/// Turn an array into an object keyed by the decimal indices.
fn promote_to_object(value: &mut Value) {
    if let Value::Array(arr) = value {
        debug!(len = arr.len(), "promoting array to object");
        let map: Map<String, Value> = std::mem::take(arr)
            .into_iter()
            .enumerate()
            .map(|(idx, v)| (idx.to_string(), v))
            .collect();
        *value = Value::Object(map);
    }
}
