//! Bulk operations over sequences of containers.

use serde_json::{Map, Value};

use crate::fallback::Fallback;
use crate::get::{get, walk};
use crate::probe::{entries, Keyed};
use crate::types::{KeyRef, PathInput};
use crate::util::{is_valid_index, key_string, kind_of};
use crate::DotPathError;

fn ensure_container(items: &Value) -> Result<(), DotPathError> {
    if items.is_accessible() {
        Ok(())
    } else {
        Err(DotPathError::NotIterable {
            found: kind_of(items),
        })
    }
}

/// Pluck the value at `value_path` out of every item.
///
/// Either path may be dotted or already split into segments (see
/// [`PathInput`]). Without `key_path` the result is an array in item order.
/// With it, the result is an object keyed by each item's (stringified) value
/// at `key_path`; later items overwrite earlier ones on a key collision.
/// Items missing the path contribute `null`.
///
/// # Example
///
/// ```
/// use dot_path::pluck;
/// use serde_json::json;
///
/// let users = json!([{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]);
/// assert_eq!(pluck(&users, "name", None::<&str>).unwrap(), json!(["a", "b"]));
/// assert_eq!(pluck(&users, "name", Some("id")).unwrap(), json!({"1": "a", "2": "b"}));
///
/// let hosts = json!([{"dns": {"a.example": "10.0.0.1"}}]);
/// assert_eq!(pluck(&hosts, ["dns", "a.example"], None::<&str>).unwrap(), json!(["10.0.0.1"]));
/// ```
pub fn pluck<'v, 'k>(
    items: &Value,
    value_path: impl Into<PathInput<'v>>,
    key_path: Option<impl Into<PathInput<'k>>>,
) -> Result<Value, DotPathError> {
    ensure_container(items)?;
    let value_path = value_path.into();
    let values = entries(items).map(|(_, item)| item);

    let key_path: Option<PathInput<'k>> = key_path.map(Into::into);
    let Some(key_path) = key_path else {
        let plucked = values.map(|item| lookup(item, &value_path)).collect();
        return Ok(Value::Array(plucked));
    };

    let mut plucked = Map::new();
    for item in values {
        let value = lookup(item, &value_path);
        let key = key_string(&lookup(item, &key_path));
        plucked.insert(key, value);
    }
    Ok(Value::Object(plucked))
}

fn lookup(item: &Value, path: &PathInput<'_>) -> Value {
    match path {
        PathInput::Dotted(path) => get(item, Some(*path), Fallback::null()).into_owned(),
        PathInput::Segments(segments) if segments.is_empty() => item.clone(),
        PathInput::Segments(segments) => walk(item, segments).cloned().unwrap_or(Value::Null),
    }
}

/// Flatten nested containers into one array, `depth` levels deep.
///
/// At depth 1 a container item contributes its values as they are. Deeper
/// levels recurse with `depth - 1`. A depth of zero or below never reaches
/// 1, so it flattens all the way down.
///
/// # Example
///
/// ```
/// use dot_path::flatten;
/// use serde_json::json;
///
/// let nested = json!([[1, 2], [3, [4, 5]]]);
/// assert_eq!(flatten(&nested, 1).unwrap(), vec![json!(1), json!(2), json!(3), json!([4, 5])]);
/// assert_eq!(flatten(&nested, 2).unwrap(), vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);
/// ```
pub fn flatten(items: &Value, depth: i64) -> Result<Vec<Value>, DotPathError> {
    ensure_container(items)?;
    let mut out = Vec::new();
    flatten_into(items, depth, &mut out);
    Ok(out)
}

fn flatten_into(container: &Value, depth: i64, out: &mut Vec<Value>) {
    for (_, item) in entries(container) {
        if !item.is_accessible() {
            out.push(item.clone());
        } else if depth == 1 {
            out.extend(entries(item).map(|(_, v)| v.clone()));
        } else {
            flatten_into(item, depth.saturating_sub(1), out);
        }
    }
}

/// Merge every container item into one container, skipping scalars.
///
/// Array items and object entries under index keys are appended; named
/// entries overwrite an earlier entry with the same name in place. The
/// result is an array unless a named entry was merged.
///
/// # Example
///
/// ```
/// use dot_path::collapse;
/// use serde_json::json;
///
/// assert_eq!(collapse(&json!([[1, 2], "skip", [3]])).unwrap(), json!([1, 2, 3]));
/// assert_eq!(
///     collapse(&json!([{"a": 1}, {"a": 2, "b": 3}])).unwrap(),
///     json!({"a": 2, "b": 3}),
/// );
/// ```
pub fn collapse(items: &Value) -> Result<Value, DotPathError> {
    ensure_container(items)?;
    let mut merged = Map::new();
    let mut next_index = 0usize;
    let mut named = false;

    for (_, item) in entries(items) {
        for (key, value) in entries(item) {
            match key {
                KeyRef::Name(name) if !is_valid_index(name) => {
                    named = true;
                    merged.insert(name.to_string(), value.clone());
                }
                _ => {
                    merged.insert(next_index.to_string(), value.clone());
                    next_index += 1;
                }
            }
        }
    }

    if named {
        Ok(Value::Object(merged))
    } else {
        Ok(Value::Array(merged.into_iter().map(|(_, v)| v).collect()))
    }
}
