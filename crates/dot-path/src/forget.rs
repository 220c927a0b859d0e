use serde_json::Value;
use tracing::trace;

use crate::probe::Keyed;
use crate::types::Keys;
use crate::util::split_path;

/// Remove one or many dot-paths from a container.
///
/// Each key is handled on its own, starting from the root:
/// - a top-level key matching verbatim is removed directly;
/// - otherwise the segments are walked, and every intermediate must exist
///   and be a container. A key that does not resolve is skipped.
///
/// # Example
///
/// ```
/// use dot_path::forget;
/// use serde_json::json;
///
/// let mut doc = json!({"a": {"b": 1, "c": 2}, "x.y": 3});
/// forget(&mut doc, ["a.b", "x.y", "missing.key"]);
/// assert_eq!(doc, json!({"a": {"c": 2}}));
/// ```
pub fn forget<'k, C>(container: &mut C, keys: impl Into<Keys<'k>>)
where
    C: Keyed + ?Sized,
{
    let keys = keys.into();
    for key in keys.iter() {
        if container.contains_key(key) {
            container.remove_key(key);
            continue;
        }
        if forget_path(container, key).is_none() {
            trace!(key, "path does not resolve, nothing to forget");
        }
    }
}

fn forget_path<C>(container: &mut C, key: &str) -> Option<Value>
where
    C: Keyed + ?Sized,
{
    let segments = split_path(key);
    let (last, parents) = segments.split_last()?;
    let (first, rest) = parents.split_first()?;

    let mut current = container.get_key_mut(first).filter(|v| v.is_accessible())?;
    for segment in rest {
        current = current.get_key_mut(segment).filter(|v| v.is_accessible())?;
    }
    current.remove_key(last)
}
