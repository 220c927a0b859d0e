use std::borrow::Cow;

use serde_json::Value;

use crate::fallback::Fallback;
use crate::probe::Keyed;
use crate::util::split_path;
use crate::DELIMITER;

/// Get a value from a container by dot-path.
///
/// - `None` as the path returns the whole container.
/// - A key that literally contains the delimiter wins over walking the
///   segments.
/// - Any miss along the way resolves `default`. Nothing is raised for
///   missing data.
///
/// # Example
///
/// ```
/// use dot_path::{get, Fallback};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": [10, 20]}, "x.y": 1});
/// assert_eq!(*get(&doc, Some("a.b.1"), Fallback::null()), json!(20));
/// assert_eq!(*get(&doc, Some("x.y"), Fallback::null()), json!(1));
/// assert_eq!(*get(&doc, Some("a.c"), Fallback::value(0)), json!(0));
/// ```
pub fn get<'a, C, F>(container: &'a C, path: Option<&str>, default: Fallback<F>) -> Cow<'a, Value>
where
    C: Keyed + ?Sized,
    F: FnOnce() -> Value,
{
    if !container.is_accessible() {
        return Cow::Owned(default.resolve());
    }
    let Some(path) = path else {
        return container.to_value();
    };
    if let Some(value) = container.get_key(path) {
        return Cow::Borrowed(value);
    }
    if !path.contains(DELIMITER) {
        return Cow::Owned(default.resolve());
    }
    match walk(container, &split_path(path)) {
        Some(value) => Cow::Borrowed(value),
        None => Cow::Owned(default.resolve()),
    }
}

/// Walk `segments` from `container`, descending one key at a time.
///
/// Returns `None` as soon as a segment is missing or the current value is
/// not a container.
pub(crate) fn walk<'a, C>(container: &'a C, segments: &[&str]) -> Option<&'a Value>
where
    C: Keyed + ?Sized,
{
    let (first, rest) = segments.split_first()?;
    if !container.is_accessible() {
        return None;
    }
    let mut current = container.get_key(first)?;
    for segment in rest {
        current = current.get_key(segment)?;
    }
    Some(current)
}

/// Get a mutable reference to a value by dot-path.
///
/// Same resolution rules as [`get`], without a fallback.
pub fn get_mut<'a, C>(container: &'a mut C, path: &str) -> Option<&'a mut Value>
where
    C: Keyed + ?Sized,
{
    if container.contains_key(path) {
        return container.get_key_mut(path);
    }
    let segments = split_path(path);
    if segments.len() == 1 {
        return None;
    }
    let (first, rest) = segments.split_first()?;
    let mut current = container.get_key_mut(first)?;
    for segment in rest {
        current = current.get_key_mut(segment)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    #[test]
    fn test_get_whole_container() {
        let doc = json!({"a": 1});
        assert_eq!(*get(&doc, None, Fallback::null()), doc);
        assert!(matches!(get(&doc, None, Fallback::null()), Cow::Borrowed(_)));
    }

    #[test]
    fn test_get_nested() {
        let doc = json!({"foo": {"bar": {"baz": "qux"}}});
        assert_eq!(*get(&doc, Some("foo.bar.baz"), Fallback::null()), json!("qux"));
        assert_eq!(*get(&doc, Some("foo.bar"), Fallback::null()), json!({"baz": "qux"}));
    }

    #[test]
    fn test_get_explicit_null_is_not_a_miss() {
        let doc = json!({"a": {"b": null}});
        assert_eq!(*get(&doc, Some("a.b"), Fallback::value("D")), Value::Null);
    }

    #[test]
    fn test_get_verbatim_key_wins() {
        let doc = json!({"a.b": "flat", "a": {"b": "nested"}});
        assert_eq!(*get(&doc, Some("a.b"), Fallback::null()), json!("flat"));
    }

    #[test]
    fn test_get_miss_uses_default() {
        let doc = json!({"a": {"b": 1}});
        assert_eq!(*get(&doc, Some("a.b.c"), Fallback::value("D")), json!("D"));
        assert_eq!(*get(&doc, Some("z"), Fallback::value("D")), json!("D"));
        assert_eq!(*get(&doc, Some(""), Fallback::value("D")), json!("D"));
    }

    #[test]
    fn test_get_non_container_root() {
        let doc = json!("scalar");
        assert_eq!(*get(&doc, None, Fallback::value("D")), json!("D"));
    }

    #[test]
    fn test_get_deferred_default_not_run_on_hit() {
        let doc = json!({"a": 1});
        let value = get(&doc, Some("a"), Fallback::deferred(|| -> Value { panic!("must not run") }));
        assert_eq!(*value, json!(1));
    }

    #[test]
    fn test_get_array_index() {
        let doc = json!({"list": [{"id": 1}, {"id": 2}]});
        assert_eq!(*get(&doc, Some("list.1.id"), Fallback::null()), json!(2));
        assert_eq!(*get(&doc, Some("list.01.id"), Fallback::value(0)), json!(0));
    }

    #[test]
    fn test_get_from_map_root() {
        let mut map = Map::new();
        map.insert("a".to_string(), json!({"b": true}));
        assert_eq!(*get(&map, Some("a.b"), Fallback::null()), json!(true));
        assert_eq!(*get(&map, None, Fallback::null()), json!({"a": {"b": true}}));
    }

    #[test]
    fn test_get_mut() {
        let mut doc = json!({"a": {"b": [1, 2]}});
        if let Some(v) = get_mut(&mut doc, "a.b.0") {
            *v = json!(9);
        }
        assert_eq!(doc, json!({"a": {"b": [9, 2]}}));
        assert!(get_mut(&mut doc, "a.c").is_none());
        assert!(get_mut(&mut doc, "missing").is_none());
    }
}
