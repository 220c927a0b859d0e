use crate::get::walk;
use crate::probe::Keyed;
use crate::types::Keys;
use crate::util::split_path;

/// Check that every key resolves in the container.
///
/// A key resolves when it exists verbatim at the top level or when its
/// segment walk reaches a value. An empty container or an empty key set is
/// always `false`.
///
/// # Example
///
/// ```
/// use dot_path::has;
/// use serde_json::json;
///
/// let doc = json!({"a": 1, "b": {"c": null}});
/// assert!(has(&doc, ["a", "b.c"]));
/// assert!(!has(&doc, ["a", "z"]));
/// ```
pub fn has<'k, C>(container: &C, keys: impl Into<Keys<'k>>) -> bool
where
    C: Keyed + ?Sized,
{
    let keys = keys.into();
    if container.is_falsy() || keys.is_empty() {
        return false;
    }
    let found = keys.iter().all(|key| resolves(container, key));
    found
}

/// Check that at least one key resolves in the container.
///
/// ```
/// use dot_path::has_any;
/// use serde_json::json;
///
/// let doc = json!({"a": 1});
/// assert!(has_any(&doc, ["a", "b"]));
/// assert!(!has_any(&doc, None::<&str>));
/// ```
pub fn has_any<'k, C>(container: &C, keys: impl Into<Keys<'k>>) -> bool
where
    C: Keyed + ?Sized,
{
    let keys = keys.into();
    if keys.is_empty() || container.is_falsy() {
        return false;
    }
    let found = keys.iter().any(|key| has(container, key));
    found
}

fn resolves<C>(container: &C, key: &str) -> bool
where
    C: Keyed + ?Sized,
{
    container.contains_key(key) || walk(container, &split_path(key)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_has_is_conjunctive() {
        let doc = json!({"a": 1});
        assert!(!has(&doc, ["a", "b"]));
        assert!(has(&doc, ["a"]));
        assert!(has(&doc, "a"));
    }

    #[test]
    fn test_has_any_is_disjunctive() {
        let doc = json!({"a": 1});
        assert!(has_any(&doc, ["a", "b"]));
        assert!(!has_any(&doc, ["x", "y"]));
    }

    #[test]
    fn test_has_nested_and_verbatim() {
        let doc = json!({"a": {"b": {"c": 0}}, "x.y": true});
        assert!(has(&doc, "a.b.c"));
        assert!(has(&doc, "x.y"));
        assert!(!has(&doc, "a.b.c.d"));
        assert!(!has(&doc, "a.c"));
    }

    #[test]
    fn test_has_null_value_is_present() {
        let doc = json!({"a": {"b": null}});
        assert!(has(&doc, "a.b"));
    }

    #[test]
    fn test_has_empty_inputs() {
        assert!(!has(&json!({}), "a"));
        assert!(!has(&json!(null), "a"));
        assert!(!has(&json!({"a": 1}), Vec::<&str>::new()));
        assert!(!has_any(&json!({}), "a"));
        assert!(!has_any(&json!({"a": 1}), None::<&str>));
        assert!(!has_any(&json!({"a": 1}), Vec::<String>::new()));
    }

    #[test]
    fn test_has_on_sequence() {
        let doc = json!([{"id": 1}]);
        assert!(has(&doc, "0.id"));
        assert!(!has(&doc, "1.id"));
    }

    #[test]
    fn test_has_with_owned_keys() {
        let doc = json!({"a": {"b": 1}, "c": 2});
        assert!(has(&doc, vec!["a.b".to_string(), "c".to_string()]));
        assert!(!has(&doc, vec!["a.b".to_string(), "d".to_string()]));
        assert!(has_any(&doc, vec!["d".to_string(), "a.b".to_string()]));
        assert!(!has_any(&doc, vec!["d".to_string(), "a.c".to_string()]));
    }

    #[test]
    fn test_has_on_scalar_root() {
        assert!(!has(&json!("text"), "0"));
    }
}
