use serde_json::Value;

/// The value returned when a lookup does not resolve.
///
/// A deferred fallback is only run when a lookup actually misses, and at
/// most once: resolving consumes it.
///
/// # Examples
///
/// ```
/// use dot_path::{get, Fallback};
/// use serde_json::json;
///
/// let doc = json!({});
/// assert_eq!(*get(&doc, Some("a.b"), Fallback::value("D")), json!("D"));
/// assert_eq!(*get(&doc, Some("a.b"), Fallback::deferred(|| json!("D"))), json!("D"));
/// ```
pub enum Fallback<F = fn() -> Value> {
    Value(Value),
    Deferred(F),
}

impl Fallback {
    pub fn value(value: impl Into<Value>) -> Self {
        Fallback::Value(value.into())
    }

    /// Fall back to `null`.
    pub fn null() -> Self {
        Fallback::Value(Value::Null)
    }
}

impl<F> Fallback<F>
where
    F: FnOnce() -> Value,
{
    pub fn deferred(f: F) -> Self {
        Fallback::Deferred(f)
    }

    /// Produce the fallback value, running the computation if deferred.
    pub fn resolve(self) -> Value {
        match self {
            Fallback::Value(value) => value,
            Fallback::Deferred(f) => f(),
        }
    }
}

impl Default for Fallback {
    fn default() -> Self {
        Fallback::null()
    }
}

impl From<Value> for Fallback {
    fn from(value: Value) -> Self {
        Fallback::Value(value)
    }
}
