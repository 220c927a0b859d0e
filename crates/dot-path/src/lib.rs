//! Dot-notation access to nested JSON containers.
//!
//! A dot-path such as `"a.b.0"` addresses a value inside nested objects and
//! arrays. The accessors read, write, test and remove values by dot-path,
//! and never fail on missing data: a miss is a fallback value, `false`, or a
//! no-op.
//!
//! # Example
//!
//! ```
//! use dot_path::{forget, get, has, set, Fallback};
//! use serde_json::json;
//!
//! let mut doc = json!({});
//! set(&mut doc, Some("user.name"), json!("ada"));
//! assert_eq!(doc, json!({"user": {"name": "ada"}}));
//!
//! assert_eq!(*get(&doc, Some("user.name"), Fallback::null()), json!("ada"));
//! assert_eq!(*get(&doc, Some("user.age"), Fallback::value(36)), json!(36));
//!
//! forget(&mut doc, "user.name");
//! assert!(!has(&doc, "user.name"));
//! ```
//!
//! A key that itself contains a `.` is only reachable at the top level, where
//! a verbatim match wins over walking the segments.

use thiserror::Error;

pub mod collection;
pub mod dot;
pub mod fallback;
pub mod forget;
pub mod get;
pub mod has;
pub mod ops;
pub mod probe;
pub mod set;
pub mod types;
pub mod util;

pub use collection::{collapse, flatten, pluck};
pub use dot::Dot;
pub use fallback::Fallback;
pub use forget::forget;
pub use get::{get, get_mut};
pub use has::{has, has_any};
pub use ops::{
    accept_values, append, contains, except, first, first_where, last, last_where, only, prepend,
    slice, wrap,
};
pub use probe::{entries, exists, is_accessible, Entries, Keyed};
pub use set::set;
pub use types::{KeyRef, Keys, Path, PathInput};
pub use util::{is_valid_index, split_path};

/// Separator between the segments of a dot-path.
pub const DELIMITER: char = '.';

#[derive(Debug, Error)]
pub enum DotPathError {
    #[error("expected an array or object, found {found}")]
    NotIterable { found: &'static str },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
