//! `dot-path` command logic.
//!
//! The binary in `src/bin/dot_path.rs` parses arguments, reads the document
//! and hands it to [`run`]; everything testable lives here.

pub mod cli;

use dot_path::{collapse, flatten, forget, get, has, has_any, pluck, set, DotPathError, Fallback};
use serde_json::Value;
use thiserror::Error;

use crate::cli::Command;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    DotPath(#[from] DotPathError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Parse a command-line value as JSON, or take it as a string.
pub fn parse_value(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Parse the input document.
pub fn parse_document(text: &str) -> Result<Value, CliError> {
    Ok(serde_json::from_str(text.trim())?)
}

/// Run one command against a document and return the value to print.
pub fn run(command: &Command, mut doc: Value) -> Result<Value, CliError> {
    tracing::debug!(?command, "running command");
    let out = match command {
        Command::Get(args) => {
            let default = match &args.default {
                Some(text) => Fallback::value(parse_value(text)),
                None => Fallback::null(),
            };
            get(&doc, args.path.as_deref(), default).into_owned()
        }
        Command::Set(args) => {
            set(&mut doc, Some(args.path.as_str()), parse_value(&args.value));
            doc
        }
        Command::Forget(args) => {
            forget(&mut doc, args.paths.as_slice());
            doc
        }
        Command::Has(args) => Value::Bool(has(&doc, args.paths.as_slice())),
        Command::HasAny(args) => Value::Bool(has_any(&doc, args.paths.as_slice())),
        Command::Pluck(args) => pluck(&doc, &args.value_path, args.key.as_deref())?,
        Command::Flatten(args) => Value::Array(flatten(&doc, args.depth)?),
        Command::Collapse => collapse(&doc)?,
    };
    Ok(out)
}

/// Render a result for stdout.
pub fn render(value: &Value, pretty: bool) -> Result<String, CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, FlattenArgs, GetArgs, PathsArgs, PluckArgs, SetArgs};
    use clap::Parser;
    use serde_json::json;

    fn paths(paths: &[&str]) -> PathsArgs {
        PathsArgs {
            paths: paths.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("1"), json!(1));
        assert_eq!(parse_value(r#"{"a":true}"#), json!({"a": true}));
        assert_eq!(parse_value("plain text"), json!("plain text"));
    }

    #[test]
    fn test_get_with_default() {
        let doc = json!({"a": {"b": 1}});
        let hit = Command::Get(GetArgs {
            path: Some("a.b".into()),
            default: None,
        });
        assert_eq!(run(&hit, doc.clone()).unwrap(), json!(1));

        let miss = Command::Get(GetArgs {
            path: Some("a.z".into()),
            default: Some("fallback".into()),
        });
        assert_eq!(run(&miss, doc.clone()).unwrap(), json!("fallback"));

        let whole = Command::Get(GetArgs {
            path: None,
            default: None,
        });
        assert_eq!(run(&whole, doc.clone()).unwrap(), doc);
    }

    #[test]
    fn test_set_and_forget() {
        let set_cmd = Command::Set(SetArgs {
            path: "a.b.c".into(),
            value: "[1,2]".into(),
        });
        let doc = run(&set_cmd, json!({})).unwrap();
        assert_eq!(doc, json!({"a": {"b": {"c": [1, 2]}}}));

        let doc = run(&Command::Forget(paths(&["a.b.c", "x"])), doc).unwrap();
        assert_eq!(doc, json!({"a": {"b": {}}}));
    }

    #[test]
    fn test_has_commands() {
        let doc = json!({"a": 1});
        assert_eq!(run(&Command::Has(paths(&["a", "b"])), doc.clone()).unwrap(), json!(false));
        assert_eq!(run(&Command::HasAny(paths(&["a", "b"])), doc.clone()).unwrap(), json!(true));
        assert_eq!(run(&Command::HasAny(paths(&[])), doc).unwrap(), json!(false));
    }

    #[test]
    fn test_bulk_commands() {
        let users = json!([{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]);
        let pluck_cmd = Command::Pluck(PluckArgs {
            value_path: "name".into(),
            key: Some("id".into()),
        });
        assert_eq!(run(&pluck_cmd, users).unwrap(), json!({"1": "a", "2": "b"}));

        let flatten_cmd = Command::Flatten(FlattenArgs { depth: 0 });
        assert_eq!(run(&flatten_cmd, json!([[1, [2]], 3])).unwrap(), json!([1, 2, 3]));

        assert_eq!(run(&Command::Collapse, json!([[1], [2]])).unwrap(), json!([1, 2]));
        assert!(matches!(
            run(&Command::Collapse, json!(5)),
            Err(CliError::DotPath(DotPathError::NotIterable { .. }))
        ));
    }

    #[test]
    fn test_argument_parsing() {
        let cli = Cli::try_parse_from(["dot-path", "--pretty", "flatten", "--depth", "-1"]).unwrap();
        assert!(cli.pretty);
        assert!(matches!(cli.command, Command::Flatten(FlattenArgs { depth: -1 })));

        let cli = Cli::try_parse_from(["dot-path", "has-any", "a.b", "c"]).unwrap();
        match cli.command {
            Command::HasAny(args) => assert_eq!(args.paths, vec!["a.b", "c"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&json!({"a": [1]}), false).unwrap(), r#"{"a":[1]}"#);
        assert_eq!(render(&json!([1]), true).unwrap(), "[\n  1\n]");
        assert!(parse_document("{").is_err());
    }
}
