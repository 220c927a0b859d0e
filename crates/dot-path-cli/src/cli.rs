//! Argument definitions for the `dot-path` binary.
//!
//! Each subcommand maps to exactly one library operation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Query and edit a JSON document by dot-path
#[derive(Parser, Debug)]
#[command(name = "dot-path")]
#[command(version)]
pub struct Cli {
    /// Read the document from this file instead of stdin
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the value at a path (the whole document when no path is given)
    Get(GetArgs),
    /// Set the value at a path, creating missing levels
    Set(SetArgs),
    /// Remove one or more paths
    Forget(PathsArgs),
    /// Print whether every path exists
    Has(PathsArgs),
    /// Print whether at least one path exists
    HasAny(PathsArgs),
    /// Pluck a value out of every item
    Pluck(PluckArgs),
    /// Flatten nested arrays and objects
    Flatten(FlattenArgs),
    /// Merge every array or object item into one
    Collapse,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    pub path: Option<String>,

    /// Value printed when the path does not resolve (JSON, or a bare string)
    #[arg(short, long)]
    pub default: Option<String>,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    pub path: String,

    /// New value (JSON, or a bare string)
    pub value: String,
}

#[derive(Args, Debug)]
pub struct PathsArgs {
    #[arg(num_args = 0..)]
    pub paths: Vec<String>,
}

#[derive(Args, Debug)]
pub struct PluckArgs {
    pub value_path: String,

    /// Key the output by the value at this path
    #[arg(short, long)]
    pub key: Option<String>,
}

#[derive(Args, Debug)]
pub struct FlattenArgs {
    /// Levels to flatten; zero or below flattens all the way
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub depth: i64,
}
