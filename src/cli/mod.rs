//! CLI support for calc-lang
//!
//! Provides programmatic access to the `calc` command so hosts and tests can
//! run it without spawning the binary.

mod check;
mod convert;

pub use check::{CheckOptions, CheckResult, execute_check, render_ast};
pub use convert::{parse_binding, value_to_json};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Parser error
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    /// Evaluation error
    #[error("Evaluation error: {0}")]
    Eval(#[from] crate::EvalError),

    /// JSON parsing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Variables were given as JSON but not as an object
    #[error("Variables must be a JSON object, got {0}")]
    VarsNotObject(String),

    /// A `--var` flag without `=`
    #[error("Invalid binding '{0}': expected NAME=VALUE")]
    InvalidBinding(String),
}
