//! Evaluate calc expressions with variables given as JSON

use super::{CliError, parse_binding, value_to_json};
use crate::{Evaluator, parse};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The expression to evaluate
    pub expression: String,
    /// JSON object holding the variables
    pub vars: Option<String>,
    /// `NAME=VALUE` bindings, applied over `vars`
    pub bindings: Vec<String>,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// The expression was empty
    Empty,
    /// Expression evaluated successfully with JSON output
    Success(serde_json::Value),
}

fn collect_vars(
    options: &CheckOptions,
) -> Result<serde_json::Map<String, serde_json::Value>, CliError> {
    let mut vars = match &options.vars {
        Some(json_str) => match serde_json::from_str::<serde_json::Value>(json_str)? {
            serde_json::Value::Object(map) => map,
            other => return Err(CliError::VarsNotObject(other.to_string())),
        },
        None => serde_json::Map::new(),
    };

    for binding in &options.bindings {
        let (name, value) = parse_binding(binding)?;
        vars.insert(name, value);
    }
    Ok(vars)
}

/// Execute a calc check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let expr = parse(&options.expression)?;

    if options.syntax_only {
        return Ok(match expr {
            Some(_) => CheckResult::SyntaxValid,
            None => CheckResult::Empty,
        });
    }

    let Some(expr) = expr else {
        return Ok(CheckResult::Empty);
    };

    let vars = collect_vars(options)?;
    let result = Evaluator::new(&vars).eval(&expr)?;
    Ok(CheckResult::Success(value_to_json(result)))
}

/// Parse an expression and print its fully parenthesized form.
pub fn render_ast(expression: &str) -> Result<Option<String>, CliError> {
    Ok(parse(expression)?.map(|expr| expr.to_string()))
}
