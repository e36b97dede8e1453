//! # calc-lang
//!
//! An embeddable expression language. A formula such as
//! `price * qty > 100 && region == 'EU'` is parsed once into an immutable
//! [`Expr`] tree and evaluated against a host-supplied [`Lookup`] that
//! resolves variable names.
//!
//! ```
//! use calc_lang::{Value, evaluate, evaluate_with};
//! use std::collections::HashMap;
//!
//! assert_eq!(evaluate("2 ** 3 ** 2").unwrap(), Some(Value::Number(512.0)));
//! assert_eq!(evaluate("").unwrap(), None);
//!
//! let mut vars = HashMap::new();
//! vars.insert("qty".to_string(), 12_i32);
//! let result = evaluate_with("qty > 10 ? 'bulk' : 'retail'", &vars).unwrap();
//! assert_eq!(result, Some(Value::Text("bulk".to_string())));
//! ```
pub mod ast;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod lookup;
pub mod parser;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{BinOp, Expr, Token};
pub use error::{Error, ErrorKind};
pub use evaluator::{EvalError, Evaluator};
pub use lexer::{LexError, Lexer};
pub use lookup::Lookup;
pub use parser::{MAX_DEPTH, ParseError, Parser};
pub use value::Value;

/// Parses `source` into an expression tree.
///
/// Returns `Ok(None)` for input that contains no tokens.
pub fn parse(source: &str) -> Result<Option<Expr>, ParseError> {
    Parser::new(Lexer::new(source))?.parse()
}

/// Parses and evaluates `source` with no variables defined.
pub fn evaluate(source: &str) -> error::Result<Option<Value>> {
    evaluate_with(source, &())
}

/// Parses and evaluates `source`, resolving identifiers through `lookup`.
///
/// Parsing completes before evaluation starts, so a malformed expression
/// never touches the lookup.
pub fn evaluate_with<L: Lookup + ?Sized>(source: &str, lookup: &L) -> error::Result<Option<Value>> {
    match parse(source)? {
        Some(expr) => Ok(Some(Evaluator::new(lookup).eval(&expr)?)),
        None => Ok(None),
    }
}
