//! Unified error type for one parse-and-evaluate call.
use thiserror::Error;

use crate::{evaluator::EvalError, parser::ParseError};

/// The first failure met while parsing or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source could not be tokenized or parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// The tree could not be evaluated
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown character or unterminated text literal
    Lex,
    /// Unexpected or missing token
    Parse,
    /// Operand type mismatch or unsupported operand type
    Type,
    /// Name not known to the lookup
    UndefinedIdentifier,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(ParseError::Lex(_)) => ErrorKind::Lex,
            Error::Parse(_) => ErrorKind::Parse,
            Error::Eval(EvalError::TypeError(_)) => ErrorKind::Type,
            Error::Eval(EvalError::UndefinedIdentifier(_)) => ErrorKind::UndefinedIdentifier,
        }
    }
}

/// Result type for calc operations.
pub type Result<T> = std::result::Result<T, Error>;
