use thiserror::Error;

use crate::{
    ast::{BinOp, Expr},
    lookup::Lookup,
    value::Value,
};

/// Errors that can occur during expression evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Operand types differ, or the operator does not accept this type
    #[error("Type error: {0}")]
    TypeError(String),

    /// The lookup does not know this name
    #[error("Undefined identifier: {0}")]
    UndefinedIdentifier(String),
}

/// Tree-walking evaluator.
///
/// Borrows the host lookup for the duration of the walk and never mutates
/// it or the tree, so one parsed [`Expr`] can be evaluated against many
/// lookups.
///
/// # Examples
///
/// ```
/// use calc_lang::{Evaluator, Value, parse};
/// use std::collections::HashMap;
///
/// let expr = parse("price * qty").unwrap().unwrap();
///
/// let mut vars = HashMap::new();
/// vars.insert("price".to_string(), 2.5);
/// vars.insert("qty".to_string(), 4.0);
///
/// let result = Evaluator::new(&vars).eval(&expr).unwrap();
/// assert_eq!(result, Value::Number(10.0));
/// ```
pub struct Evaluator<'a, L: Lookup + ?Sized> {
    lookup: &'a L,
}

impl<'a, L: Lookup + ?Sized> Evaluator<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Evaluator { lookup }
    }

    /// Evaluates `expr`, returning the first error met during the walk.
    pub fn eval(&self, expr: &Expr) -> Result<Value, EvalError> {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Text(s) => Ok(Value::Text(s.clone())),
            Expr::Identifier(name) => self
                .lookup
                .get_value(name)
                .ok_or_else(|| EvalError::UndefinedIdentifier(name.clone())),
            Expr::Negate(operand) => match self.eval(operand)? {
                Value::Number(n) => Ok(Value::Number(-n)),
                other => Err(EvalError::TypeError(format!(
                    "Cannot negate {}",
                    other.type_name()
                ))),
            },
            Expr::BinaryOp { op, left, right } => {
                // Both sides are always evaluated, `&&` and `||` included;
                // only an error on the left skips the right.
                let left_val = self.eval(left)?;
                let right_val = self.eval(right)?;
                apply_binop(*op, &left_val, &right_val)
            }
            Expr::Ternary {
                condition,
                if_true,
                if_false,
            } => match self.eval(condition)? {
                Value::Boolean(true) => self.eval(if_true),
                Value::Boolean(false) => self.eval(if_false),
                other => Err(EvalError::TypeError(format!(
                    "Condition must be boolean, got {}",
                    other.type_name()
                ))),
            },
        }
    }
}

fn same_variant(left: &Value, right: &Value) -> bool {
    matches!(
        (left, right),
        (Value::Number(_), Value::Number(_))
            | (Value::Boolean(_), Value::Boolean(_))
            | (Value::Text(_), Value::Text(_))
            | (Value::Opaque(_), Value::Opaque(_))
    )
}

fn unsupported(op: BinOp, value: &Value) -> EvalError {
    EvalError::TypeError(format!(
        "Operator '{}' is not defined for {} values",
        op,
        value.type_name()
    ))
}

fn apply_binop(op: BinOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    if !same_variant(left, right) {
        return Err(EvalError::TypeError(format!(
            "Cannot apply '{}' to {} and {}",
            op,
            left.type_name(),
            right.type_name()
        )));
    }

    match op {
        // Operands share a variant here, so the derived equality is exact
        BinOp::Equal => Ok(Value::Boolean(left == right)),
        BinOp::NotEqual => Ok(Value::Boolean(left != right)),
        BinOp::LessThan | BinOp::LessEqual | BinOp::GreaterThan | BinOp::GreaterEqual => {
            let ordering = match (left, right) {
                (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
                (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
                _ => return Err(unsupported(op, left)),
            };
            // NaN compares false against everything
            let result = ordering.is_some_and(|ord| match op {
                BinOp::LessThan => ord.is_lt(),
                BinOp::LessEqual => ord.is_le(),
                BinOp::GreaterThan => ord.is_gt(),
                _ => ord.is_ge(),
            });
            Ok(Value::Boolean(result))
        }
        BinOp::And | BinOp::Or => match (left, right) {
            (Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(if op == BinOp::And {
                *a && *b
            } else {
                *a || *b
            })),
            _ => Err(unsupported(op, left)),
        },
        BinOp::Add => match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::Text(a), Value::Text(b)) => Ok(Value::Text(format!("{}{}", a, b))),
            _ => Err(unsupported(op, left)),
        },
        BinOp::Subtract | BinOp::Multiply | BinOp::Divide | BinOp::Power => {
            let (Value::Number(a), Value::Number(b)) = (left, right) else {
                return Err(unsupported(op, left));
            };
            // Non-finite results follow IEEE 754; nothing is trapped
            let result = match op {
                BinOp::Subtract => a - b,
                BinOp::Multiply => a * b,
                BinOp::Divide => a / b,
                _ => a.powf(*b),
            };
            Ok(Value::Number(result))
        }
    }
}
