use std::fmt;

use crate::ast::BinOp;

/// Abstract Syntax Tree node representing a parsed expression.
///
/// Each node exclusively owns its children; the tree is never mutated after
/// the parser builds it and may be evaluated any number of times.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Literals
    /// Literal number
    ///
    /// # Example
    /// ```text
    /// 42
    /// ```
    Number(f64),

    /// Text literal
    ///
    /// # Example
    /// ```text
    /// 'hello'
    /// ```
    Text(String),

    // References
    /// Variable resolved through the host lookup at evaluation time
    ///
    /// # Example
    /// ```text
    /// price
    /// ```
    Identifier(String),

    // Operations
    /// Arithmetic negation (`-x`)
    Negate(Box<Expr>),

    /// Binary operation (arithmetic, comparison, logical)
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Conditional expression
    ///
    /// Only the selected branch is evaluated.
    ///
    /// # Example
    /// ```text
    /// qty > 10 ? price * 0.9 : price
    /// ```
    Ternary {
        condition: Box<Expr>,
        if_true: Box<Expr>,
        if_false: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn ternary(condition: Expr, if_true: Expr, if_false: Expr) -> Self {
        Expr::Ternary {
            condition: Box::new(condition),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }
}

/// Prints the tree fully parenthesized so that operator grouping is visible
/// and the output parses back to the same tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) if n.is_nan() => f.write_str("(0 / 0)"),
            // No literal spells infinity; an integer past f64::MAX rounds to it
            Expr::Number(n) if n.is_infinite() => {
                let sign = if n.is_sign_negative() { "-" } else { "" };
                write!(f, "{}1{}", sign, "0".repeat(309))
            }
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Text(s) => {
                let quote = if s.contains('\'') { '"' } else { '\'' };
                write!(f, "{}{}{}", quote, s, quote)
            }
            Expr::Identifier(name) => f.write_str(name),
            // `--x` does not parse; the operand of a minus is a power-tier term
            Expr::Negate(operand) if matches!(**operand, Expr::Negate(_)) => {
                write!(f, "-({})", operand)
            }
            Expr::Negate(operand) => write!(f, "-{}", operand),
            Expr::BinaryOp { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Expr::Ternary {
                condition,
                if_true,
                if_false,
            } => write!(f, "({} ? {} : {})", condition, if_true, if_false),
        }
    }
}
