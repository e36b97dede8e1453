//! # Calc Expression Language - Abstract Syntax Tree
//!
//! This module defines the tokens and the Abstract Syntax Tree (AST) of the
//! calc expression language, a single-expression formula language meant to be
//! embedded in hosts that need runtime-configurable conditions or computed
//! values.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, identifiers, operations)
//! - **[operators]** - Binary operators (comparison, arithmetic, logical)
//!
//! ## Quick Start
//!
//! ```text
//! price * qty > 100 && region == 'EU'
//! ```
//!
//! ## Precedence
//!
//! From loosest to tightest:
//!
//! | Tier | Operators                  | Associativity |
//! |------|----------------------------|---------------|
//! | 6    | `? :`                      | right         |
//! | 5    | `&&` `\|\|`                | left          |
//! | 5    | `==` `!=` `<` `<=` `>` `>=`| left          |
//! | 4    | `+` `-`                    | left          |
//! | 3    | `*` `/`                    | left          |
//! | 2    | unary `-`                  | prefix        |
//! | 1    | `**`                       | right         |
//! | 0    | literals, names, `( )`     |               |
//!
//! Comparisons bind tighter than the logical operators, so
//! `a < b && c != d` groups as `(a < b) && (c != d)`, while `a < b < c`
//! groups as `(a < b) < c`.
//!
//! ### Type System
//!
//! There is no implicit coercion: both operands of a binary operator must
//! evaluate to the same kind of value (number, boolean, text).
//!
//! ## Examples
//!
//! ```text
//! 2 ** 3 ** 2              // 512
//! 16 + 64 * 32             // 2064
//! 'a' + 'b'                // "ab"
//! total > 100 ? 'bulk' : 'retail'
//! ```
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::Expr;
pub use operators::BinOp;
pub use tokens::Token;
