use std::mem;

use thiserror::Error;

use crate::{
    ast::{BinOp, Expr, Token},
    lexer::{LexError, Lexer},
};

/// Deepest tree the parser will build.
///
/// Parenthesized groups, nested ternary branches, `**` exponents, unary minus
/// and each left fold of a binary chain count one level. The limit keeps
/// parsing, evaluation and dropping of the tree within a thread's stack.
pub const MAX_DEPTH: usize = 128;

/// Errors raised while building the AST.
///
/// Parsing stops at the first error; no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The tokenizer could not produce the next token
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A term (number, text, identifier or group) was expected
    #[error("expected number | '(' but found {found} at position {position}")]
    ExpectedPrimary { found: String, position: usize },

    /// A parenthesized group was not closed
    #[error("expected ')' at position {position}")]
    ExpectedClosingParen { position: usize },

    /// A ternary true-branch was not followed by `:`
    #[error("expected ':' at position {position}")]
    ExpectedColon { position: usize },

    /// A complete expression was followed by more input
    #[error("failed to parse expression: unexpected {found} at position {position}")]
    TrailingInput { found: String, position: usize },

    /// The expression nests deeper than [`MAX_DEPTH`]
    #[error("expression nested too deeply at position {position}")]
    TooDeep { position: usize },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            ParseError::Lex(e) => e.position(),
            ParseError::ExpectedPrimary { position, .. }
            | ParseError::ExpectedClosingParen { position }
            | ParseError::ExpectedColon { position }
            | ParseError::TrailingInput { position, .. }
            | ParseError::TooDeep { position } => *position,
        }
    }
}

/// Recursive-descent parser, one method per precedence tier.
///
/// The parser holds only the current token and pulls the next one from the
/// lexer on demand.
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    current_position: usize,
    depth: usize,
}

impl Parser {
    /// Creates a parser and reads the first token.
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        let current_position = lexer.token_start();
        Ok(Parser {
            lexer,
            current_token,
            current_position,
            depth: 0,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        self.current_position = self.lexer.token_start();
        Ok(())
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::TooDeep {
                position: self.current_position,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    /// Parse primary expressions (atoms): numbers, text, identifiers, '(' ')'
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Number(n) => {
                self.advance()?;
                Ok(Expr::Number(n))
            }
            Token::Text(s) => {
                self.advance()?;
                Ok(Expr::Text(s))
            }
            Token::Identifier(name) => {
                self.advance()?;
                Ok(Expr::Identifier(name))
            }
            Token::LParen => {
                self.enter()?;
                self.advance()?;
                let expr = self.parse_expression()?;
                if !self.check(&Token::RParen) {
                    return Err(ParseError::ExpectedClosingParen {
                        position: self.current_position,
                    });
                }
                self.advance()?;
                self.leave();
                Ok(expr)
            }
            token => Err(ParseError::ExpectedPrimary {
                found: token.describe(),
                position: self.current_position,
            }),
        }
    }

    /// `a ** b ** c` groups as `a ** (b ** c)`
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_primary()?;

        if self.check(&Token::StarStar) {
            self.enter()?;
            self.advance()?;
            let exponent = self.parse_power()?;
            self.leave();
            return Ok(Expr::binary(BinOp::Power, base, exponent));
        }
        Ok(base)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.check(&Token::Minus) {
            self.enter()?;
            self.advance()?;
            let operand = self.parse_power()?;
            self.leave();
            return Ok(Expr::Negate(Box::new(operand)));
        }
        self.parse_power()
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        // Each fold deepens the left spine
        let base = self.depth;

        loop {
            let op = match &self.current_token {
                Token::Star => BinOp::Multiply,
                Token::Slash => BinOp::Divide,
                _ => break,
            };

            self.enter()?;
            self.advance()?;
            let right = self.parse_unary()?;
            left = Expr::binary(op, left, right);
        }
        self.depth = base;
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        // Each fold deepens the left spine
        let base = self.depth;

        loop {
            let op = match &self.current_token {
                Token::Plus => BinOp::Add,
                Token::Minus => BinOp::Subtract,
                _ => break,
            };

            self.enter()?;
            self.advance()?;
            let right = self.parse_multiplicative()?;
            left = Expr::binary(op, left, right);
        }
        self.depth = base;
        Ok(left)
    }

    /// Left-associative: `a < b < c` is `(a < b) < c`.
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        // Each fold deepens the left spine
        let base = self.depth;

        loop {
            let op = match &self.current_token {
                Token::EqEq => BinOp::Equal,
                Token::NotEq => BinOp::NotEqual,
                Token::Lt => BinOp::LessThan,
                Token::Gt => BinOp::GreaterThan,
                Token::LtEq => BinOp::LessEqual,
                Token::GtEq => BinOp::GreaterEqual,
                _ => break,
            };

            self.enter()?;
            self.advance()?;
            let right = self.parse_additive()?;
            left = Expr::binary(op, left, right);
        }
        self.depth = base;
        Ok(left)
    }

    /// `&&` and `||` share one level and fold left over whole comparisons.
    fn parse_logical(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;
        // Each fold deepens the left spine
        let base = self.depth;

        loop {
            let op = match &self.current_token {
                Token::AndAnd => BinOp::And,
                Token::OrOr => BinOp::Or,
                _ => break,
            };

            self.enter()?;
            self.advance()?;
            let right = self.parse_comparison()?;
            left = Expr::binary(op, left, right);
        }
        self.depth = base;
        Ok(left)
    }

    fn parse_ternary(&mut self) -> Result<Expr, ParseError> {
        let condition = self.parse_logical()?;

        if !self.check(&Token::Question) {
            return Ok(condition);
        }
        self.enter()?;
        self.advance()?;
        let if_true = self.parse_ternary()?;

        if !self.check(&Token::Colon) {
            return Err(ParseError::ExpectedColon {
                position: self.current_position,
            });
        }
        self.advance()?;
        let if_false = self.parse_ternary()?;
        self.leave();

        Ok(Expr::ternary(condition, if_true, if_false))
    }

    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_ternary()
    }

    /// Parses the whole input as a single expression.
    ///
    /// Returns `Ok(None)` when the input holds no tokens at all.
    pub fn parse(&mut self) -> Result<Option<Expr>, ParseError> {
        if self.check(&Token::Eof) {
            return Ok(None);
        }

        let expr = self.parse_expression()?;

        if !self.check(&Token::Eof) {
            return Err(ParseError::TrailingInput {
                found: self.current_token.describe(),
                position: self.current_position,
            });
        }
        Ok(Some(expr))
    }
}
