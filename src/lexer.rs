use thiserror::Error;

use crate::ast::Token;

/// Errors raised while splitting the source into tokens.
///
/// Positions are zero-based offsets counted in Unicode code points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token
    #[error("unknown character '{ch}' at position {position}")]
    UnknownCharacter { ch: char, position: usize },

    /// Input ended before the closing quote of a text literal
    #[error("expected {quote} to close text literal starting at position {position}")]
    UnterminatedText { quote: char, position: usize },

    /// Digits that could not be read as a number
    #[error("invalid number '{literal}' at position {position}")]
    InvalidNumber { literal: String, position: usize },
}

impl LexError {
    pub fn position(&self) -> usize {
        match self {
            LexError::UnknownCharacter { position, .. }
            | LexError::UnterminatedText { position, .. }
            | LexError::InvalidNumber { position, .. } => *position,
        }
    }
}

/// Pull-based tokenizer.
///
/// Each call to [`Lexer::next_token`] skips whitespace and reads exactly one
/// token. At each position the rules are tried in order: number, operator,
/// text literal, identifier. Once the input is exhausted every further call
/// returns [`Token::Eof`].
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    token_start: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            token_start: 0,
        }
    }

    /// Offset at which the most recently returned token (or error) starts.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> Result<Option<Token>, LexError> {
        let start = self.position;
        let next_is_digit = self.peek_char(1).is_some_and(|c| c.is_ascii_digit());
        let mut number = String::new();

        match self.current_char() {
            // A leading zero only continues into a fraction: `0.5`, never `07`
            Some('0') => {
                number.push('0');
                self.advance();
                let fraction_follows = self.current_char() == Some('.')
                    && self.peek_char(1).is_some_and(|c| c.is_ascii_digit());
                if !fraction_follows {
                    return Ok(Some(Token::Number(0.0)));
                }
            }
            Some('.') if next_is_digit => number.push('0'),
            Some(ch) if ch.is_ascii_digit() => {}
            _ => return Ok(None),
        }

        let mut is_float = false;
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.'
                && !is_float
                && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
            {
                is_float = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        number
            .parse::<f64>()
            .map(|n| Some(Token::Number(n)))
            .map_err(|_| LexError::InvalidNumber {
                literal: number,
                position: start,
            })
    }

    fn read_operator(&mut self) -> Option<Token> {
        let next = self.peek_char(1);
        let (token, width) = match self.current_char()? {
            '+' => (Token::Plus, 1),
            '-' => (Token::Minus, 1),
            '*' if next == Some('*') => (Token::StarStar, 2),
            '*' => (Token::Star, 1),
            '/' => (Token::Slash, 1),
            '(' => (Token::LParen, 1),
            ')' => (Token::RParen, 1),
            '?' => (Token::Question, 1),
            ':' => (Token::Colon, 1),
            '=' if next == Some('=') => (Token::EqEq, 2),
            '!' if next == Some('=') => (Token::NotEq, 2),
            '<' if next == Some('=') => (Token::LtEq, 2),
            '<' => (Token::Lt, 1),
            '>' if next == Some('=') => (Token::GtEq, 2),
            '>' => (Token::Gt, 1),
            '&' if next == Some('&') => (Token::AndAnd, 2),
            '|' if next == Some('|') => (Token::OrOr, 2),
            // A lone `=`, `!`, `&` or `|` is not an operator
            _ => return None,
        };

        self.position += width;
        Some(token)
    }

    fn read_text(&mut self) -> Result<Option<Token>, LexError> {
        let quote = match self.current_char() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Ok(None),
        };
        let start = self.position;
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            self.advance();
            if ch == quote {
                return Ok(Some(Token::Text(result)));
            }
            result.push(ch);
        }

        Err(LexError::UnterminatedText {
            quote,
            position: start,
        })
    }

    fn read_identifier(&mut self) -> Option<Token> {
        match self.current_char() {
            Some(ch) if ch.is_alphabetic() || ch == '_' => {}
            _ => return None,
        }

        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        Some(Token::Identifier(result))
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.token_start = self.position;

        let Some(ch) = self.current_char() else {
            return Ok(Token::Eof);
        };

        if let Some(token) = self.read_number()? {
            return Ok(token);
        }
        if let Some(token) = self.read_operator() {
            return Ok(token);
        }
        if let Some(token) = self.read_text()? {
            return Ok(token);
        }
        if let Some(token) = self.read_identifier() {
            return Ok(token);
        }

        Err(LexError::UnknownCharacter {
            ch,
            position: self.position,
        })
    }
}

#[test]
fn test_power_and_star() {
    let mut lexer = Lexer::new("2 ** 3 * 4");
    assert_eq!(lexer.next_token(), Ok(Token::Number(2.0)));
    assert_eq!(lexer.next_token(), Ok(Token::StarStar));
    assert_eq!(lexer.next_token(), Ok(Token::Number(3.0)));
    assert_eq!(lexer.next_token(), Ok(Token::Star));
    assert_eq!(lexer.next_token(), Ok(Token::Number(4.0)));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_condition() {
    let mut lexer = Lexer::new("qty >= 10 && region != 'EU'");
    assert_eq!(lexer.next_token(), Ok(Token::Identifier("qty".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::GtEq));
    assert_eq!(lexer.next_token(), Ok(Token::Number(10.0)));
    assert_eq!(lexer.next_token(), Ok(Token::AndAnd));
    assert_eq!(lexer.next_token(), Ok(Token::Identifier("region".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::NotEq));
    assert_eq!(lexer.next_token(), Ok(Token::Text("EU".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_error_does_not_advance() {
    let mut lexer = Lexer::new("  #");
    let expected = Err(LexError::UnknownCharacter {
        ch: '#',
        position: 2,
    });
    assert_eq!(lexer.next_token(), expected);
    assert_eq!(lexer.next_token(), expected);
    assert_eq!(lexer.token_start(), 2);
}
