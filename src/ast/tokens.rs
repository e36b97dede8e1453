/// Lexical token produced by [`Lexer`](crate::lexer::Lexer).
///
/// The lexer hands out one token at a time; the parser keeps only the
/// current one.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Number literal, always double precision
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// .5      // normalized to 0.5
    /// ```
    Number(f64),

    /// Text literal enclosed in single or double quotes
    ///
    /// No escape sequences are processed. The other quote character may
    /// appear unescaped inside.
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// 'it said "hi"'
    /// ```
    Text(String),

    /// Variable name resolved through the host lookup
    ///
    /// Must start with a letter or underscore, followed by letters, digits,
    /// or underscores.
    ///
    /// # Examples
    /// ```text
    /// price
    /// item_count
    /// _internal
    /// ```
    Identifier(String),

    // Arithmetic
    /// Addition or text concatenation
    Plus,

    /// Subtraction or unary minus
    Minus,

    /// Multiplication
    Star,

    /// Exponentiation (`**`)
    StarStar,

    /// Division
    Slash,

    // Comparison
    /// Equality operator
    EqEq,

    /// Inequality operator
    NotEq,

    /// Less than
    Lt,

    /// Greater than
    Gt,

    /// Less than or equal
    LtEq,

    /// Greater than or equal
    GtEq,

    // Logical
    /// Logical AND (`&&`)
    AndAnd,

    /// Logical OR (`||`)
    OrOr,

    // Delimiters
    /// Left parenthesis for grouping
    LParen,

    /// Right parenthesis
    RParen,

    /// Ternary condition marker
    ///
    /// # Examples
    /// ```text
    /// total > 100 ? 'bulk' : 'retail'
    /// ```
    Question,

    /// Separates the two ternary branches
    Colon,

    /// End of input
    Eof,
}

impl Token {
    /// Short human-readable description, used in parse error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Number(n) => format!("number {}", n),
            Token::Text(s) => format!("text '{}'", s),
            Token::Identifier(name) => format!("identifier '{}'", name),
            Token::Plus => "'+'".to_string(),
            Token::Minus => "'-'".to_string(),
            Token::Star => "'*'".to_string(),
            Token::StarStar => "'**'".to_string(),
            Token::Slash => "'/'".to_string(),
            Token::EqEq => "'=='".to_string(),
            Token::NotEq => "'!='".to_string(),
            Token::Lt => "'<'".to_string(),
            Token::Gt => "'>'".to_string(),
            Token::LtEq => "'<='".to_string(),
            Token::GtEq => "'>='".to_string(),
            Token::AndAnd => "'&&'".to_string(),
            Token::OrOr => "'||'".to_string(),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::Question => "'?'".to_string(),
            Token::Colon => "':'".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }
}
