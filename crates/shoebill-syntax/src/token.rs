//! Token definitions for the Shoebill scripting language.
//!
//! Tokens are the smallest meaningful units of Shoebill source code. The
//! scanner produces them once and never mutates them afterwards; the parser
//! consumes them in order.
//!
//! # Token Categories
//!
//! - **Punctuation**: `(`, `)`, `{`, `}`, `,`, `.`, `;`
//! - **Operators**: `+`, `-`, `*`, `/`, `!`, `!=`, `=`, `==`, `<`, `<=`, `>`, `>=`
//! - **Literals**: identifiers, strings (`"hello"`) and numbers (`42`, `3.14`)
//! - **Keywords**: reserved words such as `class`, `fun` and `while`
//! - **Special**: the end-of-input marker
//!
//! # Examples
//!
//! ```rust
//! use shoebill_syntax::{Literal, Token, TokenKind};
//!
//! let name = Token::new(TokenKind::Identifier, "counter", 1);
//! assert!(name.literal.is_none());
//!
//! let number = Token::number("42", 42.0, 3);
//! assert_eq!(number.literal, Some(Literal::Number(42.0)));
//! assert_eq!(number.to_string(), "NUMBER 42 42.0");
//! ```

use std::fmt;

/// The closed set of token categories produced by the scanner.
///
/// The [`Display`](fmt::Display) form of each variant is its canonical
/// upper-case name (`LEFT_PAREN`, `BANG_EQUAL`, `EOF`, ...), which is what
/// tooling outside of Rust matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Single-character tokens ===
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // === One or two character tokens ===
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // === Literals ===
    /// A user-defined name. The name itself lives in [`Token::lexeme`].
    Identifier,
    /// A string literal. The decoded text is a [`Literal::String`].
    String,
    /// A number literal. The decoded value is a [`Literal::Number`].
    Number,

    // === Keywords ===
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    /// End-of-input marker, always the last token of a scan.
    Eof,
}

impl TokenKind {
    /// Canonical upper-case name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns `true` for the reserved-word kinds.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded literal value attached to `STRING` and `NUMBER` tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// String contents with the surrounding quotes stripped. Escapes are
    /// not processed.
    String(String),
    /// Every number is a double.
    Number(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => f.write_str(s),
            // Integral doubles keep their fractional digit: `5.0`, not `5`.
            Literal::Number(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{:.1}", n),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One classified, positioned unit of source text.
///
/// # Fields
///
/// - `kind`: the token category
/// - `lexeme`: the exact source text the token was built from (empty for `EOF`)
/// - `literal`: decoded value, present only for `STRING` and `NUMBER`
/// - `line`: 1-based line of the token's first character
///
/// Use the constructors rather than a struct literal; they keep `literal`
/// consistent with `kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: usize,
}

impl Token {
    /// Creates a token that carries no literal value.
    ///
    /// `STRING` and `NUMBER` tokens must be built with [`Token::string`] and
    /// [`Token::number`] instead.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        debug_assert!(
            !matches!(kind, TokenKind::String | TokenKind::Number),
            "{} tokens carry a literal",
            kind
        );
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    /// Creates a `STRING` token. `lexeme` includes the quotes, `value` does not.
    pub fn string(lexeme: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self {
            kind: TokenKind::String,
            lexeme: lexeme.into(),
            literal: Some(Literal::String(value.into())),
            line,
        }
    }

    /// Creates a `NUMBER` token.
    pub fn number(lexeme: impl Into<String>, value: f64, line: usize) -> Self {
        Self {
            kind: TokenKind::Number,
            lexeme: lexeme.into(),
            literal: Some(Literal::Number(value)),
            line,
        }
    }

    /// Creates the end-of-input marker.
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(lit) => write!(f, "{} {} {}", self.kind, self.lexeme, lit),
            None => write!(f, "{} {} null", self.kind, self.lexeme),
        }
    }
}
