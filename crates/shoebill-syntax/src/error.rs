//! Error types shared by the Shoebill toolchain.
//!
//! Two layers live here:
//!
//! - [`LexError`]: a single lexical fault found by the scanner. The scanner
//!   never stops on one of these; it records it and keeps going, so a
//!   caller always receives every lexical error of a source in one pass.
//! - [`Error`]: the general error type callers use when something has to
//!   be surfaced as a failure (unreadable input, a source that failed to
//!   scan, ...).
//!
//! Lexical errors are delivered to a [`Reporter`], the sink that decides how
//! to display or aggregate them.
//!
//! # Examples
//!
//! ```rust
//! use shoebill_syntax::error::{LexError, LexErrorKind, Reporter};
//!
//! let mut seen = Vec::new();
//! let mut sink = |line: usize, message: &str| seen.push(format!("{}: {}", line, message));
//!
//! let err = LexError::new(LexErrorKind::UnterminatedString, 3);
//! sink.report(err.line, &err.message());
//! assert_eq!(seen, ["3: Unterminated string."]);
//! ```

use std::fmt;

/// The two ways source text can fail to form a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that starts no valid token.
    UnexpectedCharacter(char),
    /// A string literal opened but never closed before end of input.
    UnterminatedString,
}

impl LexErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            LexErrorKind::UnexpectedCharacter(_) => "Unexpected character.",
            LexErrorKind::UnterminatedString => "Unterminated string.",
        }
    }
}

/// A lexical error with the 1-based line it was detected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: usize) -> Self {
        Self { kind, line }
    }

    /// The message handed to a [`Reporter`].
    pub fn message(&self) -> String {
        self.kind.message().to_string()
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.kind.message())
    }
}

impl std::error::Error for LexError {}

/// Sink for lexical errors.
///
/// The scanner calls [`report`](Reporter::report) exactly once per error,
/// in source order. What happens next (printing, collecting, setting an
/// exit status) is up to the implementation.
///
/// Any `FnMut(usize, &str)` closure is a `Reporter`.
pub trait Reporter {
    fn report(&mut self, line: usize, message: &str);
}

impl<F> Reporter for F
where
    F: FnMut(usize, &str),
{
    fn report(&mut self, line: usize, message: &str) {
        self(line, message)
    }
}

/// An error surfaced by a Shoebill tool.
///
/// Carries a human-readable message and, when the error can be tied to
/// the source, the 1-based line it refers to.
///
/// ```rust
/// use shoebill_syntax::Error;
///
/// let io = Error::new("File not found: main.sb");
/// assert_eq!(io.to_string(), "File not found: main.sb");
///
/// let located = Error::at_line("Unterminated string.", 4);
/// assert_eq!(located.to_string(), "[line 4] Error: Unterminated string.");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// Human-readable error message
    pub msg: String,

    /// Optional line number in source file (1-based)
    pub line: Option<usize>,
}

impl Error {
    /// Creates an error without source location.
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            line: None,
        }
    }

    /// Creates an error tied to a source line.
    pub fn at_line(msg: impl Into<String>, line: usize) -> Self {
        Self {
            msg: msg.into(),
            line: Some(line),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(l) => write!(f, "[line {}] Error: {}", l, self.msg),
            None => write!(f, "{}", self.msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Error::at_line(e.kind.message(), e.line)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::new(e.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::new(s)
    }
}
impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::new(s)
    }
}

/// A specialized `Result` type for Shoebill tools.
pub type Result<T> = std::result::Result<T, Error>;

/// Shorthand for `Err(Error::new(msg))`.
pub fn error<T>(msg: impl Into<String>) -> Result<T> {
    Err(Error::new(msg))
}

/// Shorthand for `Err(Error::at_line(msg, line))`.
pub fn error_at<T>(line: usize, msg: impl Into<String>) -> Result<T> {
    Err(Error::at_line(msg, line))
}
