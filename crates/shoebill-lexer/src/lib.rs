//! Shoebill lexer: converts source text into tokens.
//!
//! Scanning never fails outright. Malformed input is recorded as a
//! [`LexError`], forwarded to the caller's [`Reporter`] if one is given,
//! and the scan carries on with the next character. The result always ends
//! with exactly one `EOF` token.
pub mod keywords;

use shoebill_syntax::error::{LexError, LexErrorKind, Reporter};
use shoebill_syntax::token::{Token, TokenKind};

pub use keywords::{keyword, KEYWORDS};

/// Output of one scan: the tokens that could be formed and every error met
/// along the way, both in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scanned {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl Scanned {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Treats any lexical error as fatal.
    pub fn into_result(self) -> Result<Vec<Token>, Vec<LexError>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// Scans `source` in one pass, collecting errors instead of reporting them.
pub fn tokenize(source: &str) -> Scanned {
    Scanner::new(source).scan()
}

/// Single-pass scanner over one source string.
///
/// A `Scanner` is consumed by [`scan`](Scanner::scan), so its cursor never
/// outlives the pass that created it.
pub struct Scanner {
    src: Vec<char>,
    /// First character of the lexeme being built.
    start: usize,
    /// Next unconsumed character.
    current: usize,
    line: usize,
    /// Line of the character at `start`.
    start_line: usize,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl Scanner {
    /// Create a new scanner over the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            src: input.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Scan the whole input.
    pub fn scan(self) -> Scanned {
        self.scan_with(&mut |_: usize, _: &str| {})
    }

    /// Scan the whole input, also handing each error to `reporter` as soon
    /// as it is found.
    pub fn scan_with(mut self, reporter: &mut dyn Reporter) -> Scanned {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token(reporter);
        }
        self.tokens.push(Token::eof(self.line));
        Scanned {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn scan_token(&mut self, reporter: &mut dyn Reporter) {
        let c = self.advance();
        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.match_char('=') { TokenKind::BangEqual } else { TokenKind::Bang };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') { TokenKind::EqualEqual } else { TokenKind::Equal };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') { TokenKind::LessEqual } else { TokenKind::Less };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') { TokenKind::GreaterEqual } else { TokenKind::Greater };
                self.add_token(kind);
            }
            '/' => {
                if self.match_char('/') {
                    // The newline is left for the main loop to count.
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.read_string(reporter),
            c if is_digit(c) => self.read_number(),
            c if is_alpha(c) => self.read_ident_or_keyword(),
            other => self.error(LexErrorKind::UnexpectedCharacter(other), reporter),
        }
    }

    fn read_string(&mut self, reporter: &mut dyn Reporter) {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error(LexErrorKind::UnterminatedString, reporter);
            return;
        }

        // closing quote
        self.advance();

        let value: String = self.src[self.start + 1..self.current - 1].iter().collect();
        let token = Token::string(self.lexeme(), value, self.start_line);
        self.tokens.push(token);
    }

    fn read_number(&mut self) {
        while self.peek().is_some_and(is_digit) {
            self.advance();
        }

        // A fraction needs at least one digit after the dot, so `5.` stays `5` `.`.
        if self.peek() == Some('.') && self.peek_next().is_some_and(is_digit) {
            self.advance();
            while self.peek().is_some_and(is_digit) {
                self.advance();
            }
        }

        let text = self.lexeme();
        // Digit runs with an optional fraction always parse.
        let value: f64 = text.parse().unwrap_or_default();
        self.tokens.push(Token::number(text, value, self.start_line));
    }

    fn read_ident_or_keyword(&mut self) {
        while self.peek().is_some_and(is_alphanumeric) {
            self.advance();
        }
        let kind = keyword(&self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn error(&mut self, kind: LexErrorKind, reporter: &mut dyn Reporter) {
        let err = LexError::new(kind, self.line);
        reporter.report(err.line, &err.message());
        self.errors.push(err);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.src.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.src.get(self.current + 1).copied()
    }

    /// Only called when not at end.
    fn advance(&mut self) -> char {
        let c = self.src[self.current];
        self.current += 1;
        c
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }
        self.current += 1;
        true
    }

    fn lexeme(&self) -> String {
        self.src[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.lexeme(), self.start_line);
        self.tokens.push(token);
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoebill_syntax::token::Literal;
    use TokenKind::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).tokens.iter().map(|t| t.kind).collect()
    }

    fn scan_ok(input: &str) -> Vec<Token> {
        let scanned = tokenize(input);
        assert!(scanned.errors.is_empty(), "unexpected errors for {:?}: {:?}", input, scanned.errors);
        scanned.tokens
    }

    fn number(t: &Token) -> f64 {
        match t.literal {
            Some(Literal::Number(n)) => n,
            ref other => panic!("expected number literal, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        let tokens = scan_ok("");
        assert_eq!(tokens, vec![Token::eof(1)]);
    }

    #[test]
    fn test_single_character_tokens() {
        assert_eq!(
            kinds("(){},.-+;*/"),
            vec![LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Minus, Plus, Semicolon, Star, Slash, Eof]
        );
    }

    #[test]
    fn test_two_character_operators() {
        assert_eq!(kinds("!="), vec![BangEqual, Eof]);
        assert_eq!(kinds("! = == <= >= < >"), vec![Bang, Equal, EqualEqual, LessEqual, GreaterEqual, Less, Greater, Eof]);
        assert_eq!(kinds("==="), vec![EqualEqual, Equal, Eof]);
        assert_eq!(kinds("!=="), vec![BangEqual, Equal, Eof]);
    }

    #[test]
    fn test_operator_followed_by_identifier() {
        let tokens = scan_ok("<=x");
        assert_eq!(tokens[0].kind, LessEqual);
        assert_eq!(tokens[0].lexeme, "<=");
        assert_eq!(tokens[1].kind, Identifier);
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!(tokens[2].kind, Eof);
    }

    #[test]
    fn test_comments_are_discarded() {
        assert_eq!(kinds("// nothing to see here"), vec![Eof]);
        assert_eq!(kinds("1 // one\n2"), vec![Number, Number, Eof]);
        assert_eq!(kinds("a / b"), vec![Identifier, Slash, Identifier, Eof]);
        // comment text is never tokenized
        assert_eq!(kinds("// \"unterminated @ #"), vec![Eof]);
    }

    #[test]
    fn test_comment_keeps_line_count() {
        let tokens = scan_ok("// first\n// second\nx");
        assert_eq!(tokens[0].lexeme, "x");
        assert_eq!(tokens[0].line, 3);
    }

    #[test]
    fn test_number_boundaries() {
        let tokens = scan_ok("5.");
        assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), vec![Number, Dot, Eof]);
        assert_eq!(number(&tokens[0]), 5.0);
        assert_eq!(tokens[0].lexeme, "5");

        let tokens = scan_ok(".5");
        assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), vec![Dot, Number, Eof]);
        assert_eq!(number(&tokens[1]), 5.0);

        let tokens = scan_ok("5.5");
        assert_eq!(tokens.len(), 2);
        assert_eq!(number(&tokens[0]), 5.5);
        assert_eq!(tokens[0].lexeme, "5.5");
    }

    #[test]
    fn test_number_literals() {
        let tokens = scan_ok("0 123 3.14159 007");
        let values: Vec<f64> = tokens[..4].iter().map(number).collect();
        assert_eq!(values, vec![0.0, 123.0, 3.14159, 7.0]);
        assert_eq!(tokens[3].lexeme, "007");
    }

    #[test]
    fn test_method_call_on_number() {
        assert_eq!(kinds("1.2.3"), vec![Number, Dot, Number, Eof]);
        assert_eq!(kinds("12.abs"), vec![Number, Dot, Identifier, Eof]);
    }

    #[test]
    fn test_string_literals() {
        let tokens = scan_ok("\"hello world\"");
        assert_eq!(tokens[0].kind, String);
        assert_eq!(tokens[0].lexeme, "\"hello world\"");
        assert_eq!(tokens[0].literal, Some(Literal::String("hello world".to_string())));

        let tokens = scan_ok("\"\"");
        assert_eq!(tokens[0].literal, Some(Literal::String(std::string::String::new())));
    }

    #[test]
    fn test_string_escapes_are_not_processed() {
        let tokens = scan_ok(r#""a\nb\""#);
        assert_eq!(tokens[0].literal, Some(Literal::String(r"a\nb\".to_string())));
    }

    #[test]
    fn test_string_contents_are_opaque() {
        assert_eq!(kinds("\"// not a comment @\""), vec![String, Eof]);
    }

    #[test]
    fn test_multiline_string() {
        let tokens = scan_ok("\"one\ntwo\"\nx");
        assert_eq!(tokens[0].kind, String);
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].literal, Some(Literal::String("one\ntwo".to_string())));
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!(tokens[1].line, 3);
        assert_eq!(tokens[2].line, 3);
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let input = "and class else false for fun if nil or print return super this true var while";
        assert_eq!(
            kinds(input),
            vec![And, Class, Else, False, For, Fun, If, Nil, Or, Print, Return, Super, This, True, Var, While, Eof]
        );

        let tokens = scan_ok("classroom _private var1 Var");
        assert!(tokens[..4].iter().all(|t| t.kind == Identifier && t.literal.is_none()));
        assert_eq!(tokens[0].lexeme, "classroom");
        assert_eq!(tokens[1].lexeme, "_private");
        assert_eq!(tokens[2].lexeme, "var1");
    }

    #[test]
    fn test_line_tracking() {
        let tokens = scan_ok("var x\n= 1;");
        let equal = tokens.iter().find(|t| t.kind == Equal).unwrap();
        assert_eq!(equal.line, 2);
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens.last().unwrap().line, 2);
    }

    #[test]
    fn test_eof_on_final_line() {
        let tokens = scan_ok("1\n\n\n");
        assert_eq!(tokens.last().unwrap(), &Token::eof(4));
    }

    #[test]
    fn test_unterminated_string() {
        let scanned = tokenize("\"abc");
        assert_eq!(scanned.tokens, vec![Token::eof(1)]);
        assert_eq!(scanned.errors, vec![LexError::new(LexErrorKind::UnterminatedString, 1)]);

        let scanned = tokenize("x = \"abc\ndef\n");
        assert_eq!(scanned.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), vec![Identifier, Equal, Eof]);
        assert_eq!(scanned.errors, vec![LexError::new(LexErrorKind::UnterminatedString, 3)]);
    }

    #[test]
    fn test_errors_do_not_stop_scanning() {
        let scanned = tokenize("@ 1 @ 2");
        let summary: Vec<(TokenKind, Option<Literal>)> =
            scanned.tokens.iter().map(|t| (t.kind, t.literal.clone())).collect();
        assert_eq!(
            summary,
            vec![
                (Number, Some(Literal::Number(1.0))),
                (Number, Some(Literal::Number(2.0))),
                (Eof, None),
            ]
        );
        assert_eq!(
            scanned.errors,
            vec![
                LexError::new(LexErrorKind::UnexpectedCharacter('@'), 1),
                LexError::new(LexErrorKind::UnexpectedCharacter('@'), 1),
            ]
        );
    }

    #[test]
    fn test_unexpected_characters() {
        let scanned = tokenize("a # b\n$ é");
        assert_eq!(scanned.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), vec![Identifier, Identifier, Eof]);
        let found: Vec<(char, usize)> = scanned
            .errors
            .iter()
            .map(|e| match e.kind {
                LexErrorKind::UnexpectedCharacter(c) => (c, e.line),
                other => panic!("unexpected error kind {:?}", other),
            })
            .collect();
        assert_eq!(found, vec![('#', 1), ('$', 2), ('é', 2)]);
    }

    #[test]
    fn test_reporter_is_called_once_per_error_in_order() {
        let mut calls: Vec<(usize, std::string::String)> = Vec::new();
        let mut sink = |line: usize, msg: &str| calls.push((line, msg.to_string()));
        let scanned = Scanner::new("@\n\"open").scan_with(&mut sink);
        assert_eq!(scanned.errors.len(), 2);
        assert_eq!(
            calls,
            vec![(1, "Unexpected character.".to_string()), (2, "Unterminated string.".to_string())]
        );
    }

    #[test]
    fn test_whitespace_does_not_change_meaning() {
        let semantic = |input: &str| -> Vec<(TokenKind, Option<Literal>)> {
            scan_ok(input).into_iter().map(|t| (t.kind, t.literal)).collect()
        };
        assert_eq!(semantic("1  +   2"), semantic("1+2"));
        assert_eq!(semantic("a\t<=\r\n b"), semantic("a<=b"));
    }

    #[test]
    fn test_lexemes_cover_non_whitespace_text() {
        let input = "var greeting = \"hi\";\nfun add(a, b) { return a + b >= 1.5; }\n";
        let joined: std::string::String = scan_ok(input).iter().map(|t| t.lexeme.as_str()).collect();
        let stripped: std::string::String = input.chars().filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n')).collect();
        assert_eq!(joined, stripped);
    }

    #[test]
    fn test_into_result() {
        assert!(tokenize("print 1;").into_result().is_ok());
        let errs = tokenize("print @;").into_result().unwrap_err();
        assert_eq!(errs.len(), 1);
        assert!(tokenize("@").has_errors());
    }

    #[test]
    fn test_small_program() {
        let src = r#"
class Greeter {
  greet(name) {
    print "Hello, " + name; // say hi
  }
}
"#;
        let tokens = scan_ok(src);
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                Class, Identifier, LeftBrace, Identifier, LeftParen, Identifier, RightParen, LeftBrace, Print, String,
                Plus, Identifier, Semicolon, RightBrace, RightBrace, Eof
            ]
        );
        let print = tokens.iter().find(|t| t.kind == Print).unwrap();
        assert_eq!(print.line, 4);
        assert_eq!(tokens.last().unwrap().line, 7);
    }
}
