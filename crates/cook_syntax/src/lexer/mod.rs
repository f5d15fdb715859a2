//! Tokenizer for Cooklang-style recipe markup.
//!
//! Splits source bytes into typed tokens, one per loop iteration:
//! - two-character controls (`--`, `>>`) before single-character ones (`@ # ~ % { } :`)
//! - one `Newline` token per line break
//! - coalesced whitespace runs (newlines excluded)
//! - greedy text runs that stop before whitespace, non-printable runes, and anything that starts a control
//!
//! Meaning is deliberately left to the parser: a `{` or `>>` is just a control token here.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::ast::Position;
use crate::diagnostics::ParseError;
use crate::scanner::{ErrorSink, Scanner};
use cook_core::lang::controls::{self, ControlId};

/// Collects lexical errors as [`ParseError`]s tagged with the source name.
#[derive(Debug)]
struct LexErrors<'a> {
    source_name: &'a str,
    errors: Vec<ParseError>,
}

impl ErrorSink for LexErrors<'_> {
    fn report(&mut self, position: Position, message: &str) {
        self.errors
            .push(ParseError::lexical(self.source_name, message, position).with_len(1));
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Tokens plus any lexical errors.
///
/// When `errors` is non-empty, `tokens` stops just before the offending rune (followed by `Eof`) and must not be
/// parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<ParseError>,
}

impl LexOutput {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<Vec<Token>, Vec<ParseError>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// Tokenizer over a [`Scanner`].
pub struct Lexer<'a> {
    scanner: Scanner<'a, LexErrors<'a>>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a tokenizer; `source_name` tags every error.
    pub fn new(source_name: &'a str, source: &'a [u8]) -> Self {
        let sink = LexErrors {
            source_name,
            errors: Vec::new(),
        };
        Self {
            scanner: Scanner::new(source, sink),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole input.
    ///
    /// The token sequence always ends with exactly one `Eof`. Tokenization stops at the first lexical error: the
    /// token in progress is dropped and `Eof` is appended at the current position.
    pub fn tokenize(mut self) -> LexOutput {
        loop {
            let token = self.next_token();
            if self.scanner.sink().has_errors() {
                self.tokens.push(Token::eof(self.scanner.position()));
                break;
            }
            tracing::trace!(kind = %token.kind, position = %token.position, "token");
            let done = token.kind == TokenKind::Eof;
            self.tokens.push(token);
            if done {
                break;
            }
        }
        LexOutput {
            tokens: self.tokens,
            errors: self.scanner.into_sink().errors,
        }
    }

    fn next_token(&mut self) -> Token {
        let start = self.scanner.position();
        let Some(c) = self.scanner.advance() else {
            return Token::eof(start);
        };

        let kind = if let Some(id) = self.double_control(c) {
            TokenKind::Control(id)
        } else if let Some(id) = controls::single_char(c) {
            TokenKind::Control(id)
        } else if c == '\n' {
            TokenKind::Newline
        } else if is_whitespace(c) {
            self.eat_while(is_whitespace);
            TokenKind::Whitespace
        } else if is_printable(c) {
            self.eat_text();
            TokenKind::Text
        } else {
            TokenKind::Invalid
        };

        Token::new(kind, start, self.scanner.text_from(start.offset))
    }

    /// If `first` and the next rune spell a two-character control, consume the second rune.
    fn double_control(&mut self, first: char) -> Option<ControlId> {
        let id = controls::double_char(first, self.scanner.peek()?)?;
        self.scanner.advance();
        Some(id)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.scanner.peek().is_some_and(&pred) {
            self.scanner.advance();
        }
    }

    fn eat_text(&mut self) {
        while let Some(c) = self.scanner.peek() {
            if !is_printable(c) || controls::starts_control(c, self.scanner.peek_second()) {
                break;
            }
            self.scanner.advance();
        }
    }
}

fn is_whitespace(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}

fn is_printable(c: char) -> bool {
    !c.is_whitespace() && !c.is_control()
}

/// Tokenize raw bytes, collecting lexical errors.
#[tracing::instrument(skip_all, fields(source_name = %source_name, bytes = source.len()))]
pub fn tokenize(source_name: &str, source: &[u8]) -> LexOutput {
    Lexer::new(source_name, source).tokenize()
}

/// Tokenize a string.
///
/// ## Errors
/// Returns the lexical errors (at most one; tokenization stops at the first) if the input contains NUL.
pub fn lex(source_name: &str, source: &str) -> Result<Vec<Token>, Vec<ParseError>> {
    tokenize(source_name, source.as_bytes()).into_result()
}
