//! Token types for the recipe tokenizer.
//!
//! Control symbols carry a registry-backed [`ControlId`]; everything else is classified by character class only.
//!
//! ## Notes
//! - Tokens keep their raw source text, so the parser can rebuild instruction prose exactly.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::{Position, Span};
use cook_core::lang::controls::{self, ControlId};

/// Kind of token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End-of-input sentinel; every token sequence ends with exactly one.
    Eof,
    /// A rune that is neither printable, whitespace, nor a control.
    Invalid,
    /// A run of printable, non-control runes.
    Text,
    /// A run of whitespace, not including newlines.
    Whitespace,
    Newline,
    Control(ControlId),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Invalid => write!(f, "Invalid"),
            TokenKind::Text => write!(f, "Text"),
            TokenKind::Whitespace => write!(f, "Whitespace"),
            TokenKind::Newline => write!(f, "NewLine"),
            TokenKind::Control(id) => write!(f, "{}", controls::name(*id)),
        }
    }
}

/// A token with its kind, start position, and raw source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position, text: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            text: text.into(),
        }
    }

    pub fn eof(position: Position) -> Self {
        Self::new(TokenKind::Eof, position, String::new())
    }

    pub fn span(&self) -> Span {
        Span::new(self.position, self.position.offset + self.text.len())
    }

    /// Position just past this token.
    pub fn end_position(&self) -> Position {
        let mut end = self.position;
        end.offset += self.text.len();
        if self.kind == TokenKind::Newline {
            end.line += 1;
            end.column = 1;
        } else {
            end.column += self.text.chars().count();
        }
        end
    }
}

impl fmt::Display for Token {
    /// `line:column Kind "text"`, as printed by `cook --lex`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.position, self.kind, self.text)
    }
}
