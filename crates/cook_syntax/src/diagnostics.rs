//! Diagnostics for recipe parsing.
//!
//! Every failure is a [`ParseError`] tagged with the source name and the position it applies to. `ParseError`
//! implements [`miette::Diagnostic`], so callers can render it with source context via `miette::Report`.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, Severity, SourceSpan};
use thiserror::Error;

use crate::ast::{Position, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input bytes (bad UTF-8, NUL).
    Lexical,
    /// Token sequence that does not form a component.
    Syntax,
    /// Well-formed syntax that makes no sense for the component (e.g. a unit on cookware).
    Semantic,
    /// Non-fatal; recorded on the document.
    Warning,
}

impl ErrorKind {
    /// Stable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "cook::lexical",
            ErrorKind::Syntax => "cook::syntax",
            ErrorKind::Semantic => "cook::semantic",
            ErrorKind::Warning => "cook::warning",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Semantic => write!(f, "semantic error"),
            ErrorKind::Warning => write!(f, "warning"),
        }
    }
}

/// A positioned diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{source_name}:{position}: {message}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    pub source_name: String,
    pub position: Position,
    /// Length in bytes of the offending source text, for labels.
    pub len: usize,
    pub hints: Vec<String>,
}

impl ParseError {
    pub fn new(kind: ErrorKind, source_name: &str, message: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            message: message.into(),
            source_name: source_name.to_string(),
            position,
            len: 0,
            hints: Vec::new(),
        }
    }

    pub fn lexical(source_name: &str, message: impl Into<String>, position: Position) -> Self {
        Self::new(ErrorKind::Lexical, source_name, message, position)
    }

    pub fn syntax(source_name: &str, message: impl Into<String>, position: Position) -> Self {
        Self::new(ErrorKind::Syntax, source_name, message, position)
    }

    pub fn semantic(source_name: &str, message: impl Into<String>, position: Position) -> Self {
        Self::new(ErrorKind::Semantic, source_name, message, position)
    }

    pub fn warning(source_name: &str, message: impl Into<String>, position: Position) -> Self {
        Self::new(ErrorKind::Warning, source_name, message, position)
    }

    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Cover `span` (its start must be this error's position).
    pub fn with_span(mut self, span: Span) -> Self {
        self.position = span.start;
        self.len = span.len();
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn is_warning(&self) -> bool {
        self.kind == ErrorKind::Warning
    }

    pub fn source_span(&self) -> SourceSpan {
        (self.position.offset, self.len).into()
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn severity(&self) -> Option<Severity> {
        match self.kind {
            ErrorKind::Warning => Some(Severity::Warning),
            ErrorKind::Lexical | ErrorKind::Syntax | ErrorKind::Semantic => Some(Severity::Error),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() {
            None
        } else {
            Some(Box::new(self.hints.join("\n")))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.kind.to_string()), self.source_span());
        Some(Box::new(std::iter::once(label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_source_and_position() {
        let err = ParseError::syntax("soup.cook", "missing ingredient name", Position::new(14, 2, 3));
        assert_eq!(err.to_string(), "soup.cook:2:3: missing ingredient name");
    }

    #[test]
    fn diagnostic_metadata() {
        let err = ParseError::warning("soup.cook", "metadata key 'servings' redefined", Position::START)
            .with_len(3)
            .with_hint("remove one of the definitions");
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("cook::warning"));
        assert_eq!(err.severity(), Some(Severity::Warning));
        assert_eq!(
            err.help().map(|h| h.to_string()).as_deref(),
            Some("remove one of the definitions")
        );
        assert_eq!(err.source_span(), SourceSpan::from((0, 3)));
        assert!(err.is_warning());
    }

    #[test]
    fn with_span_moves_position() {
        let span = Span::new(Position::new(4, 1, 5), 9);
        let err = ParseError::syntax("x", "bad", Position::START).with_span(span);
        assert_eq!(err.position, Position::new(4, 1, 5));
        assert_eq!(err.len, 5);
    }
}
