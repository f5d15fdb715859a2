//! Syntax frontend for Cooklang-style recipe markup: scanner, tokenizer, parser, document model, diagnostics.
//!
//! This crate is dependency-light and is shared by the `cook` CLI, the renderers, and the conformance runner.
//!
//! ## Notes
//! - This crate is "syntax-only": quantities and units are kept as raw text. Numeric reading lives in
//!   `cook_core::numerals`.
//! - Vocabulary identity (the control symbols) comes from `cook_core::lang::controls`.
//!
//! ## Examples
//! ```rust
//! use cook_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("pancakes.cook", "Whisk @eggs{2} well.\n").unwrap();
//! let document = parser::parse("pancakes.cook", &tokens).unwrap();
//! assert_eq!(document.steps.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod scanner;
pub mod token_helpers;

pub use ast::Document;
pub use diagnostics::{ErrorKind, ParseError};

/// A front end that turns recipe source into a [`Document`].
///
/// The Cooklang dialect is the only implementation here; other markup dialects plug in as independent
/// implementations rather than as branches inside the parser.
pub trait RecipeParser {
    /// Parse `source`, tagging every diagnostic with `source_name`.
    fn parse_recipe(&self, source_name: &str, source: &[u8]) -> Result<Document, ParseError>;
}

/// The Cooklang dialect: `@ingredient{qty%unit}`, `#cookware{}`, `~timer{mag%unit}`, `-- comment`, `>> key: value`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cooklang;

impl RecipeParser for Cooklang {
    fn parse_recipe(&self, source_name: &str, source: &[u8]) -> Result<Document, ParseError> {
        parse_recipe(source_name, source)
    }
}

/// Tokenize and parse `source` in one call.
///
/// ## Errors
/// Returns the first lexical error if tokenization fails, otherwise the first fatal parse error.
pub fn parse_recipe(source_name: &str, source: &[u8]) -> Result<Document, ParseError> {
    let tokens = lexer::tokenize(source_name, source)
        .into_result()
        .map_err(|errors| {
            errors
                .into_iter()
                .next()
                .unwrap_or_else(|| ParseError::lexical(source_name, "tokenization failed", ast::Position::START))
        })?;
    parser::parse(source_name, &tokens)
}
