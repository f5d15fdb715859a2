//! Parser for Cooklang-style recipe markup.
//!
//! Converts a token sequence into a [`Document`]: steps split at blank lines, each a list of instructions,
//! ingredients, cookware, timers, comments, and metadata.
//!
//! ## Examples
//!
//! ```rust
//! use cook_syntax::ast::Component;
//! use cook_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("rice.cook", "Rinse @rice{300%g} in a #sieve.").unwrap();
//! let document = parser::parse("rice.cook", &tokens).unwrap();
//! let step = &document.steps[0];
//! assert!(matches!(&step.components[1].node, Component::Ingredient(i) if i.name == "rice"));
//! ```

use std::collections::HashSet;

use crate::ast::*;
use crate::diagnostics::ParseError;
use crate::lexer::{Token, TokenKind};
use cook_core::lang::controls::{self, ControlId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/references.rs");
include!("parser/lines.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
