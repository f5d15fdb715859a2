#![forbid(unsafe_code)]
//! Cooklang-style recipe tooling.
//!
//! Recipes are prose with inline references (`@ingredient{qty%unit}`, `#cookware{}`, `~timer{10%minutes}`),
//! `-- comments` and `>> key: value` metadata lines. This crate is the facade over the syntax frontend
//! (`cook_syntax`) and adds the outer layers: HTML rendering, shopping lists, the conformance runner, and the CLI.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use cook::{HtmlRenderer, RenderConfig, parse_recipe};
//!
//! let document = parse_recipe("tea.cook", b"Steep @tea{1%bag} for ~{3%minutes}.").unwrap();
//! let html = HtmlRenderer::new(RenderConfig::default()).render(&document).unwrap();
//! assert!(html.contains(r#"data-seconds="180""#));
//! ```

pub mod cli;
pub mod config;
pub mod conformance;
pub mod render;

pub use cook_syntax::{ast, diagnostics, lexer, parser};
pub use cook_syntax::{Cooklang, Document, ErrorKind, ParseError, RecipeParser, parse_recipe};

pub use config::RenderConfig;
pub use render::{HtmlRenderer, RenderError, ShoppingList};
