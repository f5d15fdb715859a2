//! Output renderers for parsed recipes.
//!
//! Renderers read a [`Document`](cook_syntax::Document) and never modify it.
//!
//! ## Modules
//!
//! - `html` - HTML fragment with one list item per step
//! - `shopping` - ingredients grouped by name across one or more recipes

pub mod html;
pub mod shopping;

pub use html::{HtmlRenderer, RenderError};
pub use shopping::{Amount, ShoppingItem, ShoppingList};
