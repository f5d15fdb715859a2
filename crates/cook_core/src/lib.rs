//! Provide shared, pure semantic helpers and the canonical markup vocabulary for the `cook` toolchain.
//!
//! This crate is deliberately small. It holds deterministic helpers that both the syntax frontend and the outer
//! layers (renderers, conformance runner) rely on, so that they agree on spellings and semantics.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO** and no parser-specific types.
//! - Current scope: the control-symbol vocabulary, numeral reading, and duration lookup tables.

pub mod durations;
pub mod lang;
pub mod numerals;

pub use durations::{DURATIONS, DurationTable, TimeDiff};
pub use numerals::{Numeral, NumeralError};
