//! Canonical markup vocabulary.
//!
//! The tokenizer and parser match on the stable IDs defined here rather than on raw strings, so spellings live in
//! exactly one place.

pub mod controls;
