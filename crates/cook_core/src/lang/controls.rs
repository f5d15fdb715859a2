//! Control-symbol vocabulary.
//!
//! This module defines the set of control sequences recognised inside recipe prose: the reference markers
//! (`@`, `#`, `~`), the brace body delimiters and separators (`{`, `}`, `%`, `:`), and the two line markers
//! (`--` for comments, `>>` for metadata).
//!
//! ## Notes
//! - Each control has a [`ControlCategory`]; the parser decides which controls end an instruction run by category.
//! - Two-character controls take priority over single characters when tokenizing (see [`double_char`]).
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use cook_core::lang::controls::{self, ControlId};
//!
//! assert_eq!(controls::double_char('>', '>'), Some(ControlId::DoubleGt));
//! assert_eq!(controls::as_str(ControlId::Tilde), "~");
//! assert_eq!(controls::description(ControlId::At), "introduces an ingredient reference");
//! ```

/// Broad syntactic grouping for control symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlCategory {
    /// Reference markers that introduce an ingredient, cookware item, or timer.
    Marker,
    /// Brace delimiters around a reference body.
    Delimiter,
    /// Separators inside a reference body or metadata line.
    Separator,
    /// Markers that give the rest of a line its meaning.
    LineMarker,
}

/// Stable identifier for control symbols.
///
/// The declaration order matches [`CONTROLS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    // Reference markers
    At,
    Hash,
    Tilde,

    // Body separators
    Percent,
    Colon,

    // Delimiters
    LBrace,
    RBrace,

    // Line markers
    DoubleDash,
    DoubleGt,
}

/// Metadata for a control symbol.
#[derive(Debug, Clone, Copy)]
pub struct ControlInfo {
    pub id: ControlId,
    pub canonical: &'static str,
    /// Token name used in diagnostics (e.g. `unexpected token LBrace`).
    pub name: &'static str,
    pub category: ControlCategory,
    pub description: &'static str,
}

/// Registry of all control symbols.
pub const CONTROLS: &[ControlInfo] = &[
    info(
        ControlId::At,
        "@",
        "At",
        ControlCategory::Marker,
        "introduces an ingredient reference",
    ),
    info(
        ControlId::Hash,
        "#",
        "Hash",
        ControlCategory::Marker,
        "introduces a cookware reference",
    ),
    info(
        ControlId::Tilde,
        "~",
        "Tilde",
        ControlCategory::Marker,
        "introduces a timer reference",
    ),
    info(
        ControlId::Percent,
        "%",
        "Percent",
        ControlCategory::Separator,
        "separates quantity from unit inside a reference body",
    ),
    info(
        ControlId::Colon,
        ":",
        "Colon",
        ControlCategory::Separator,
        "separates a metadata key from its value",
    ),
    info(
        ControlId::LBrace,
        "{",
        "LBrace",
        ControlCategory::Delimiter,
        "opens a reference body",
    ),
    info(
        ControlId::RBrace,
        "}",
        "RBrace",
        ControlCategory::Delimiter,
        "closes a reference body",
    ),
    info(
        ControlId::DoubleDash,
        "--",
        "DoubleDash",
        ControlCategory::LineMarker,
        "starts a comment that runs to the end of the line",
    ),
    info(
        ControlId::DoubleGt,
        ">>",
        "DoubleGreaterThan",
        ControlCategory::LineMarker,
        "starts a metadata line when it opens the line",
    ),
];

const fn info(
    id: ControlId,
    canonical: &'static str,
    name: &'static str,
    category: ControlCategory,
    description: &'static str,
) -> ControlInfo {
    ControlInfo {
        id,
        canonical,
        name,
        category,
        description,
    }
}

/// Return the metadata entry for `id`.
pub fn info_for(id: ControlId) -> &'static ControlInfo {
    &CONTROLS[id as usize]
}

/// Return the canonical spelling for `id`.
pub fn as_str(id: ControlId) -> &'static str {
    info_for(id).canonical
}

/// Return the diagnostic token name for `id`.
pub fn name(id: ControlId) -> &'static str {
    info_for(id).name
}

/// Return the category for `id`.
pub fn category(id: ControlId) -> ControlCategory {
    info_for(id).category
}

/// Return the one-line description for `id`, used in diagnostic hints.
pub fn description(id: ControlId) -> &'static str {
    info_for(id).description
}

/// Return the single-character control spelled by `c`, if any.
pub fn single_char(c: char) -> Option<ControlId> {
    match c {
        '@' => Some(ControlId::At),
        '#' => Some(ControlId::Hash),
        '~' => Some(ControlId::Tilde),
        '%' => Some(ControlId::Percent),
        ':' => Some(ControlId::Colon),
        '{' => Some(ControlId::LBrace),
        '}' => Some(ControlId::RBrace),
        _ => None,
    }
}

/// Return the two-character control spelled by `first` followed by `second`, if any.
pub fn double_char(first: char, second: char) -> Option<ControlId> {
    match (first, second) {
        ('-', '-') => Some(ControlId::DoubleDash),
        ('>', '>') => Some(ControlId::DoubleGt),
        _ => None,
    }
}

/// Whether a text run must stop before `c` (given the rune after it).
pub fn starts_control(c: char, next: Option<char>) -> bool {
    single_char(c).is_some() || next.is_some_and(|n| double_char(c, n).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[ControlId] = &[
        ControlId::At,
        ControlId::Hash,
        ControlId::Tilde,
        ControlId::Percent,
        ControlId::Colon,
        ControlId::LBrace,
        ControlId::RBrace,
        ControlId::DoubleDash,
        ControlId::DoubleGt,
    ];

    #[test]
    fn registry_order_matches_ids() {
        assert_eq!(CONTROLS.len(), ALL.len());
        for id in ALL {
            assert_eq!(info_for(*id).id, *id);
        }
    }

    #[test]
    fn spellings_are_unique() {
        for (i, a) in CONTROLS.iter().enumerate() {
            for b in &CONTROLS[i + 1..] {
                assert_ne!(a.canonical, b.canonical);
            }
        }
        assert_eq!(double_char('-', '>'), None);
        assert_eq!(single_char('>'), None);
    }

    #[test]
    fn char_lookups_agree_with_registry() {
        for info in CONTROLS {
            let mut chars = info.canonical.chars();
            let (Some(first), second) = (chars.next(), chars.next()) else {
                panic!("empty spelling for {:?}", info.id);
            };
            match second {
                None => assert_eq!(single_char(first), Some(info.id)),
                Some(second) => assert_eq!(double_char(first, second), Some(info.id)),
            }
        }
    }

    #[test]
    fn text_stops_before_controls_only() {
        assert!(starts_control('@', None));
        assert!(starts_control('-', Some('-')));
        assert!(starts_control('>', Some('>')));
        assert!(!starts_control('-', Some('x')));
        assert!(!starts_control('>', None));
        assert!(!starts_control('a', Some('@')));
    }

    #[test]
    fn categories() {
        assert_eq!(category(ControlId::Tilde), ControlCategory::Marker);
        assert_eq!(category(ControlId::LBrace), ControlCategory::Delimiter);
        assert_eq!(category(ControlId::Percent), ControlCategory::Separator);
        assert_eq!(category(ControlId::DoubleGt), ControlCategory::LineMarker);
        assert_eq!(name(ControlId::DoubleGt), "DoubleGreaterThan");
    }

    #[test]
    fn markers_describe_their_reference() {
        assert_eq!(description(ControlId::Hash), "introduces a cookware reference");
        assert_eq!(description(ControlId::Tilde), "introduces a timer reference");
    }
}
