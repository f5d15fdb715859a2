//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These keep `matches!(...)` noise out of the parser and make ID-based control tokens easy to test.

use crate::lexer::{Token, TokenKind};
use cook_core::lang::controls::{self, ControlCategory, ControlId};

impl TokenKind {
    /// Return the control id, if this is a control token.
    pub fn control_id(&self) -> Option<ControlId> {
        match self {
            TokenKind::Control(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given control.
    pub fn is_control(&self, id: ControlId) -> bool {
        matches!(self, TokenKind::Control(c) if *c == id)
    }

    /// Return `true` for tokens that may appear inside a reference name: text and whitespace.
    pub fn is_name_part(&self) -> bool {
        matches!(self, TokenKind::Text | TokenKind::Whitespace)
    }

    /// Return `true` for tokens that end a line: newline and end of input.
    pub fn is_line_end(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Eof)
    }

    /// Return `true` for tokens that continue an instruction run.
    ///
    /// Reference markers, comments, newlines, and invalid tokens end a run; separators, braces and a mid-line `>>`
    /// are literal prose.
    pub fn continues_instruction(&self) -> bool {
        match self {
            TokenKind::Text | TokenKind::Whitespace => true,
            TokenKind::Control(id) => match controls::category(*id) {
                ControlCategory::Separator | ControlCategory::Delimiter => true,
                ControlCategory::LineMarker => *id == ControlId::DoubleGt,
                ControlCategory::Marker => false,
            },
            TokenKind::Eof | TokenKind::Invalid | TokenKind::Newline => false,
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.control_id()`.
    pub fn control_id(&self) -> Option<ControlId> {
        self.kind.control_id()
    }

    /// Convenience wrapper for `self.kind.is_control(id)`.
    pub fn is_control(&self, id: ControlId) -> bool {
        self.kind.is_control(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_runs_exclude_markers() {
        assert!(TokenKind::Control(ControlId::Colon).continues_instruction());
        assert!(TokenKind::Control(ControlId::DoubleGt).continues_instruction());
        assert!(!TokenKind::Control(ControlId::At).continues_instruction());
        assert!(!TokenKind::Control(ControlId::DoubleDash).continues_instruction());
        assert!(!TokenKind::Newline.continues_instruction());
        assert!(TokenKind::Control(ControlId::RBrace).continues_instruction());
        assert!(!TokenKind::Control(ControlId::Tilde).continues_instruction());
    }

    #[test]
    fn control_ids() {
        let kind = TokenKind::Control(ControlId::Hash);
        assert_eq!(kind.control_id(), Some(ControlId::Hash));
        assert!(kind.is_control(ControlId::Hash));
        assert!(!kind.is_control(ControlId::At));
        assert_eq!(TokenKind::Text.control_id(), None);
    }
}
