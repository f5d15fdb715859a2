//! Property-based tests for the recipe frontend
//!
//! These tests use proptest to check tokenizer and parser invariants across many randomly generated inputs.

use cook::ast::Component;
use cook::lexer::{self, TokenKind};
use cook::parse_recipe;
use proptest::prelude::*;

// =============================================================================
// Tokenizer Properties
// =============================================================================

proptest! {
    /// Property: any byte string tokenizes without panicking and ends in exactly one EOF token.
    #[test]
    fn tokenize_arbitrary_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let output = lexer::tokenize("fuzz.cook", &bytes);
        let eofs = output.tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(output.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    /// Property: token positions never move backwards.
    #[test]
    fn token_offsets_are_monotonic(source in "[a-z @#~%:{}\\-> \\n]{0,80}") {
        let tokens = lexer::lex("prop.cook", &source).unwrap();
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].position.offset <= pair[1].position.offset);
        }
    }

    /// Property: valid text reassembles from its tokens.
    #[test]
    fn tokens_cover_the_source(source in "[a-z @#~%:{}\\-> ]{0,80}") {
        let tokens = lexer::lex("prop.cook", &source).unwrap();
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(joined, source);
    }
}

// =============================================================================
// Parser Properties
// =============================================================================

proptest! {
    /// Property: blank input has no steps.
    #[test]
    fn blank_input_has_no_steps(source in "[ \\t\\n]{0,40}") {
        let document = parse_recipe("blank.cook", source.as_bytes()).unwrap();
        prop_assert!(document.steps.is_empty());
    }

    /// Property: marker-free paragraphs separated by a blank line become one step each.
    #[test]
    fn paragraphs_become_steps(paragraphs in proptest::collection::vec("[a-z]+( [a-z]+){0,5}", 1..6)) {
        let source = paragraphs.join("\n\n");
        let document = parse_recipe("prose.cook", source.as_bytes()).unwrap();
        prop_assert_eq!(document.steps.len(), paragraphs.len());
        for (step, paragraph) in document.steps.iter().zip(&paragraphs) {
            let texts: Vec<_> = step
                .components
                .iter()
                .map(|c| match &c.node {
                    Component::Instruction(i) => i.text.clone(),
                    other => panic!("unexpected component {other}"),
                })
                .collect();
            prop_assert_eq!(texts, vec![paragraph.clone()]);
        }
    }

    /// Property: a braced ingredient keeps its trimmed name, quantity and unit.
    #[test]
    fn braced_ingredient_fields(
        name in "[a-z]+( [a-z]+){0,2}",
        quantity in "[0-9]{1,3}",
        unit in "[a-z]{1,5}",
    ) {
        let source = format!("Add @{name}{{{quantity}%{unit}}} now");
        let document = parse_recipe("ingredient.cook", source.as_bytes()).unwrap();
        let ingredients: Vec<_> = document.ingredients().collect();
        prop_assert_eq!(ingredients.len(), 1);
        prop_assert_eq!(&ingredients[0].name, &name);
        prop_assert_eq!(&ingredients[0].quantity, &quantity);
        prop_assert_eq!(&ingredients[0].unit, &unit);
    }

    /// Property: parsing never panics on printable input; it either succeeds or reports one error.
    #[test]
    fn parse_printable_never_panics(source in "[ -~\\n]{0,120}") {
        let _ = parse_recipe("printable.cook", source.as_bytes());
    }
}
