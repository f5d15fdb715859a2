#![no_main]

use cook::{HtmlRenderer, RenderConfig, lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Raw bytes on purpose: malformed UTF-8 must come back as a lexical error, never a panic
    let output = lexer::tokenize("fuzz", data);
    assert_eq!(
        output.tokens.iter().filter(|t| t.kind == lexer::TokenKind::Eof).count(),
        1
    );
    if let Ok(tokens) = output.into_result() {
        if let Ok(document) = parser::parse("fuzz", &tokens) {
            let _ = document.to_string();
            let _ = HtmlRenderer::new(RenderConfig::default()).render(&document);
        }
    }
});
