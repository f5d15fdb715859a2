/// Parse a token sequence into a [`Document`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `source_name`: tags every diagnostic and is stored on the document.
/// - `tokens`: Token sequence produced by `cook_syntax::lexer`.
///
/// ## Errors
/// Returns the first fatal [`ParseError`].
#[tracing::instrument(skip_all, fields(source_name = %source_name, token_count = tokens.len()))]
pub fn parse(source_name: &str, tokens: &[Token]) -> Result<Document, ParseError> {
    Parser::new(source_name, tokens).parse()
}
