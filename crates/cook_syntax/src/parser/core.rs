// Parser core type and entrypoint.
//
// This chunk defines the `Parser` type and its top-level `parse()` loop, which assembles components into steps
// and detects step boundaries. It is `include!`'d into `crate::parser` to keep all parser methods in a single
// module while avoiding a single "god file".

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and stops at the first fatal error; there is no recovery.
/// - The cursor is an index into the token slice; lookahead helpers take `&self` and never move it.
pub struct Parser<'a> {
    source_name: &'a str,
    tokens: &'a [Token],
    pos: usize,
    /// Sentinel returned once the cursor runs off the slice.
    eof: Token,
    seen_keys: HashSet<String>,
    warnings: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token sequence.
    ///
    /// ## Parameters
    /// - `source_name`: tags every diagnostic.
    /// - `tokens`: Token sequence produced by `cook_syntax::lexer`. A trailing `Eof` is expected; a slice without
    ///   one behaves as if it were there.
    pub fn new(source_name: &'a str, tokens: &'a [Token]) -> Self {
        let eof = match tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => last.clone(),
            Some(last) => Token::eof(last.end_position()),
            None => Token::eof(Position::START),
        };
        Self {
            source_name,
            tokens,
            pos: 0,
            eof,
            seen_keys: HashSet::new(),
            warnings: Vec::new(),
        }
    }

    /// Parse the entire token sequence into a [`Document`].
    ///
    /// ## Errors
    /// Returns the first fatal [`ParseError`]; no partial document is produced.
    pub fn parse(mut self) -> Result<Document, ParseError> {
        let mut steps = Vec::new();
        let mut step = Step::new(Position::START);

        while !self.is_at_end() {
            if self.at_blank_line_whitespace() {
                self.advance();
                continue;
            }

            let (kind, start) = {
                let token = self.peek();
                (token.kind, token.position)
            };
            match kind {
                TokenKind::Newline => {
                    self.advance();
                    if self.at_blank_line_whitespace() {
                        self.advance();
                    }
                    if self.check(TokenKind::Newline) && step.has_instructions() {
                        let next = self.peek().position;
                        tracing::debug!(
                            line = step.position.line,
                            components = step.components.len(),
                            "step complete"
                        );
                        steps.push(std::mem::replace(&mut step, Step::new(next)));
                    }
                }
                TokenKind::Control(ControlId::DoubleDash) => step.push(self.comment()?),
                TokenKind::Control(ControlId::DoubleGt) if start.column == 1 => step.push(self.metadata()?),
                TokenKind::Control(ControlId::At) => step.push(self.ingredient()?),
                TokenKind::Control(ControlId::Hash) => step.push(self.cookware()?),
                TokenKind::Control(ControlId::Tilde) => step.push(self.timer()?),
                TokenKind::Text
                | TokenKind::Whitespace
                | TokenKind::Control(
                    ControlId::Percent
                    | ControlId::Colon
                    | ControlId::LBrace
                    | ControlId::RBrace
                    | ControlId::DoubleGt,
                ) => step.push(self.instruction(start, String::new())?),
                TokenKind::Invalid | TokenKind::Eof => return Err(self.unexpected_token()),
            }
        }

        if !step.is_empty() {
            steps.push(step);
        }

        Ok(Document {
            source_name: self.source_name.to_string(),
            steps,
            errors: self.warnings,
        })
    }
}
