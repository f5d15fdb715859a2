/// Token-sequence helpers and diagnostics.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`, `check`)
/// - Collecting raw text (`eat_until`)
/// - Non-consuming lookahead (`seek_terminal`)
/// - Error construction
impl<'a> Parser<'a> {
    // ========================================================================
    // Cursor
    // ========================================================================

    /// Return `true` once the current token is `Eof` (or the slice is exhausted).
    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Consume the current token. Never moves past `Eof`.
    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Return `true` if the current token has exactly this kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Return `true` if the current token is the given control.
    fn check_control(&self, id: ControlId) -> bool {
        self.peek().is_control(id)
    }

    /// Byte offset where the current token starts; after consuming a construct this is its end.
    fn offset(&self) -> usize {
        self.peek().position.offset
    }

    fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.offset())
    }

    /// A whitespace token opening a line that holds nothing else.
    fn at_blank_line_whitespace(&self) -> bool {
        let token = self.peek();
        token.kind == TokenKind::Whitespace
            && token.position.column == 1
            && self
                .tokens
                .get(self.pos + 1)
                .is_none_or(|next| next.kind.is_line_end())
    }

    // ========================================================================
    // Collecting text
    // ========================================================================

    /// Concatenate the raw text of tokens up to (not including) the first one matching `end`.
    ///
    /// Stops at `Eof` regardless of `end`. An `Invalid` token is fatal.
    fn eat_until(&mut self, end: impl Fn(TokenKind) -> bool) -> Result<String, ParseError> {
        let mut text = String::new();
        while !self.is_at_end() {
            let token = self.peek();
            if end(token.kind) {
                break;
            }
            if token.kind == TokenKind::Invalid {
                return Err(self.invalid_token(token));
            }
            text.push_str(&token.text);
            self.advance();
        }
        Ok(text)
    }

    // ========================================================================
    // Lookahead
    // ========================================================================

    /// Scan forward from the cursor (inclusive) without moving it.
    ///
    /// Returns `true` if a token matching `terminal` is reached while every token before it satisfies `allowed`;
    /// `false` on any other token or at `Eof`.
    fn seek_terminal(&self, terminal: impl Fn(TokenKind) -> bool, allowed: impl Fn(TokenKind) -> bool) -> bool {
        for token in self.tokens.get(self.pos..).unwrap_or_default() {
            if terminal(token.kind) {
                return true;
            }
            if token.kind == TokenKind::Eof || !allowed(token.kind) {
                return false;
            }
        }
        false
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    fn syntax_error(&self, message: impl Into<String>, position: Position) -> ParseError {
        ParseError::syntax(self.source_name, message, position)
    }

    /// Fatal error for the current token when nothing can start with it.
    fn unexpected_token(&self) -> ParseError {
        let token = self.peek();
        self.syntax_error(
            format!("unexpected token {} with value {:?}", token.kind, token.text),
            token.position,
        )
        .with_span(token.span())
    }

    fn invalid_token(&self, token: &Token) -> ParseError {
        self.syntax_error(format!("found invalid token {:?}", token.text), token.position)
            .with_span(token.span())
            .with_hint("control characters are not allowed in recipe text")
    }
}
