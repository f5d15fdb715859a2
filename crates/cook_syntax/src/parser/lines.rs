/// Line-level constructs: `-- comment` and `>> key: value`.
impl<'a> Parser<'a> {
    /// `-- text` up to the end of the line; the body is trimmed.
    fn comment(&mut self) -> Result<Spanned<Component>, ParseError> {
        let start = self.marker();
        let text = self.eat_until(|kind| kind.is_line_end())?.trim().to_string();
        Ok(Spanned::new(Component::Comment(Comment { text }), self.span_from(start)))
    }

    /// `>> key: value` at the start of a line.
    ///
    /// The key runs up to the first `:`; everything after it, including further colons, is the value. Redefining
    /// a key records a warning on the document.
    fn metadata(&mut self) -> Result<Spanned<Component>, ParseError> {
        let start = self.marker();
        let key = self
            .eat_until(|kind| kind.is_control(ControlId::Colon) || kind.is_line_end())?
            .trim()
            .to_string();

        if !self.check_control(ControlId::Colon) {
            return Err(self
                .syntax_error(
                    format!("expected ':' to separate metadata key and value on line {}", start.line),
                    start,
                )
                .with_span(self.span_from(start))
                .with_hint(">> key: value"));
        }
        if key.is_empty() {
            return Err(self
                .syntax_error(format!("missing metadata key on line {}", start.line), start)
                .with_span(self.span_from(start)));
        }
        self.advance(); // `:`

        let value = self.eat_until(|kind| kind.is_line_end())?.trim().to_string();
        let span = self.span_from(start);

        if !self.seen_keys.insert(key.clone()) {
            tracing::warn!(key = %key, line = start.line, "metadata key redefined");
            self.warnings.push(
                ParseError::warning(
                    self.source_name,
                    format!("metadata key '{key}' redefined; the last value wins"),
                    start,
                )
                .with_span(span),
            );
        }
        tracing::debug!(key = %key, value = %value, "metadata");

        Ok(Spanned::new(Component::Metadata(Metadata { key, value }), span))
    }
}
