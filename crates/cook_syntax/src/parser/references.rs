/// Inline prose and references: instructions, `@ingredient`, `#cookware`, `~timer`.
///
/// A marker is followed either by a brace body (long form, detected with [`Parser::seek_terminal`]), by a single
/// text run (short form), or by neither, in which case the marker is literal prose.
impl<'a> Parser<'a> {
    /// Instruction run starting at `start`, with `prefix` already consumed (a literal marker, or nothing).
    fn instruction(&mut self, start: Position, prefix: String) -> Result<Spanned<Component>, ParseError> {
        let mut text = prefix;
        text.push_str(&self.eat_until(|kind| !kind.continues_instruction())?);
        let span = self.span_from(start);
        Ok(Spanned::new(Component::Instruction(Instruction { text }), span))
    }

    /// Consume a reference marker and return its position.
    fn marker(&mut self) -> Position {
        let position = self.peek().position;
        self.advance();
        position
    }

    /// Whether a brace body follows, reachable across text and whitespace only.
    fn has_brace_body(&self) -> bool {
        self.seek_terminal(|kind| kind.is_control(ControlId::LBrace), |kind| kind.is_name_part())
    }

    /// Name before a brace body: trimmed, and required to be non-empty.
    fn long_name(&mut self, what: &str, marker: ControlId, start: Position) -> Result<String, ParseError> {
        let name = self.eat_until(|kind| kind.is_control(ControlId::LBrace))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(self
                .syntax_error(format!("missing {what} name before '{{'"), start)
                .with_span(self.span_from(start))
                .with_hint(format!(
                    "'{}' {}; write the name right after it, e.g. {}",
                    controls::as_str(marker),
                    controls::description(marker),
                    example_for(marker)
                )));
        }
        Ok(name.to_string())
    }

    /// Brace body after `{`: text up to `}`, split on the first `%`.
    ///
    /// Both parts are trimmed. The body must close on the same line.
    fn brace_body(&mut self, what: &str, start: Position) -> Result<(String, Option<String>), ParseError> {
        self.advance(); // `{`
        let first = self.eat_until(|kind| kind.is_control(ControlId::Percent) || closes_body(kind))?;
        let second = if self.check_control(ControlId::Percent) {
            self.advance();
            Some(self.eat_until(closes_body)?)
        } else {
            None
        };

        if !self.check_control(ControlId::RBrace) {
            return Err(self
                .syntax_error(format!("unclosed {what}: expected '}}' before end of line"), start)
                .with_span(self.span_from(start))
                .with_hint("braces must open and close on the same line"));
        }
        self.advance();

        Ok((first.trim().to_string(), second.map(|s| s.trim().to_string())))
    }

    /// Short form: the single text run after the marker.
    fn short_name(&mut self) -> Option<String> {
        if !self.check(TokenKind::Text) {
            return None;
        }
        let name = self.peek().text.clone();
        self.advance();
        Some(name)
    }

    // ========================================================================
    // References
    // ========================================================================

    /// `@name`, `@multi word name{}`, `@name{quantity}` or `@name{quantity%unit}`.
    fn ingredient(&mut self) -> Result<Spanned<Component>, ParseError> {
        let start = self.marker();

        let ingredient = if self.has_brace_body() {
            let name = self.long_name("ingredient", ControlId::At, start)?;
            let (quantity, unit) = self.brace_body("ingredient", start)?;
            Ingredient {
                name,
                quantity,
                unit: unit.unwrap_or_default(),
            }
        } else if let Some(name) = self.short_name() {
            Ingredient {
                name,
                quantity: String::new(),
                unit: String::new(),
            }
        } else {
            return self.instruction(start, controls::as_str(ControlId::At).to_string());
        };

        Ok(Spanned::new(Component::Ingredient(ingredient), self.span_from(start)))
    }

    /// `#name`, `#multi word name{}` or `#name{quantity}`.
    fn cookware(&mut self) -> Result<Spanned<Component>, ParseError> {
        let start = self.marker();

        let cookware = if self.has_brace_body() {
            let name = self.long_name("cookware", ControlId::Hash, start)?;
            let (quantity, unit) = self.brace_body("cookware", start)?;
            if unit.is_some() {
                return Err(ParseError::semantic(
                    self.source_name,
                    format!("cookware '{name}' does not take a unit"),
                    start,
                )
                .with_span(self.span_from(start))
                .with_hint("cookware bodies hold a count only, e.g. #pot{2}"));
            }
            Cookware { name, quantity }
        } else if let Some(name) = self.short_name() {
            Cookware {
                name,
                quantity: String::new(),
            }
        } else {
            return self.instruction(start, controls::as_str(ControlId::Hash).to_string());
        };

        Ok(Spanned::new(Component::Cookware(cookware), self.span_from(start)))
    }

    /// `~{magnitude%unit}` or `~name{magnitude%unit}`; without a brace body the `~` is literal.
    fn timer(&mut self) -> Result<Spanned<Component>, ParseError> {
        let start = self.marker();
        if !self.has_brace_body() {
            return self.instruction(start, controls::as_str(ControlId::Tilde).to_string());
        }

        let name = self
            .eat_until(|kind| kind.is_control(ControlId::LBrace))?
            .trim()
            .to_string();
        let (magnitude, unit) = self.brace_body("timer", start)?;

        let Some(unit) = unit else {
            return Err(self
                .syntax_error("timer needs a '%' between magnitude and unit", start)
                .with_span(self.span_from(start))
                .with_hint("e.g. ~{10%minutes}"));
        };
        if magnitude.is_empty() {
            return Err(self
                .syntax_error("missing timer magnitude", start)
                .with_span(self.span_from(start)));
        }
        if unit.is_empty() {
            return Err(self
                .syntax_error("missing timer unit", start)
                .with_span(self.span_from(start)));
        }

        let timer = Timer { name, magnitude, unit };
        Ok(Spanned::new(Component::Timer(timer), self.span_from(start)))
    }
}

/// Tokens that end a brace body: the closing brace, or the end of the line (an error).
fn closes_body(kind: TokenKind) -> bool {
    kind.is_control(ControlId::RBrace) || kind.is_line_end()
}

fn example_for(marker: ControlId) -> &'static str {
    match marker {
        ControlId::Hash => "#pan{}",
        ControlId::Tilde => "~rest{10%minutes}",
        _ => "@flour{200%g}",
    }
}
