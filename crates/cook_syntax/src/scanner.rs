//! Rune-by-rune cursor over raw recipe bytes.
//!
//! The scanner decodes UTF-8 on the fly, tracks line/column/offset, and folds the two-byte line endings `\r\n` and
//! `\n\r` into a single `'\n'`. A byte order mark at the very start is skipped. Malformed input is reported through
//! an [`ErrorSink`] and scanning continues, so the caller decides when to stop.

use crate::ast::Position;

pub const INVALID_UTF8: &str = "invalid UTF-8 encoding";
pub const INVALID_NUL: &str = "invalid character NUL";

const BOM: &[u8] = "\u{FEFF}".as_bytes();

/// Receiver for lexical errors found while scanning.
pub trait ErrorSink {
    fn report(&mut self, position: Position, message: &str);
    fn has_errors(&self) -> bool;
}

impl ErrorSink for Vec<(Position, String)> {
    fn report(&mut self, position: Position, message: &str) {
        self.push((position, message.to_string()));
    }

    fn has_errors(&self) -> bool {
        !self.is_empty()
    }
}

/// One decoded rune: the character, how many bytes it took, and any problem with it.
#[derive(Debug, Clone, Copy)]
struct Rune {
    ch: char,
    len: usize,
    error: Option<&'static str>,
}

pub struct Scanner<'a, S> {
    source: &'a [u8],
    offset: usize,
    line: usize,
    column: usize,
    sink: S,
}

impl<'a, S: ErrorSink> Scanner<'a, S> {
    pub fn new(source: &'a [u8], sink: S) -> Self {
        let offset = if source.starts_with(BOM) { BOM.len() } else { 0 };
        Self {
            source,
            offset,
            line: 1,
            column: 1,
            sink,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.offset, self.line, self.column)
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// The next rune, without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rune_at(self.offset).map(|r| r.ch)
    }

    /// The rune after [`peek`](Self::peek), without consuming anything.
    pub fn peek_second(&self) -> Option<char> {
        let first = self.rune_at(self.offset)?;
        self.rune_at(self.offset + first.len).map(|r| r.ch)
    }

    /// Consume one rune, reporting it to the sink if it is malformed.
    pub fn advance(&mut self) -> Option<char> {
        let rune = self.rune_at(self.offset)?;
        if let Some(message) = rune.error {
            let position = self.position();
            self.sink.report(position, message);
        }
        self.offset += rune.len;
        if rune.ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(rune.ch)
    }

    /// Raw source text from byte `start` up to the cursor.
    pub fn text_from(&self, start: usize) -> String {
        let bytes = self.source.get(start..self.offset).unwrap_or_default();
        String::from_utf8_lossy(bytes).into_owned()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn rune_at(&self, offset: usize) -> Option<Rune> {
        let rune = decode(self.source.get(offset..)?)?;
        let next = self.source.get(offset + 1).copied();
        match (rune.ch, next) {
            ('\r', Some(b'\n')) | ('\n', Some(b'\r')) => Some(Rune {
                ch: '\n',
                len: 2,
                error: None,
            }),
            _ => Some(rune),
        }
    }
}

fn decode(bytes: &[u8]) -> Option<Rune> {
    let first = *bytes.first()?;
    if first == 0 {
        return Some(Rune {
            ch: '\0',
            len: 1,
            error: Some(INVALID_NUL),
        });
    }
    if first.is_ascii() {
        return Some(Rune {
            ch: char::from(first),
            len: 1,
            error: None,
        });
    }

    let window = &bytes[..bytes.len().min(4)];
    let valid = match std::str::from_utf8(window) {
        Ok(valid) => valid,
        Err(e) if e.valid_up_to() > 0 => std::str::from_utf8(&window[..e.valid_up_to()]).unwrap_or_default(),
        Err(e) => {
            return Some(Rune {
                ch: char::REPLACEMENT_CHARACTER,
                len: e.error_len().unwrap_or(window.len()),
                error: Some(INVALID_UTF8),
            });
        }
    };
    let ch = valid.chars().next()?;
    Some(Rune {
        ch,
        len: ch.len_utf8(),
        error: None,
    })
}
