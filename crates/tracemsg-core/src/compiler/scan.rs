//! Single-pass scanner behind [`super::TemplateCompiler`]
//!
//! The scanner jumps from trigger to trigger (`\`, `$`, `{`). Everything in
//! between goes into the pending literal buffer, which is flushed only right
//! before a non-text part and at end of input. That is what keeps literal
//! runs merged.
//!
//! All triggers are ASCII, so every cursor position the scanner stops at is
//! a char boundary.

use super::{CompiledPart, CompiledTemplate};
use crate::keyword::KeywordTable;

const TRIGGERS: [char; 3] = ['\\', '$', '{'];

/// Control character for a recognised escape letter
fn control_escape(letter: char) -> Option<char> {
    match letter {
        'a' => Some('\u{07}'),
        'b' => Some('\u{08}'),
        'f' => Some('\u{0C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\u{0B}'),
        _ => None,
    }
}

/// Per-call scanning state
pub(super) struct Scanner<'t, 'k> {
    text: &'t str,
    keywords: &'k KeywordTable,
    /// Byte offset of the read cursor
    pos: usize,
    /// Part accumulator
    parts: Vec<CompiledPart>,
    /// Literal characters not yet flushed
    pending: String,
    /// Set once a `{` found no closing `}`; none exists further on either
    unterminated: bool,
}

impl<'t, 'k> Scanner<'t, 'k> {
    pub(super) fn new(text: &'t str, keywords: &'k KeywordTable) -> Self {
        Self {
            text,
            keywords,
            pos: 0,
            parts: Vec::new(),
            pending: String::new(),
            unterminated: false,
        }
    }

    pub(super) fn run(mut self) -> CompiledTemplate {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];

            let Some(offset) = rest.find(&TRIGGERS[..]) else {
                self.pending.push_str(rest);
                self.pos = self.text.len();
                break;
            };

            self.pending.push_str(&rest[..offset]);
            self.pos += offset;

            match self.text.as_bytes()[self.pos] {
                b'\\' => self.process_escape(),
                b'$' => self.process_keyword(),
                _ => self.process_expression(),
            }
        }

        self.flush();
        debug_assert!(self.pending.is_empty());
        CompiledTemplate::new(self.parts)
    }

    /// Move pending literal text into a single text part
    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            self.parts.push(CompiledPart::Text { text });
        }
    }

    /// Emit a non-text part, flushing pending text first
    fn emit(&mut self, part: CompiledPart) {
        debug_assert!(!part.is_text());
        self.flush();
        self.parts.push(part);
    }

    /// Keep the trigger character as literal text and step over it
    fn literal_trigger(&mut self, trigger: char) {
        self.pending.push(trigger);
        self.pos += 1;
    }

    /// `\` at the cursor
    fn process_escape(&mut self) {
        let next = self.text[self.pos + 1..].chars().next();

        let escaped = match next {
            Some(c) if TRIGGERS.contains(&c) => Some(c),
            Some(c) => control_escape(c),
            None => None,
        };

        match escaped {
            Some(c) => {
                self.pending.push(c);
                // Escape letters and triggers are ASCII
                self.pos += 2;
            }
            None => {
                tracing::debug!(position = self.pos, "inert escape kept as literal '\\'");
                self.literal_trigger('\\');
            }
        }
    }

    /// `$` at the cursor
    fn process_keyword(&mut self) {
        match self.keywords.lookup(self.text, self.pos + 1) {
            Some(definition) => {
                let part = match definition.numeric_argument {
                    Some(argument) => CompiledPart::numbered(definition.kind, argument),
                    None => CompiledPart::plain(definition.kind),
                };
                let consumed = 1 + definition.name.len();
                self.emit(part);
                self.pos += consumed;
            }
            None => {
                tracing::debug!(position = self.pos, "unknown keyword kept as literal '$'");
                self.literal_trigger('$');
            }
        }
    }

    /// `{` at the cursor
    fn process_expression(&mut self) {
        let body_start = self.pos + 1;
        let close = if self.unterminated {
            None
        } else {
            self.text[body_start..].find('}')
        };

        match close {
            Some(len) => {
                let source = &self.text[body_start..body_start + len];
                self.emit(CompiledPart::expression(source));
                self.pos = body_start + len + 1;
            }
            None => {
                if !self.unterminated {
                    tracing::debug!(
                        position = self.pos,
                        "unterminated expression kept as literal '{{'"
                    );
                }
                self.unterminated = true;
                self.literal_trigger('{');
            }
        }
    }
}
