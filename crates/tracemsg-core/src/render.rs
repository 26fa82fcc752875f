//! Renderer seam
//!
//! The core never talks to a debuggee. A renderer supplies a
//! [`TracepointContext`] that knows how to write each keyword and evaluate
//! expressions; [`render`] walks the compiled parts and delegates.

use crate::compiler::{CompiledPart, CompiledTemplate};
use crate::keyword::KeywordKind;

/// Live state a tracepoint message is rendered against
pub trait TracepointContext {
    /// Write the value for a keyword part
    ///
    /// `argument` is the frame index or frame count for numbered kinds and
    /// `None` otherwise.
    fn write_keyword(&mut self, kind: KeywordKind, argument: Option<u32>, out: &mut String);

    /// Evaluate `source` and write the result
    fn write_expression(&mut self, source: &str, out: &mut String);
}

/// Render a compiled template against a context
pub fn render<C>(template: &CompiledTemplate, context: &mut C) -> String
where
    C: TracepointContext + ?Sized,
{
    let mut out = String::new();
    for part in template {
        match part {
            CompiledPart::Text { text } => out.push_str(text),
            CompiledPart::Numbered { kind, argument } => {
                context.write_keyword(*kind, Some(*argument), &mut out)
            }
            CompiledPart::Plain { kind } => context.write_keyword(*kind, None, &mut out),
            CompiledPart::Expression { source } => context.write_expression(source, &mut out),
        }
    }
    out
}
