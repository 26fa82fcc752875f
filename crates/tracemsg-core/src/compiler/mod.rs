//! Compiler module - tracepoint message templates to part sequences
//!
//! ## Syntax
//!
//! - Literal text is copied through
//! - Escapes: `\\`, `\$`, `\{` and the control escapes `\a \b \f \n \r \t \v`
//! - Keywords: `$TID`, `$CALLER2`, `$CALLSTACK10`, ... (see [`crate::keyword`])
//! - Expressions: `{expr}`, captured verbatim for the evaluator
//!
//! Compilation is total. A bad escape, unknown keyword or unterminated
//! expression becomes literal text instead of an error.

mod scan;

use crate::keyword::{KeywordKind, KeywordTable};
use serde::Serialize;
use std::fmt;

use scan::Scanner;

/// One instruction for the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CompiledPart {
    /// Literal run, written as is
    Text { text: String },
    /// Keyword with a frame index or frame count
    Numbered { kind: KeywordKind, argument: u32 },
    /// Keyword without an argument
    Plain { kind: KeywordKind },
    /// Raw `{...}` source for the expression evaluator
    Expression { source: String },
}

impl CompiledPart {
    pub fn text(text: impl Into<String>) -> Self {
        CompiledPart::Text { text: text.into() }
    }

    pub fn numbered(kind: KeywordKind, argument: u32) -> Self {
        CompiledPart::Numbered { kind, argument }
    }

    pub fn plain(kind: KeywordKind) -> Self {
        CompiledPart::Plain { kind }
    }

    pub fn expression(source: impl Into<String>) -> Self {
        CompiledPart::Expression {
            source: source.into(),
        }
    }

    pub fn kind(&self) -> KeywordKind {
        match self {
            CompiledPart::Text { .. } => KeywordKind::WriteText,
            CompiledPart::Numbered { kind, .. } | CompiledPart::Plain { kind } => *kind,
            CompiledPart::Expression { .. } => KeywordKind::WriteEvaluatedExpression,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, CompiledPart::Text { .. })
    }
}

impl fmt::Display for CompiledPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompiledPart::Text { text } => write!(f, "text {:?}", text),
            CompiledPart::Numbered { kind, argument } => write!(f, "{}({})", kind, argument),
            CompiledPart::Plain { kind } => write!(f, "{}", kind),
            CompiledPart::Expression { source } => write!(f, "expr {{{}}}", source),
        }
    }
}

/// Immutable compiled form of a template
///
/// Adjacent literal runs are always merged, so no two neighbouring parts are
/// both [`CompiledPart::Text`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompiledTemplate {
    parts: Vec<CompiledPart>,
}

impl CompiledTemplate {
    pub(crate) fn new(parts: Vec<CompiledPart>) -> Self {
        debug_assert!(
            !parts.windows(2).any(|w| w[0].is_text() && w[1].is_text()),
            "adjacent text parts must be merged"
        );
        Self { parts }
    }

    pub fn parts(&self) -> &[CompiledPart] {
        &self.parts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledPart> {
        self.parts.iter()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl<'a> IntoIterator for &'a CompiledTemplate {
    type Item = &'a CompiledPart;
    type IntoIter = std::slice::Iter<'a, CompiledPart>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

/// Template compiler bound to a keyword table
///
/// Holds no scratch state between calls: every [`TemplateCompiler::compile`]
/// runs on its own buffers, so one compiler can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct TemplateCompiler<'k> {
    keywords: &'k KeywordTable,
}

impl TemplateCompiler<'static> {
    /// Create a compiler over the built-in keyword table
    pub fn new() -> Self {
        Self {
            keywords: KeywordTable::builtin(),
        }
    }
}

impl<'k> TemplateCompiler<'k> {
    /// Create a compiler over a caller-supplied keyword table
    pub fn with_table(keywords: &'k KeywordTable) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &'k KeywordTable {
        self.keywords
    }

    /// Compile a template. Never fails.
    pub fn compile(&self, template: &str) -> CompiledTemplate {
        let compiled = Scanner::new(template, self.keywords).run();
        tracing::trace!(
            template_len = template.len(),
            parts = compiled.len(),
            "compiled tracepoint template"
        );
        compiled
    }
}

impl Default for TemplateCompiler<'static> {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to compile with the built-in keyword table
pub fn compile(template: &str) -> CompiledTemplate {
    TemplateCompiler::new().compile(template)
}

#[cfg(test)]
mod tests;
