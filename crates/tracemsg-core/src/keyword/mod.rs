//! Keyword module - the `$KEYWORD` catalog for tracepoint messages
//!
//! The keyword table is the only place keyword names are defined. The
//! compiler matches against it and the help surface prints its legend, so
//! behavior and documentation cannot drift apart.
//!
//! ## Match priority
//!
//! Several keyword names are literal prefixes of others (`CALLER` of
//! `CALLER3` and `CALLERMODULE`, `CALLSTACK` of `CALLSTACK10`). The table keeps
//! two orders:
//!
//! - **authored order**: how the definitions were written, used for the legend
//! - **match order**: a stable sort by descending name length, used by
//!   [`KeywordTable::lookup`]
//!
//! A name can only be shadowed by one of its own prefixes, and a prefix is
//! always shorter, so the match order never lets a shorter name win.

mod builtin;

use crate::error::{Result, TracemsgError};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

pub use builtin::DEFAULT_CALLSTACK_FRAMES;

/// Semantic kind of a compiled part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeywordKind {
    /// Literal text run
    WriteText,
    WriteAddress,
    WriteAppDomainId,
    WriteBreakpointAddress,
    WriteCaller,
    WriteCallerModule,
    WriteCallerOffset,
    WriteCallerToken,
    WriteCallStack,
    WriteFunction,
    WriteManagedId,
    WriteProcessId,
    WriteProcessName,
    WriteThreadId,
    WriteThreadName,
    /// `{expression}` span, evaluated at render time
    WriteEvaluatedExpression,
}

impl KeywordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            KeywordKind::WriteText => "WriteText",
            KeywordKind::WriteAddress => "WriteAddress",
            KeywordKind::WriteAppDomainId => "WriteAppDomainId",
            KeywordKind::WriteBreakpointAddress => "WriteBreakpointAddress",
            KeywordKind::WriteCaller => "WriteCaller",
            KeywordKind::WriteCallerModule => "WriteCallerModule",
            KeywordKind::WriteCallerOffset => "WriteCallerOffset",
            KeywordKind::WriteCallerToken => "WriteCallerToken",
            KeywordKind::WriteCallStack => "WriteCallStack",
            KeywordKind::WriteFunction => "WriteFunction",
            KeywordKind::WriteManagedId => "WriteManagedId",
            KeywordKind::WriteProcessId => "WriteProcessId",
            KeywordKind::WriteProcessName => "WriteProcessName",
            KeywordKind::WriteThreadId => "WriteThreadId",
            KeywordKind::WriteThreadName => "WriteThreadName",
            KeywordKind::WriteEvaluatedExpression => "WriteEvaluatedExpression",
        }
    }

    /// Whether keywords of this kind carry a frame index or frame count
    pub fn takes_argument(self) -> bool {
        matches!(
            self,
            KeywordKind::WriteAddress
                | KeywordKind::WriteCaller
                | KeywordKind::WriteCallerModule
                | KeywordKind::WriteCallerOffset
                | KeywordKind::WriteCallerToken
                | KeywordKind::WriteCallStack
                | KeywordKind::WriteFunction
        )
    }

    /// Whether a `$NAME` keyword may map to this kind
    ///
    /// Text runs and expressions come from the template syntax itself.
    pub fn is_keyword(self) -> bool {
        !matches!(
            self,
            KeywordKind::WriteText | KeywordKind::WriteEvaluatedExpression
        )
    }
}

impl fmt::Display for KeywordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `$NAME` keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordDefinition {
    /// Literal name matched after `$` (case-sensitive, never empty)
    pub name: String,
    pub kind: KeywordKind,
    /// Implicit frame index or frame count denoted by the name
    pub numeric_argument: Option<u32>,
    /// One-line legend text
    pub description: String,
}

impl KeywordDefinition {
    pub fn new(
        name: impl Into<String>,
        kind: KeywordKind,
        numeric_argument: Option<u32>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            numeric_argument,
            description: description.into(),
        }
    }

    /// Check this definition in isolation
    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(TracemsgError::KeywordNameEmpty {
                kind: self.kind.to_string(),
            });
        }

        let reason = if !self.kind.is_keyword() {
            Some("kind cannot be produced by a keyword")
        } else if self.kind.takes_argument() && self.numeric_argument.is_none() {
            Some("kind requires a numeric argument")
        } else if !self.kind.takes_argument() && self.numeric_argument.is_some() {
            Some("kind does not take a numeric argument")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(TracemsgError::KeywordArgumentMismatch {
                name: self.name.clone(),
                kind: self.kind.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Legend row for help and documentation output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    /// Keyword as typed by the author, including the leading `$`
    pub keyword: String,
    pub kind: KeywordKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<u32>,
    pub description: String,
}

static BUILTIN: LazyLock<KeywordTable> =
    LazyLock::new(|| KeywordTable::from_trusted(builtin::definitions()));

/// Ordered keyword catalog
#[derive(Debug, Clone)]
pub struct KeywordTable {
    /// Definitions in authored order
    definitions: Vec<KeywordDefinition>,
    /// Indices into `definitions`, longest name first
    match_order: Vec<usize>,
}

impl KeywordTable {
    /// Build a table from definitions in authored order
    ///
    /// # Errors
    ///
    /// Returns an error if a name is empty, a name is defined twice, or a
    /// definition's argument does not fit its kind.
    pub fn new(definitions: Vec<KeywordDefinition>) -> Result<Self> {
        {
            let mut seen = HashSet::new();
            for definition in &definitions {
                definition.validate()?;
                if !seen.insert(definition.name.as_str()) {
                    return Err(TracemsgError::KeywordDuplicate(definition.name.clone()));
                }
            }
        }

        Ok(Self::from_trusted(definitions))
    }

    /// The built-in keyword table
    pub fn builtin() -> &'static KeywordTable {
        &BUILTIN
    }

    fn from_trusted(definitions: Vec<KeywordDefinition>) -> Self {
        debug_assert!(definitions.iter().all(|d| d.validate().is_ok()));

        let mut match_order: Vec<usize> = (0..definitions.len()).collect();
        // Stable: equal-length names keep their authored order
        match_order.sort_by(|&a, &b| definitions[b].name.len().cmp(&definitions[a].name.len()));

        let table = Self {
            definitions,
            match_order,
        };
        debug_assert!(table.prefixes_follow_longer_names());
        table
    }

    /// No entry in match order is a proper prefix of a later entry
    fn prefixes_follow_longer_names(&self) -> bool {
        let ordered: Vec<&str> = self.iter_match_order().map(|d| d.name.as_str()).collect();
        ordered.iter().enumerate().all(|(i, earlier)| {
            ordered[i + 1..]
                .iter()
                .all(|later| !(later.len() > earlier.len() && later.starts_with(earlier)))
        })
    }

    /// Find the keyword that matches `text` starting at byte `position`
    ///
    /// Returns the first definition in match order whose name is a prefix of
    /// `text[position..]`. Out-of-range positions and positions that are not
    /// on a char boundary never match.
    pub fn lookup(&self, text: &str, position: usize) -> Option<&KeywordDefinition> {
        let rest = text.get(position..)?;
        self.iter_match_order()
            .find(|definition| rest.starts_with(definition.name.as_str()))
    }

    /// Exact-name lookup (without the leading `$`)
    pub fn get(&self, name: &str) -> Option<&KeywordDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// Definitions in authored order
    pub fn definitions(&self) -> &[KeywordDefinition] {
        &self.definitions
    }

    /// Definitions in match priority order
    pub fn iter_match_order(&self) -> impl Iterator<Item = &KeywordDefinition> + '_ {
        self.match_order.iter().map(|&i| &self.definitions[i])
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Legend rows in authored order
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.definitions
            .iter()
            .map(|d| LegendEntry {
                keyword: format!("${}", d.name),
                kind: d.kind,
                argument: d.numeric_argument,
                description: d.description.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
