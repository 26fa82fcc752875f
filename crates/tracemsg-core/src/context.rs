//! Sample context for previewing tracepoint messages
//!
//! A TOML file stands in for the debuggee so a template can be rendered
//! without a live process:
//!
//! ```toml
//! app_domain_id = 1
//! breakpoint_address = "0x00007FF8A1B2C3D4"
//!
//! [process]
//! id = 4242
//! name = "App.exe"
//!
//! [thread]
//! id = 7
//! name = "Main Thread"
//! managed_id = 1
//!
//! [[frames]]
//! function = "App.Program.Run"
//! module = "App.dll"
//! address = "0x00007FF8A1B2C3D4"
//! offset = "0x1A"
//! token = "0x06000012"
//!
//! [expressions]
//! "x + 1" = "43"
//! ```
//!
//! Frame numbering: `$ADDRESSn` and `$FUNCTIONn` read `frames[n - 1]`,
//! `$CALLER*n` reads `frames[n]` (the n-th caller of the breakpoint frame).

use crate::error::{Result, TracemsgError};
use crate::keyword::KeywordKind;
use crate::render::TracepointContext;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleContext {
    #[serde(default)]
    pub app_domain_id: u32,
    #[serde(default)]
    pub breakpoint_address: String,
    #[serde(default)]
    pub process: ProcessInfo,
    #[serde(default)]
    pub thread: ThreadInfo,
    /// Innermost frame first
    #[serde(default)]
    pub frames: Vec<FrameInfo>,
    /// Expression source → rendered value
    #[serde(default)]
    pub expressions: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessInfo {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreadInfo {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub managed_id: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInfo {
    pub function: String,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub offset: String,
    #[serde(default)]
    pub token: String,
}

impl SampleContext {
    /// Parse a sample context from TOML text
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| TracemsgError::ContextInvalid {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load a sample context file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| TracemsgError::ContextReadError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let context = Self::from_toml_str(&content, path)?;
        tracing::debug!(
            path = %path.display(),
            frames = context.frames.len(),
            expressions = context.expressions.len(),
            "loaded sample context"
        );
        Ok(context)
    }

    fn frame(&self, index: usize, out: &mut String) -> Option<&FrameInfo> {
        let frame = self.frames.get(index);
        if frame.is_none() {
            let _ = write!(out, "<no frame {index}>");
        }
        frame
    }
}

impl TracepointContext for SampleContext {
    fn write_keyword(&mut self, kind: KeywordKind, argument: Option<u32>, out: &mut String) {
        let n = argument.unwrap_or(1) as usize;

        match kind {
            KeywordKind::WriteAddress => {
                if let Some(frame) = self.frame(n.saturating_sub(1), out) {
                    out.push_str(&frame.address);
                }
            }
            KeywordKind::WriteFunction => {
                if let Some(frame) = self.frame(n.saturating_sub(1), out) {
                    out.push_str(&frame.function);
                }
            }
            KeywordKind::WriteCaller => {
                if let Some(frame) = self.frame(n, out) {
                    out.push_str(&frame.function);
                }
            }
            KeywordKind::WriteCallerModule => {
                if let Some(frame) = self.frame(n, out) {
                    out.push_str(&frame.module);
                }
            }
            KeywordKind::WriteCallerOffset => {
                if let Some(frame) = self.frame(n, out) {
                    out.push_str(&frame.offset);
                }
            }
            KeywordKind::WriteCallerToken => {
                if let Some(frame) = self.frame(n, out) {
                    out.push_str(&frame.token);
                }
            }
            KeywordKind::WriteCallStack => {
                let lines: Vec<&str> = self
                    .frames
                    .iter()
                    .take(n)
                    .map(|f| f.function.as_str())
                    .collect();
                out.push_str(&lines.join("\n"));
            }
            KeywordKind::WriteAppDomainId => {
                let _ = write!(out, "{}", self.app_domain_id);
            }
            KeywordKind::WriteBreakpointAddress => out.push_str(&self.breakpoint_address),
            KeywordKind::WriteManagedId => {
                let _ = write!(out, "{}", self.thread.managed_id);
            }
            KeywordKind::WriteProcessId => {
                let _ = write!(out, "{}", self.process.id);
            }
            KeywordKind::WriteProcessName => out.push_str(&self.process.name),
            KeywordKind::WriteThreadId => {
                let _ = write!(out, "{}", self.thread.id);
            }
            KeywordKind::WriteThreadName => out.push_str(&self.thread.name),
            // Not produced by keywords
            KeywordKind::WriteText | KeywordKind::WriteEvaluatedExpression => {}
        }
    }

    fn write_expression(&mut self, source: &str, out: &mut String) {
        match self.expressions.get(source) {
            Some(value) => out.push_str(value),
            None => {
                tracing::debug!(source, "no sample value for expression");
                let _ = write!(out, "<unknown expression: {source}>");
            }
        }
    }
}
