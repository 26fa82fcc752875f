// Core modules
pub mod compiler;
pub mod context;
pub mod error;
pub mod keyword;
pub mod render;

// Re-export commonly used types
pub use compiler::{compile, CompiledPart, CompiledTemplate, TemplateCompiler};
pub use error::{Result, TracemsgError};
pub use keyword::{KeywordDefinition, KeywordKind, KeywordTable, LegendEntry};
pub use render::{render, TracepointContext};
