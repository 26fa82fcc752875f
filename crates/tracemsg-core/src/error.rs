use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TracemsgError {
    // Keyword table errors
    #[error("KEYWORD_NAME_EMPTY: keyword definition for {kind} has an empty name")]
    KeywordNameEmpty { kind: String },

    #[error("KEYWORD_DUPLICATE: keyword '${0}' is defined more than once")]
    KeywordDuplicate(String),

    #[error("KEYWORD_ARGUMENT_MISMATCH: keyword '${name}' of kind {kind}: {reason}")]
    KeywordArgumentMismatch {
        name: String,
        kind: String,
        reason: String,
    },

    // Sample context errors
    #[error("CONTEXT_READ_ERROR: failed to read '{path}': {reason}")]
    ContextReadError { path: PathBuf, reason: String },

    #[error("CONTEXT_INVALID: failed to parse '{path}': {reason}")]
    ContextInvalid { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, TracemsgError>;
