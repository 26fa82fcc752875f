//! CLI command implementations

pub mod compile;
pub mod keywords;
pub mod preview;
