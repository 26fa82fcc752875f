//! Tests for the template compiler
//!
//! Organized by construct, with property tests for the invariants that must
//! hold for every input.

use super::*;


/// Compile with the built-in table and return the parts
pub(super) fn parts(template: &str) -> Vec<CompiledPart> {
    compile(template).parts().to_vec()
}
