//! Preview command - render a template against a sample context

use crate::output::print_text;
use anyhow::{Context, Result};
use std::path::Path;
use tracemsg_core::context::SampleContext;
use tracemsg_core::{compile, render};

pub fn run(template: &str, context_path: &Path) -> Result<()> {
    let mut context = SampleContext::from_file(context_path)
        .with_context(|| format!("Failed to load sample context {}", context_path.display()))?;

    let compiled = compile(template);
    tracing::debug!(parts = compiled.len(), "rendering preview");

    print_text(&render(&compiled, &mut context))?;
    Ok(())
}
