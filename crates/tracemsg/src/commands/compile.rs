//! Compile command - show the parts a template compiles to

use crate::output::{print_json, print_text};
use anyhow::Result;
use colored::Colorize;
use tracemsg_core::{CompiledPart, compile};

pub fn run(template: &str, json: bool) -> Result<()> {
    let compiled = compile(template);

    if json {
        return print_json(&compiled);
    }

    if compiled.is_empty() {
        print_text(&format!("{} Template is empty", "!".yellow()))?;
        return Ok(());
    }

    for part in &compiled {
        let line = match part {
            CompiledPart::Text { .. } => part.to_string().normal(),
            CompiledPart::Expression { .. } => part.to_string().magenta(),
            CompiledPart::Numbered { .. } | CompiledPart::Plain { .. } => {
                part.to_string().cyan()
            }
        };
        print_text(&line.to_string())?;
    }

    Ok(())
}
