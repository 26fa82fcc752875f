//! Keywords command - print the keyword legend

use crate::output::{print_json, print_text};
use anyhow::Result;
use colored::Colorize;
use tracemsg_core::KeywordTable;

pub fn run(json: bool) -> Result<()> {
    let legend = KeywordTable::builtin().legend();

    if json {
        return print_json(&legend);
    }

    let keyword_width = legend.iter().map(|e| e.keyword.len()).max().unwrap_or(0);
    let kind_width = legend
        .iter()
        .map(|e| e.kind.as_str().len())
        .max()
        .unwrap_or(0);
    for entry in &legend {
        let keyword = format!("{:<keyword_width$}", entry.keyword);
        let kind = format!("{:<kind_width$}", entry.kind.as_str());
        let argument = entry
            .argument
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        print_text(&format!(
            "{}  {}  {:>3}  {}",
            keyword.bold(),
            kind.cyan(),
            argument,
            entry.description
        ))?;
    }

    Ok(())
}
