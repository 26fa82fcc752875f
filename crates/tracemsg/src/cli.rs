//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tracemsg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a template and list its parts
    Compile {
        /// Template text, e.g. 'Thread $TID hit {cond}'
        template: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the recognised $KEYWORDS
    Keywords {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a template against a sample context file
    Preview {
        /// Template text
        template: String,

        /// TOML file describing the process, thread, frames and expression values
        #[arg(short, long, env = "TRACEMSG_CONTEXT")]
        context: PathBuf,
    },
}
