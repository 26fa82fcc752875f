//! Test utilities for tracemsg
//!
//! Shared fixtures for the tracemsg workspace: scratch directories and
//! sample context files for preview tests.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Sample context with one process, one thread and three frames
pub const SAMPLE_CONTEXT_TOML: &str = r#"
app_domain_id = 1
breakpoint_address = "0x00007FF8A1B2C3D4"

[process]
id = 4242
name = "App.exe"

[thread]
id = 7
name = "Main Thread"
managed_id = 1

[[frames]]
function = "App.Worker.Step"
module = "App.dll"
address = "0x00007FF8A1B2C3D4"
offset = "0x1A"
token = "0x06000012"

[[frames]]
function = "App.Worker.Run"
module = "App.dll"
address = "0x00007FF8A1B2C400"
offset = "0x2C"
token = "0x06000011"

[[frames]]
function = "App.Program.Main"
module = "App.dll"
address = "0x00007FF8A1B2C480"
offset = "0x08"
token = "0x06000001"

[expressions]
"count" = "3"
"name.Length" = "12"
"#;

/// Creates a temporary directory within `.tmp/` of the current directory
///
/// # Panics
///
/// Panics if `.tmp/` or the temporary subdirectory cannot be created.
pub fn temp_dir_in_workspace() -> TempDir {
    let tmp_base = std::env::current_dir()
        .expect("Failed to get current directory")
        .join(".tmp");

    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");
    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// Writes `content` to `dir/name` and returns the path
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_context_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write context file");
    path
}

/// Writes [`SAMPLE_CONTEXT_TOML`] to `dir/context.toml`
pub fn write_sample_context(dir: &Path) -> PathBuf {
    write_context_file(dir, "context.toml", SAMPLE_CONTEXT_TOML)
}
