//! npm working-directory consistency diagnostics.
//!
//! Some misconfigured shells (notably `cmd` AutoRun hooks on Windows) start
//! every child process in a different directory than the parent's. An npm
//! spawned from such a shell would install into the wrong location, so before
//! mutating anything we ask npm where it thinks it runs and compare. The
//! check is advisory: if the diagnostic process cannot be spawned or its
//! output cannot be parsed, the result is inconclusive and the run proceeds.

use crate::output;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Compares npm's reported working directory against the process's own.
///
/// Returns `false` only on a confirmed mismatch, after printing a
/// descriptive report; every inconclusive outcome passes.
#[must_use]
pub fn check_npm_cwd() -> bool {
    let Ok(Some(npm_cwd)) = npm_reported_cwd() else {
        debug!("npm cwd diagnostic inconclusive, skipping check");
        return true;
    };
    let Ok(process_cwd) = std::env::current_dir() else {
        return true;
    };

    if paths_match(&npm_cwd, &process_cwd) {
        return true;
    }

    output::error("Could not start an npm process in the right directory.");
    output::info(&format!("The current directory is: {}", process_cwd.display()));
    output::info(&format!(
        "A newly started npm process however runs in: {}",
        npm_cwd.display()
    ));
    output::info("This is probably caused by a misconfigured system terminal shell.");
    if cfg!(windows) {
        output::info(
            "On Windows, this is often caused by a cmd.exe AutoRun registry entry; \
             try `reg delete \"HKCU\\Software\\Microsoft\\Command Processor\" /v AutoRun /f`.",
        );
    }
    false
}

/// Whether npm and the process agree on the working directory.
fn paths_match(npm_cwd: &Path, process_cwd: &Path) -> bool {
    npm_cwd == process_cwd
}

/// Spawns `npm config list` and extracts the working directory it reports.
///
/// # Errors
///
/// Returns an error if npm cannot be found or spawned; `Ok(None)` when the
/// output carries no cwd line.
fn npm_reported_cwd() -> Result<Option<PathBuf>> {
    let npm = which::which("npm").context("npm not found in PATH")?;
    let output = Command::new(npm)
        .args(["config", "list"])
        .output()
        .context("Failed to run npm config list")?;

    Ok(parse_cwd_line(&String::from_utf8_lossy(&output.stdout)))
}

/// Finds the `; cwd = <path>` line in `npm config list` output.
fn parse_cwd_line(output: &str) -> Option<PathBuf> {
    output
        .lines()
        .find_map(|line| line.strip_prefix("; cwd = "))
        .map(|path| PathBuf::from(path.trim()))
}
