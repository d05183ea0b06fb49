//! npm invocation and rollback of generated files.
//!
//! The install is a single blocking child process sharing the terminal with
//! the user; there is no timeout and no cancellation. Rollback deletes only
//! entries from a fixed generated-name list, never the results of the safety
//! scan, so files that predate the run always survive a failed install.

use crate::{InitContext, LOCKFILE, MANIFEST_FILE, MODULES_DIR, output};
use anyhow::{Context, Result};
use std::fs;
use std::process::Command;
use tracing::{debug, info};

/// Entries the initializer (or the npm process it runs) generates.
const GENERATED_ENTRIES: &[&str] = &[MANIFEST_FILE, LOCKFILE, MODULES_DIR];

/// Result of the blocking npm install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// npm exited with status 0.
    Success,
    /// npm exited nonzero; carries the command line that was run.
    Failure {
        /// Reconstructed command line, for the failure report.
        command: String,
    },
}

/// Arguments passed to npm: no audit step, exact pinned versions, minimal
/// logging, then the dependency list.
fn install_args(dependencies: &[&str]) -> Vec<String> {
    let mut args: Vec<String> = [
        "install",
        "--no-audit",
        "--save",
        "--save-exact",
        "--loglevel",
        "error",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    args.extend(dependencies.iter().map(ToString::to_string));
    args
}

/// Runs `npm install` for the fixed dependency list in the current working
/// directory, inheriting stdio, and blocks until it exits.
///
/// # Errors
///
/// Returns an error if npm cannot be found in `PATH` or the process cannot
/// be spawned. A spawned npm that exits nonzero is not an `Err`; it is
/// reported as [`InstallOutcome::Failure`].
pub fn install(dependencies: &[&str]) -> Result<InstallOutcome> {
    let npm = which::which("npm")
        .context("npm was not found in PATH; install Node.js to use this tool")?;
    let args = install_args(dependencies);

    output::action("Installing", &dependencies.join(", "));
    debug!(npm = %npm.display(), args = ?args, "spawning package manager");

    let status = Command::new(&npm)
        .args(&args)
        .status()
        .context("Failed to spawn npm")?;

    if status.success() {
        info!("npm install completed");
        Ok(InstallOutcome::Success)
    } else {
        Ok(InstallOutcome::Failure {
            command: format!("npm {}", args.join(" ")),
        })
    }
}

/// Deletes everything the failed run generated, and nothing else.
///
/// Removes each entry of the generated-name list from the project directory,
/// then, if the directory ended up empty, restores the original working
/// directory and deletes the project directory itself.
///
/// # Errors
///
/// Returns an error if a generated entry or the emptied project directory
/// cannot be removed.
pub fn rollback(ctx: &InitContext) -> Result<()> {
    for name in GENERATED_ENTRIES {
        let path = ctx.project_path.join(name);
        let Ok(metadata) = fs::symlink_metadata(&path) else {
            continue;
        };

        output::action("Removing", name);
        debug!(path = %path.display(), "rolling back generated entry");
        if metadata.is_dir() {
            fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to remove generated directory: {name}"))?;
        } else {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove generated file: {name}"))?;
        }
    }

    let remaining = fs::read_dir(&ctx.project_path)
        .with_context(|| {
            format!(
                "Failed to read project directory: {}",
                ctx.project_path.display()
            )
        })?
        .count();

    if remaining == 0 {
        // The process may still be inside the directory it is about to delete
        std::env::set_current_dir(&ctx.original_dir)
            .context("Failed to restore original working directory")?;
        fs::remove_dir(&ctx.project_path).with_context(|| {
            format!(
                "Failed to remove project directory: {}",
                ctx.project_path.display()
            )
        })?;
        output::action("Removing", &ctx.project_path.display().to_string());
    }

    Ok(())
}
