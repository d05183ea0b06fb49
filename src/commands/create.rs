//! Project creation: the sequential initialization flow.
//!
//! The flow is a straight line with no retries:
//! name validation, advisory npm cwd check, directory safety scan, move into
//! the target, manifest write, blocking install. Install failure rolls back
//! the generated files and aborts; every other failure aborts before the
//! first write.

use crate::install::{self, InstallOutcome};
use crate::manifest::Manifest;
use crate::{
    ENTRY_FILE, InitContext, RUNTIME_DEPENDENCIES, doctor, output, registry, scanner, template,
    validate,
};
use anyhow::{Context, Result};
use colored::Colorize;
use tracing::debug;

/// Creates the project described by `ctx`.
///
/// # Errors
///
/// Returns an error (terminal for the process) on an invalid name, an unsafe
/// target directory, a confirmed npm working-directory mismatch, or a failed
/// install. The install-failure path rolls back generated files first.
pub fn execute(ctx: &InitContext) -> Result<()> {
    registry::check_for_updates();

    let validation = validate::validate_project_name(&ctx.name);
    if !validation.is_valid() {
        super::print_error(&format!("Cannot create a project named \"{}\":", ctx.name));
        for problem in validation.problems() {
            output::error(&format!("  * {problem}"));
        }
        anyhow::bail!("invalid project name");
    }
    debug!(name = %ctx.name, "project name accepted");

    // Advisory, but a confirmed mismatch means npm would install into the
    // wrong directory, so it must abort before anything is written.
    if !doctor::check_npm_cwd() {
        anyhow::bail!("npm does not run in the current working directory");
    }

    let scan = scanner::scan(&ctx.project_path)?;
    if !scan.is_safe() {
        super::print_error(&format!(
            "The directory {} contains files that could conflict:",
            ctx.name
        ));
        for conflict in &scan.conflicts {
            output::info(&format!("  {} ({})", conflict.name, conflict.kind));
        }
        output::info("Either use a new directory name, or remove the files listed above.");
        anyhow::bail!("project directory is not safe to use");
    }

    output::action(
        "Creating",
        &format!("a new Express app in {}", ctx.project_path.display()),
    );

    // The working directory moves into the project for the install; only
    // rollback ever moves it back.
    std::env::set_current_dir(&ctx.project_path).with_context(|| {
        format!(
            "Failed to enter project directory: {}",
            ctx.project_path.display()
        )
    })?;

    Manifest::new(&ctx.name).write_to(&ctx.project_path)?;

    match install::install(RUNTIME_DEPENDENCIES) {
        Ok(InstallOutcome::Success) => {}
        Ok(InstallOutcome::Failure { command }) => {
            output::error(&format!("`{command}` failed."));
            return abort_with_rollback(ctx);
        }
        Err(e) => {
            output::error(&format!("Unexpected error during install: {e:#}"));
            return abort_with_rollback(ctx);
        }
    }

    template::materialize(ctx)?;
    print_next_steps(ctx);

    Ok(())
}

/// Deletes generated files, then signals the terminal failure.
fn abort_with_rollback(ctx: &InitContext) -> Result<()> {
    output::info("Rolling back generated files...");
    install::rollback(ctx)?;
    anyhow::bail!("aborting project creation")
}

/// Prints the success summary and the quick-start block.
fn print_next_steps(ctx: &InitContext) {
    let location = ctx
        .project_path
        .strip_prefix(&ctx.original_dir)
        .unwrap_or(&ctx.project_path);

    super::print_success(&format!(
        "Created {} at {}",
        ctx.name,
        ctx.project_path.display()
    ));
    println!("\n{}", "Quick start:".bold());
    println!("  cd {}", location.display());
    println!("  node {ENTRY_FILE}             # Start the server");
    println!("  curl localhost:3000      # Say hello");
}
