#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # create-express-app - Express Project Scaffolder
//!
//! `create-express-app` bootstraps a minimal Express project: it validates the
//! requested project name, verifies the target directory is safe to write
//! into, writes a fresh `package.json`, installs a fixed dependency set with
//! npm, and materializes a hello-world server entry point. If the install
//! fails, it rolls back only the files it generated itself.
//!
//! ## Architecture
//!
//! The codebase is organized into several key modules:
//!
//! - [`commands`]: CLI command implementations (currently only `create`)
//! - [`validate`]: Project name validation against npm naming policy
//! - [`scanner`]: Target directory safety scan and stale-log cleanup
//! - [`manifest`]: `package.json` generation
//! - [`install`]: npm invocation and rollback of generated files
//! - [`doctor`]: npm working-directory consistency diagnostics
//! - [`registry`]: Best-effort update check against crates.io
//! - [`template`]: Embedded project template files
//! - [`output`]: Output formatting and styling
//!
//! ## Example Usage
//!
//! ```no_run
//! use create_express_app::InitContext;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = InitContext::new("my-app")?;
//! create_express_app::commands::create::execute(&ctx)?;
//! # Ok(())
//! # }
//! ```

/// Commands module containing all CLI command implementations.
pub mod commands;

/// npm working-directory consistency diagnostics.
pub mod doctor;

/// npm invocation and rollback of generated files.
pub mod install;

/// Generation of the project manifest (`package.json`).
pub mod manifest;

/// Output formatting and styling.
pub mod output;

/// Best-effort update check against the crates.io registry.
pub mod registry;

/// Directory safety scanning and stale-log cleanup.
pub mod scanner;

/// Embedded template files for the scaffolded project.
pub mod template;

/// Project name validation against npm naming policy.
pub mod validate;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Current version of the create-express-app binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the generated project manifest file.
pub const MANIFEST_FILE: &str = "package.json";

/// Name of the lockfile npm generates next to the manifest.
pub const LOCKFILE: &str = "package-lock.json";

/// Directory npm installs dependencies into.
pub const MODULES_DIR: &str = "node_modules";

/// Name of the generated server entry point.
pub const ENTRY_FILE: &str = "index.js";

/// Runtime dependencies installed into every scaffolded project.
///
/// This list doubles as the reserved-name set for [`validate`]: a project
/// must not shadow one of its own dependencies.
pub const RUNTIME_DEPENDENCIES: &[&str] = &["express", "dotenv"];

/// Central context for a single project initialization.
///
/// Holds the requested project name, the resolved absolute target path, and
/// the working directory the process started in. Created once per invocation
/// from the CLI argument and immutable afterwards; the original directory is
/// needed to restore the process working directory during rollback.
#[derive(Debug, Clone)]
pub struct InitContext {
    /// Project name, derived from the final component of the target path.
    pub name: String,

    /// Absolute path of the directory the project is created in.
    pub project_path: PathBuf,

    /// Working directory of the process before it moved into the project.
    pub original_dir: PathBuf,
}

impl InitContext {
    /// Creates a new `InitContext` from the CLI `<project-directory>` argument.
    ///
    /// Relative arguments are resolved against the current working directory;
    /// the project name is the final path component of the resolved path.
    ///
    /// # Errors
    ///
    /// Returns an error if the current working directory cannot be determined
    /// or if the argument has no usable final path component (e.g. `..`).
    pub fn new(directory: &str) -> Result<Self> {
        let original_dir =
            std::env::current_dir().context("Could not determine current working directory")?;
        let project_path = original_dir.join(directory);

        let name = project_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(ToString::to_string)
            .with_context(|| format!("Could not derive a project name from {directory:?}"))?;

        Ok(Self {
            name,
            project_path,
            original_dir,
        })
    }
}
