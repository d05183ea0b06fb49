//! Embedded template files for the scaffolded project.
//!
//! Written only after a successful install, so the rollback path never needs
//! to know about them. Pre-existing files with the same names (e.g. an
//! allow-listed `.gitignore`) are left untouched.

use crate::{ENTRY_FILE, InitContext};
use anyhow::{Context, Result};
use std::fs;
use tracing::debug;

/// Minimal server entry point for the generated project.
const ENTRY_TEMPLATE: &str = r"const express = require('express');
require('dotenv').config();

const app = express();
const port = process.env.PORT || 3000;

app.get('/', (req, res) => {
  res.send('Hello, world!');
});

app.listen(port, () => {
  console.log(`Listening on http://localhost:${port}`);
});
";

/// Ignore rules for the generated project.
const GITIGNORE_TEMPLATE: &str = "node_modules/\n.env\nnpm-debug.log*\n";

/// Writes the template files into the project directory.
///
/// # Errors
///
/// Returns an error if a template file cannot be written.
pub fn materialize(ctx: &InitContext) -> Result<()> {
    write_if_absent(ctx, ENTRY_FILE, ENTRY_TEMPLATE)?;
    write_if_absent(ctx, ".gitignore", GITIGNORE_TEMPLATE)?;
    Ok(())
}

/// Writes `content` to `name` inside the project directory unless the file
/// already exists.
fn write_if_absent(ctx: &InitContext, name: &str, content: &str) -> Result<()> {
    let path = ctx.project_path.join(name);
    if path.exists() {
        debug!(file = name, "template file already present, keeping it");
        return Ok(());
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}
