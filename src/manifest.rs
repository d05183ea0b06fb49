//! Project manifest generation.
//!
//! The manifest is the `package.json` npm reads during the install. It is
//! written exactly once, after the safety scan and before the install, and
//! never mutated afterwards.

use crate::MANIFEST_FILE;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Version every scaffolded project starts at.
const INITIAL_VERSION: &str = "0.1.0";

/// The generated project descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    /// Validated project name.
    name: String,
    /// Always [`INITIAL_VERSION`].
    version: String,
    /// Scaffolded projects are applications, not publishable packages.
    private: bool,
}

impl Manifest {
    /// Creates the manifest for a freshly scaffolded project.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            version: INITIAL_VERSION.to_string(),
            private: true,
        }
    }

    /// Serializes the manifest as 2-space-indented JSON with a trailing
    /// newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize manifest")?;
        Ok(format!("{json}\n"))
    }

    /// Writes the manifest into `dir` as `package.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        let path = dir.join(MANIFEST_FILE);
        fs::write(&path, self.to_json()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_manifest_serialization() {
        let manifest = Manifest::new("my-app");
        let expected = "{\n  \"name\": \"my-app\",\n  \"version\": \"0.1.0\",\n  \"private\": true\n}\n";
        assert_eq!(manifest.to_json().unwrap(), expected);
    }

    #[test]
    fn test_manifest_write() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::new("my-app");
        manifest.write_to(temp.path()).unwrap();

        let content = fs::read_to_string(temp.path().join(MANIFEST_FILE)).unwrap();
        assert!(content.contains("\"name\": \"my-app\""));
        assert!(content.contains("\"version\": \"0.1.0\""));
        assert!(content.contains("\"private\": true"));
        assert!(content.ends_with("}\n"));
    }
}
