#![allow(dead_code)] // not every test binary uses every fixture helper

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch workspace for integration tests: a temp directory to run the CLI
/// in, plus a bin directory holding a stubbed `npm` that is put first on
/// `PATH` so no real package manager is ever invoked.
pub struct Scratch {
    pub temp: TempDir,
    bin_dir: PathBuf,
}

impl Scratch {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let bin_dir = temp.path().join("stub-bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create stub bin dir");
        Self { temp, bin_dir }
    }

    /// Directory the CLI is run in.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Installs a stub `npm` with the given shell body.
    #[cfg(unix)]
    pub fn stub_npm(&self, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let script = self.bin_dir.join("npm");
        fs::write(&script, format!("#!/bin/sh\n{body}\n")).expect("Failed to write npm stub");
        let mut perms = fs::metadata(&script).expect("stat npm stub").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script, perms).expect("chmod npm stub");
    }

    /// `PATH` value with the stub bin directory first.
    pub fn path_env(&self) -> String {
        let existing = std::env::var("PATH").unwrap_or_default();
        format!("{}:{existing}", self.bin_dir.display())
    }
}
