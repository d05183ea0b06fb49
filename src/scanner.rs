//! Target directory safety scanning.
//!
//! Before anything is written, the target directory is scanned for entries
//! that could be clobbered by project creation. Version-control metadata, IDE
//! metadata and license/docs files are tolerated; leftover debug logs from a
//! previously failed install are deleted on the spot. Everything else is a
//! conflict, and a single conflict aborts the run before the manifest is
//! written. Rollback relies on this ordering: it only ever deletes files this
//! tool generated, so no user file may predate the manifest write.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Entries that never block project creation.
const ALLOWED_ENTRIES: &[&str] = &[
    ".DS_Store",
    ".git",
    ".gitattributes",
    ".gitignore",
    ".gitlab-ci.yml",
    ".hg",
    ".hgcheck",
    ".hgignore",
    ".idea",
    ".npmignore",
    ".travis.yml",
    ".vscode",
    "docs",
    "LICENSE",
    "README.md",
    "Thumbs.db",
    "mkdocs.yml",
];

/// Filename prefixes identifying leftover logs from a failed install.
const STALE_LOG_PREFIXES: &[&str] = &["npm-debug.log", "yarn-debug.log", "yarn-error.log"];

/// Whether a conflicting entry is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file (or symlink).
    File,
    /// Directory.
    Directory,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

/// A directory entry that blocks project creation.
#[derive(Debug, Clone)]
pub struct Conflict {
    /// Entry name relative to the target directory.
    pub name: String,
    /// File or directory tag, for the conflict report.
    pub kind: EntryKind,
}

/// Result of scanning the target directory.
#[derive(Debug, Default)]
pub struct DirectoryScanResult {
    /// Conflicting entries in lexical order; empty when the directory is safe.
    pub conflicts: Vec<Conflict>,
}

impl DirectoryScanResult {
    /// Returns `true` when the directory can be written into.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Returns `true` for entries on the fixed allow-list.
///
/// IntelliJ module files (`*.iml`) are tolerated alongside the exact names.
fn is_allowed(name: &str) -> bool {
    ALLOWED_ENTRIES.contains(&name) || name.ends_with(".iml")
}

/// Returns `true` for leftover log files from a previously failed install.
fn is_stale_log(name: &str) -> bool {
    STALE_LOG_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// Scans the target directory for entries that block project creation.
///
/// Creates the directory first if it does not exist. Stale install logs are
/// deleted as part of the scan and never appear in the conflict list, so a
/// directory holding nothing but remnants of a failed run scans clean.
/// Scanning an already-clean directory is idempotent.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or read, or if a
/// stale log cannot be removed.
pub fn scan(path: &Path) -> Result<DirectoryScanResult> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create project directory: {}", path.display()))?;

    let mut conflicts = Vec::new();

    for entry in fs::read_dir(path)
        .with_context(|| format!("Failed to read project directory: {}", path.display()))?
    {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if is_allowed(&name) {
            debug!(entry = %name, "allow-listed entry ignored");
            continue;
        }

        if is_stale_log(&name) {
            debug!(entry = %name, "removing stale install log");
            fs::remove_file(entry.path())
                .with_context(|| format!("Failed to remove stale log file: {name}"))?;
            continue;
        }

        let kind = if entry.file_type()?.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        conflicts.push(Conflict { name, kind });
    }

    // read_dir order is platform-dependent; report conflicts deterministically
    conflicts.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(DirectoryScanResult { conflicts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("app");

        let result = scan(&target).unwrap();
        assert!(result.is_safe());
        assert!(target.is_dir());
    }

    #[test]
    fn test_allowed_entries_do_not_conflict() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("app");
        fs::create_dir_all(target.join(".git")).unwrap();
        fs::write(target.join("README.md"), "# app").unwrap();
        fs::write(target.join("project.iml"), "").unwrap();

        let result = scan(&target).unwrap();
        assert!(result.is_safe());
    }

    #[test]
    fn test_user_file_is_reported_as_conflict() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("app");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("notes.txt"), "keep me").unwrap();

        let result = scan(&target).unwrap();
        assert!(!result.is_safe());
        assert_eq!(result.conflicts.len(), 1);
        assert_eq!(result.conflicts[0].name, "notes.txt");
        assert_eq!(result.conflicts[0].kind, EntryKind::File);
    }

    #[test]
    fn test_user_directory_is_tagged_as_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("app");
        fs::create_dir_all(target.join("src")).unwrap();

        let result = scan(&target).unwrap();
        assert_eq!(result.conflicts[0].kind, EntryKind::Directory);
    }

    #[test]
    fn test_stale_logs_are_deleted_and_not_reported() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("app");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("npm-debug.log"), "boom").unwrap();
        fs::write(target.join("yarn-error.log.2024"), "boom").unwrap();

        let result = scan(&target).unwrap();
        assert!(result.is_safe());
        assert!(!target.join("npm-debug.log").exists());
        assert!(!target.join("yarn-error.log.2024").exists());
    }

    #[test]
    fn test_scan_is_idempotent_on_clean_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("app");
        fs::create_dir_all(target.join(".git")).unwrap();

        let first = scan(&target).unwrap();
        let second = scan(&target).unwrap();
        assert!(first.is_safe());
        assert!(second.is_safe());
    }

    #[test]
    fn test_conflicts_are_sorted_by_name() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("app");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("zzz.txt"), "").unwrap();
        fs::write(target.join("aaa.txt"), "").unwrap();

        let result = scan(&target).unwrap();
        let names: Vec<_> = result.conflicts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["aaa.txt", "zzz.txt"]);
    }
}
