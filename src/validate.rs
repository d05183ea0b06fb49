//! Project name validation.
//!
//! Enforces the npm package naming policy (lowercase, URL-friendly, bounded
//! length) plus a reserved-name check against the dependency set the
//! scaffolder itself installs. All violations are collected so the user sees
//! the complete list in one run.

use crate::RUNTIME_DEPENDENCIES;

/// Maximum length npm accepts for a package name.
pub const MAX_NAME_LENGTH: usize = 214;

/// Outcome of validating a requested project name.
#[derive(Debug, Default, Clone)]
pub struct ValidationResult {
    /// Every rule violation found, in check order.
    problems: Vec<String>,
}

impl ValidationResult {
    /// Returns `true` when no rule was violated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }

    /// All violation messages, in the order the rules were checked.
    #[must_use]
    pub fn problems(&self) -> &[String] {
        &self.problems
    }

    /// Records a violation message.
    fn reject(&mut self, message: impl Into<String>) {
        self.problems.push(message.into());
    }
}

/// Validates a project name against the naming policy.
///
/// Collects every violation rather than stopping at the first, so a name
/// like `" My_App! "` reports spacing, capitalization and character problems
/// together.
#[must_use]
pub fn validate_project_name(name: &str) -> ValidationResult {
    let mut result = ValidationResult::default();

    if name.is_empty() {
        result.reject("name cannot be empty");
        return result;
    }

    if name.trim() != name {
        result.reject("name cannot contain leading or trailing whitespace");
    }

    if name.len() > MAX_NAME_LENGTH {
        result.reject(format!(
            "name cannot be longer than {MAX_NAME_LENGTH} characters"
        ));
    }

    if name.starts_with('.') {
        result.reject("name cannot start with a period");
    }

    if name.starts_with('_') {
        result.reject("name cannot start with an underscore");
    }

    if name.chars().any(char::is_uppercase) {
        result.reject("name cannot contain capital letters");
    }

    if name
        .chars()
        .any(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        result.reject("name can only contain URL-friendly characters (a-z, 0-9, '-', '_', '.')");
    }

    if RUNTIME_DEPENDENCIES.contains(&name) {
        result.reject(format!(
            "cannot create a project named \"{name}\" because a dependency with the same name \
             will be installed (reserved names: {})",
            RUNTIME_DEPENDENCIES.join(", ")
        ));
    }

    result
}
