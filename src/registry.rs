//! Best-effort update check against the crates.io registry.
//!
//! Runs once at startup. A newer published version produces an advisory
//! warning; every failure (network, HTTP status, parse, malformed version)
//! is swallowed so the check can never affect project creation or the exit
//! code.

use crate::{VERSION, output};
use anyhow::Result;
use std::time::Duration;
use tracing::debug;

/// crates.io metadata endpoint for this tool.
const REGISTRY_URL: &str = "https://crates.io/api/v1/crates/create-express-app";

/// How long the registry request may take before it is abandoned.
const REGISTRY_TIMEOUT: Duration = Duration::from_secs(2);

/// Prints an advisory warning when a newer release is published.
///
/// Never returns an error and never panics; failures only show up in debug
/// logs.
pub fn check_for_updates() {
    match latest_published_version() {
        Ok(Some(latest)) if is_newer(&latest, VERSION) => {
            output::warning(&format!(
                "A newer version of create-express-app is available: {latest} (you have {VERSION})"
            ));
            output::info("Upgrade with: cargo install create-express-app");
        }
        Ok(_) => debug!("update check: already current"),
        Err(e) => debug!(error = %e, "update check failed, continuing"),
    }
}

/// Queries crates.io for the latest stable version of this tool.
///
/// # Errors
///
/// Returns an error on network failure, non-success HTTP status, or a
/// response body without the expected shape.
fn latest_published_version() -> Result<Option<String>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REGISTRY_TIMEOUT)
        .user_agent(concat!("create-express-app/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client.get(REGISTRY_URL).send()?;
    if !response.status().is_success() {
        anyhow::bail!("registry responded with HTTP {}", response.status());
    }

    let body: serde_json::Value = response.json()?;
    Ok(body["crate"]["max_stable_version"]
        .as_str()
        .map(String::from))
}

/// Whether `candidate` is a strictly newer semantic version than `current`.
///
/// Unparsable versions on either side mean "no update".
fn is_newer(candidate: &str, current: &str) -> bool {
    match (parse_version(candidate), parse_version(current)) {
        (Some(candidate), Some(current)) => candidate > current,
        _ => false,
    }
}

/// Parses a plain `major.minor.patch` version string.
fn parse_version(version: &str) -> Option<(u64, u64, u64)> {
    let mut parts = version.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((major, minor, patch))
}
