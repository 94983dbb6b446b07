//! Version comparison for runtime requirements

use anyhow::Result;
use semver::Version;

/// Warn when `found` is older than `minimum`
///
/// Unparseable versions produce no warning.
pub fn check_minimum(name: &str, found: &str, minimum: &str) -> Option<String> {
    let found_ver = parse_version(found).ok()?;
    let minimum_ver = parse_version(minimum).ok()?;

    if found_ver < minimum_ver {
        Some(format!(
            "{} {} is older than the supported minimum {}. Project generators may fail; consider upgrading.",
            name, found, minimum
        ))
    } else {
        None
    }
}

/// Parse version string, handling various formats
pub fn parse_version(version_str: &str) -> Result<Version> {
    // Remove leading 'v' if present
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}
