//! Runtime detection for Node.js

use super::version;
use anyhow::Result;
use std::process::Command;

/// Oldest Node.js release supported by current create-vite and create-next-app
pub const MIN_NODE_VERSION: &str = "18.18.0";

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
    /// Oldest version that is known to work, if there is one
    pub minimum_version: Option<&'static str>,
}

impl RuntimeInfo {
    /// Warning when the detected version is older than the supported minimum
    pub fn version_warning(&self) -> Option<String> {
        let found = self.version.as_deref()?;
        version::check_minimum(self.name, found, self.minimum_version?)
    }
}

/// Run `<binary> --version` and report what was found
fn probe(name: &'static str, binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
                minimum_version: None,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
            minimum_version: None,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    RuntimeInfo {
        minimum_version: Some(MIN_NODE_VERSION),
        ..probe("Node.js", "node")
    }
}

/// Check if npx is available
pub fn check_npx() -> RuntimeInfo {
    #[cfg(windows)]
    let binary = "npx.cmd";
    #[cfg(not(windows))]
    let binary = "npx";
    probe("npx", binary)
}

/// Check the runtimes every generator needs; fails when any is missing
pub fn check_runtimes() -> Result<Vec<RuntimeInfo>> {
    let mut missing = Vec::new();
    let mut results = Vec::new();

    for runtime in [check_node(), check_npx()] {
        if runtime.available {
            results.push(runtime);
        } else {
            missing.push(runtime.name);
        }
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required runtimes:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {} (install from https://nodejs.org)", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_old_node_gets_warning() {
        let node = RuntimeInfo {
            name: "Node.js",
            version: Some("v16.20.2".to_string()),
            available: true,
            minimum_version: Some(MIN_NODE_VERSION),
        };
        let warning = node.version_warning().unwrap();
        assert!(warning.contains("18.18.0"));
        assert!(warning.contains("v16.20.2"));
    }

    #[test]
    fn test_current_node_has_no_warning() {
        let node = RuntimeInfo {
            name: "Node.js",
            version: Some("v20.11.1".to_string()),
            available: true,
            minimum_version: Some(MIN_NODE_VERSION),
        };
        assert!(node.version_warning().is_none());
    }

    #[test]
    fn test_missing_node_has_no_warning() {
        let node = RuntimeInfo {
            name: "Node.js",
            version: None,
            available: false,
            minimum_version: Some(MIN_NODE_VERSION),
        };
        assert!(node.version_warning().is_none());
    }

    #[test]
    fn test_runtime_without_minimum_has_no_warning() {
        let npx = RuntimeInfo {
            name: "npx",
            version: Some("10.2.4".to_string()),
            available: true,
            minimum_version: None,
        };
        assert!(npx.version_warning().is_none());
    }

    #[test]
    fn test_probe_of_unknown_binary_is_unavailable() {
        let info = probe("Nothing", "definitely-not-a-real-binary-4f2a");
        assert!(!info.available);
        assert!(info.version.is_none());
    }
}
