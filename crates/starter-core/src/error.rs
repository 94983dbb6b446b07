//! Error types for the scaffolding pipeline
//!
//! Failures fall into two groups: a subprocess that could not run or exited
//! unsuccessfully, and filesystem access (manifest reads, file writes).

use std::path::PathBuf;

use thiserror::Error;

/// Message shown when a project name is rejected
pub const INVALID_PROJECT_NAME: &str = "Project name cannot be empty or contain spaces.";

#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Project name was empty or contained whitespace
    #[error("{}", INVALID_PROJECT_NAME)]
    InvalidProjectName,

    /// The shell could not be started for a command
    #[error("Failed to execute `{command}`")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A command ran but exited unsuccessfully
    #[error("Command failed: `{command}` (exit code: {})", display_code(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Failed to read {}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// True for errors raised by a subprocess rather than by file access
    pub fn is_subprocess(&self) -> bool {
        matches!(
            self,
            ScaffoldError::CommandSpawn { .. } | ScaffoldError::CommandFailed { .. }
        )
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "terminated by signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_message() {
        let err = ScaffoldError::CommandFailed {
            command: "yarn add zustand".to_string(),
            code: Some(1),
        };
        assert_eq!(
            err.to_string(),
            "Command failed: `yarn add zustand` (exit code: 1)"
        );
        assert!(err.is_subprocess());
    }

    #[test]
    fn test_signal_termination_message() {
        let err = ScaffoldError::CommandFailed {
            command: "npx husky".to_string(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_io_errors_are_not_subprocess_errors() {
        let err = ScaffoldError::Io {
            path: PathBuf::from("src/index.css"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!err.is_subprocess());
        assert_eq!(err.to_string(), "Failed to write src/index.css");
    }
}
