//! Scaffolding plan: what to run and what to write
//!
//! This module provides:
//! - Plan types (ShellCommand, FileWrite, WriteMode)
//! - The decision table mapping answers to a plan
//! - Embedded file templates

pub mod files;
pub mod table;

use crate::answers::Answers;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

pub use table::{asks_styled_components, asks_styling, base_command, build_plan};

/// A single command line, executed through the platform shell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShellCommand(String);

impl ShellCommand {
    pub fn new(command: impl Into<String>) -> Self {
        Self(command.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a file is written into the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    /// Replace any existing content
    Overwrite,
    /// Add to the end of the file, creating it if missing
    Append,
}

/// A file to materialize, relative to the project directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileWrite {
    pub path: PathBuf,
    pub contents: String,
    pub mode: WriteMode,

    /// Shown as "<label> configuration generated." once written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
}

impl FileWrite {
    pub fn overwrite(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
            mode: WriteMode::Overwrite,
            label: None,
        }
    }

    pub fn append(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
            mode: WriteMode::Append,
            label: None,
        }
    }

    pub fn labeled(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }
}

/// Ordered commands followed by file writes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub commands: Vec<ShellCommand>,
    pub files: Vec<FileWrite>,
}

impl Plan {
    pub fn file(&self, path: &str) -> Option<&FileWrite> {
        self.files.iter().find(|f| f.path == std::path::Path::new(path))
    }

    pub fn has_command(&self, command: &str) -> bool {
        self.commands.iter().any(|c| c.as_str() == command)
    }
}

#[derive(Serialize)]
struct Report<'a> {
    answers: &'a Answers,
    base_command: ShellCommand,
    plan: &'a Plan,
}

/// Render answers, base command and plan as YAML for `--dry-run`
pub fn render_report(answers: &Answers, plan: &Plan) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&Report {
        answers,
        base_command: base_command(answers.framework(), answers.project_name.as_str()),
        plan,
    })
}
