//! Product configuration trait for CLI binaries
//!
//! Each binary built on this library implements this trait to set its
//! identity and the instructions shown once a project has been created.

use crate::answers::Answers;
use std::path::Path;

/// Configuration trait for CLI products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Whether the yarn package manager must be present before scaffolding
    fn requires_yarn(&self) -> bool {
        true
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, project_dir: &Path, answers: &Answers) -> Vec<String>;
}
