//! Starter Core - Shared library for React and Next.js starter scaffolding
//!
//! This library turns a handful of answers (framework, project name, styling,
//! state management) into a ready-to-code frontend project by delegating to
//! the official generators and package manager, then writing config files.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Decision** - Pure mapping from [`Answers`] to a [`Plan`] of commands and files
//! - **Layer 2: Execution** - [`CommandRunner`], [`DependencyProbe`] and the file materializer,
//!   composed by [`Scaffolder`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use starter_core::{build_plan, Answers, Framework, ProjectName, Scaffolder, Stack, StateManagement, Styling};
//!
//! let name = ProjectName::parse("shop")?;
//! let scaffolder = Scaffolder::system(std::env::current_dir()?);
//! let detected = scaffolder.generate_base(Framework::ViteReact, &name)?;
//!
//! let answers = Answers::new(name, Stack::ViteReact { styling: Styling::Tailwind }, StateManagement::Zustand);
//! let plan = build_plan(&answers, &detected);
//! scaffolder.execute(&answers.project_name, &plan)?;
//! scaffolder.materialize(&answers.project_name, &plan).await?;
//! ```

pub mod answers;
pub mod detect;
pub mod error;
pub mod exec;
pub mod materialize;
pub mod plan;
pub mod product;
pub mod runtime;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{
    Answers, Framework, ProjectName, Stack, StateManagement, StyledComponentsChoice, Styling,
};
pub use detect::{DependencyProbe, DetectedDependencies, PackageJsonProbe};
pub use error::ScaffoldError;
pub use exec::{CommandRunner, ShellRunner};
pub use plan::{build_plan, FileWrite, Plan, ShellCommand, WriteMode};
pub use product::ProductConfig;
pub use workflow::Scaffolder;

#[cfg(feature = "tui")]
pub use tui::run;
