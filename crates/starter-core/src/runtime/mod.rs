//! Runtime detection and tool management
//!
//! This module provides:
//! - Node.js detection with a minimum-version advisory
//! - Generic tool management for package managers like yarn

pub mod check;
pub mod tool;
pub mod version;

pub use check::{check_node, check_runtimes, RuntimeInfo};
pub use tool::ToolManager;
