//! Blocking shell command execution with inherited stdio

use crate::error::ScaffoldError;
use crate::plan::ShellCommand;
use colored::Colorize;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs one command to completion in a working directory
pub trait CommandRunner {
    fn run(&self, command: &ShellCommand, cwd: &Path) -> Result<(), ScaffoldError>;
}

/// Runs commands through the platform shell, streaming output to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    fn shell(command: &ShellCommand) -> Command {
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command.as_str());
            cmd
        }
        #[cfg(not(windows))]
        {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command.as_str());
            cmd
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &ShellCommand, cwd: &Path) -> Result<(), ScaffoldError> {
        println!("{} {}", "Running:".dimmed(), command.as_str().yellow());

        let status = Self::shell(command)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ScaffoldError::CommandSpawn {
                command: command.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }
}

/// Run commands in order, stopping at the first failure
pub fn run_all<R: CommandRunner + ?Sized>(
    runner: &R,
    commands: &[ShellCommand],
    cwd: &Path,
) -> Result<(), ScaffoldError> {
    for command in commands {
        runner.run(command, cwd)?;
    }
    Ok(())
}
