//! External command execution.
//!
//! All repository information comes from the `git` binary. [`CommandRunner`] is the
//! seam between the status cache and the process boundary: [`GitCommandRunner`] spawns
//! real processes, tests substitute a scripted runner.
//!
//! Failures never propagate out of [`CommandRunner::run`]. A missing binary, a spawn
//! error, a non-zero exit or blank output all yield an empty string, which callers
//! read as "no information available".

use crate::core::error::{GitIndicatorError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs an external command and returns its trimmed stdout.
pub trait CommandRunner {
    /// Execute `command` (program followed by its arguments), optionally inside
    /// `working_dir`. Returns an empty string on any failure.
    fn run(&self, command: &[&str], working_dir: Option<&Path>) -> String;
}

/// Process-backed runner used outside of tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCommandRunner;

impl GitCommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Fallible variant of [`CommandRunner::run`], keeping the failure reason.
    pub fn try_run(&self, command: &[&str], working_dir: Option<&Path>) -> Result<String> {
        let display = command.join(" ");
        let (program, args) = command
            .split_first()
            .ok_or_else(|| GitIndicatorError::empty_output(display.clone()))?;

        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null()).stderr(Stdio::null());
        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .map_err(|e| GitIndicatorError::command_spawn(&display, e))?;

        if !output.status.success() {
            return Err(GitIndicatorError::command_exited(
                &display,
                output.status.code(),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let trimmed = stdout.trim_end_matches(['\n', '\r']);
        if trimmed.is_empty() {
            return Err(GitIndicatorError::empty_output(&display));
        }

        Ok(trimmed.to_string())
    }
}

impl CommandRunner for GitCommandRunner {
    fn run(&self, command: &[&str], working_dir: Option<&Path>) -> String {
        match self.try_run(command, working_dir) {
            Ok(output) => output,
            Err(e) => {
                log::debug!("Command yielded no information: {e}");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_returns_empty() {
        let runner = GitCommandRunner::new();
        let output = runner.run(&["definitely-not-a-real-binary-xyz", "status"], None);
        assert!(output.is_empty());
    }

    #[test]
    fn test_missing_binary_reports_spawn_error() {
        let runner = GitCommandRunner::new();
        let result = runner.try_run(&["definitely-not-a-real-binary-xyz"], None);
        assert!(matches!(
            result,
            Err(GitIndicatorError::CommandSpawn { .. })
        ));
    }

    #[test]
    fn test_empty_command_is_an_error() {
        let runner = GitCommandRunner::new();
        assert!(runner.try_run(&[], None).is_err());
        assert!(runner.run(&[], None).is_empty());
    }

    #[test]
    fn test_git_outside_repository_returns_empty() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let runner = GitCommandRunner::new();
        let output = runner.run(
            &["git", "rev-parse", "--show-toplevel"],
            Some(temp_dir.path()),
        );
        assert!(output.is_empty());
    }

    #[test]
    fn test_trailing_newline_is_trimmed() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        std::process::Command::new("git")
            .args(["init"])
            .current_dir(temp_dir.path())
            .output()
            .unwrap();

        let runner = GitCommandRunner::new();
        let output = runner.run(
            &["git", "rev-parse", "--show-toplevel"],
            Some(temp_dir.path()),
        );
        assert!(!output.is_empty());
        assert!(!output.ends_with('\n'));
    }
}
