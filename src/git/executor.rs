//! Git process execution

use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::command::GitCommand;
use crate::error::{BranchDiffError, Result};

/// Runs git commands and returns their standard output.
///
/// Implementations may spawn a real git binary or replay scripted answers
/// in tests.
pub trait GitExecutor {
    /// Run `command` inside `directory`, or the process working directory
    /// when `directory` is `None`.
    fn execute(&self, command: &GitCommand, directory: Option<&Path>) -> Result<String>;
}

/// Executor backed by the git binary on this machine
pub struct SystemGit {
    binary: PathBuf,
    verbose: bool,
}

impl SystemGit {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            verbose: false,
        }
    }

    /// Echo each command to stderr before running it
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn log_command(&self, command: &GitCommand, directory: Option<&Path>) {
        if !self.verbose {
            return;
        }

        match directory {
            Some(dir) => eprintln!(
                "{} {} {}",
                "Running Command:".white().bold(),
                command,
                format!("(in {})", dir.display()).dimmed()
            ),
            None => eprintln!("{} {}", "Running Command:".white().bold(), command),
        }
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitExecutor for SystemGit {
    fn execute(&self, command: &GitCommand, directory: Option<&Path>) -> Result<String> {
        self.log_command(command, directory);

        let mut cmd = Command::new(&self.binary);
        cmd.args(&command.args);
        if let Some(dir) = directory {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .map_err(|e| BranchDiffError::ExternalProcessFailure {
                command: command.to_string(),
                detail: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = failure_detail(&stderr)
                .unwrap_or_else(|| format!("exited with {}", output.status));
            return Err(BranchDiffError::ExternalProcessFailure {
                command: command.to_string(),
                detail,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// First non-empty line of git's stderr. Hints and usage text that follow
/// it are dropped so a failure reports on a single line.
pub(crate) fn failure_detail(stderr: &str) -> Option<String> {
    stderr
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
