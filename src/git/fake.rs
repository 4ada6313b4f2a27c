//! Scripted git executor for tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::command::GitCommand;
use super::executor::{failure_detail, GitExecutor};
use crate::error::{BranchDiffError, Result};

/// A recorded invocation: rendered command plus the directory it ran in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub command: String,
    pub directory: Option<PathBuf>,
}

/// Answers commands from a table keyed by their rendered form.
///
/// Commands missing from the table fail like a non-zero git exit.
#[derive(Default)]
pub struct FakeGit {
    responses: HashMap<String, std::result::Result<String, String>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(mut self, command: &str, stdout: &str) -> Self {
        self.responses
            .insert(command.to_string(), Ok(stdout.to_string()));
        self
    }

    pub fn fail(mut self, command: &str, stderr: &str) -> Self {
        self.responses
            .insert(command.to_string(), Err(stderr.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.command.clone()).collect()
    }
}

impl GitExecutor for FakeGit {
    fn execute(&self, command: &GitCommand, directory: Option<&Path>) -> Result<String> {
        let rendered = command.to_string();
        self.calls.borrow_mut().push(Call {
            command: rendered.clone(),
            directory: directory.map(Path::to_path_buf),
        });

        match self.responses.get(&rendered) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(stderr)) => Err(BranchDiffError::ExternalProcessFailure {
                command: rendered,
                detail: failure_detail(stderr).unwrap_or_else(|| "exited with 1".to_string()),
            }),
            None => Err(BranchDiffError::ExternalProcessFailure {
                command: rendered,
                detail: "unscripted command".to_string(),
            }),
        }
    }
}
