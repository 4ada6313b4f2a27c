//! Reference resolution
//!
//! Turns what the user supplied for one side of a comparison (an explicit
//! commit, or a date plus a branch) into a concrete commit id.

use std::fmt;
use std::path::Path;

use crate::error::{BranchDiffError, Endpoint, Result};
use crate::git::{GitCommand, GitExecutor};

/// A concrete commit identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRef(String);

impl CommitRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the user supplied for one endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionInput<'a> {
    Explicit(&'a str),
    Dated { date: &'a str, branch: &'a str },
    Missing,
}

impl<'a> ResolutionInput<'a> {
    /// An explicit commit wins over a date; a date needs a branch.
    pub fn from_parts(
        commit: Option<&'a str>,
        date: Option<&'a str>,
        branch: Option<&'a str>,
    ) -> Self {
        match (commit, date, branch) {
            (Some(commit), _, _) => ResolutionInput::Explicit(commit),
            (None, Some(date), Some(branch)) => ResolutionInput::Dated { date, branch },
            _ => ResolutionInput::Missing,
        }
    }
}

/// Resolve one endpoint of a comparison.
///
/// Explicit commits are returned verbatim without asking git whether they
/// exist. Dates are handed to git uninterpreted.
pub fn resolve(
    git: &dyn GitExecutor,
    directory: Option<&Path>,
    endpoint: Endpoint,
    input: ResolutionInput<'_>,
) -> Result<CommitRef> {
    match input {
        ResolutionInput::Explicit(commit) => Ok(CommitRef(commit.to_string())),
        ResolutionInput::Dated { date, branch } => {
            find_commit(git, directory, Some(date), branch)
        }
        ResolutionInput::Missing => Err(BranchDiffError::MissingResolutionInput { endpoint }),
    }
}

/// Most recent commit on `branch` at or before `date`, or the branch tip when
/// no date is given.
pub fn find_commit(
    git: &dyn GitExecutor,
    directory: Option<&Path>,
    date: Option<&str>,
    branch: &str,
) -> Result<CommitRef> {
    let stdout = git.execute(&GitCommand::latest_commit(branch, date), directory)?;

    match stdout.trim() {
        "" => Err(BranchDiffError::NoCommitBefore {
            branch: branch.to_string(),
            date: date.unwrap_or("now").to_string(),
        }),
        id => Ok(CommitRef(id.to_string())),
    }
}
