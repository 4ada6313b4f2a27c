//! Typed git invocations
//!
//! Every query the tool issues is described as a [`GitCommand`]: the kind of
//! operation plus its argument vector. Nothing is joined into shell text, so
//! branch names and dates reach git exactly as the user typed them.

use serde::Deserialize;
use std::fmt;

/// Which reference namespace to enumerate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefScope {
    #[default]
    Local,
    Remote,
}

impl RefScope {
    pub fn from_remotes_flag(remotes: bool) -> Self {
        if remotes {
            RefScope::Remote
        } else {
            RefScope::Local
        }
    }

    fn namespace(self) -> &'static str {
        match self {
            RefScope::Local => "refs/heads",
            RefScope::Remote => "refs/remotes",
        }
    }
}

/// Kind of git operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitOperation {
    ListRefs,
    RevList,
    Diff,
    Checkout,
    Pull,
}

/// A single git invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    pub operation: GitOperation,
    pub args: Vec<String>,
}

impl GitCommand {
    /// `git for-each-ref --format=%(refname:short) <namespace>`
    pub fn list_refs(scope: RefScope) -> Self {
        Self {
            operation: GitOperation::ListRefs,
            args: vec![
                "for-each-ref".to_string(),
                "--format=%(refname:short)".to_string(),
                scope.namespace().to_string(),
            ],
        }
    }

    /// `git rev-list -n 1 [--before=<date>] <branch>`
    pub fn latest_commit(branch: &str, before: Option<&str>) -> Self {
        let mut args = vec!["rev-list".to_string(), "-n".to_string(), "1".to_string()];
        if let Some(date) = before {
            args.push(format!("--before={date}"));
        }
        args.push(branch.to_string());

        Self {
            operation: GitOperation::RevList,
            args,
        }
    }

    /// `git diff <start> <end> --color [--name-only]`
    pub fn diff(start: &str, end: &str, name_only: bool) -> Self {
        let mut args = vec![
            "diff".to_string(),
            start.to_string(),
            end.to_string(),
            "--color".to_string(),
        ];
        if name_only {
            args.push("--name-only".to_string());
        }

        Self {
            operation: GitOperation::Diff,
            args,
        }
    }

    pub fn checkout(branch: &str) -> Self {
        Self {
            operation: GitOperation::Checkout,
            args: vec!["checkout".to_string(), branch.to_string()],
        }
    }

    pub fn pull() -> Self {
        Self {
            operation: GitOperation::Pull,
            args: vec!["pull".to_string()],
        }
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git {}", self.args.join(" "))
    }
}
