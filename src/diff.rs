//! Diff orchestration across one or many branches
//!
//! For each target the orchestrator optionally refreshes the branch, resolves
//! both endpoints, composes a `git diff` and reports the result before moving
//! on. A failure for one branch is reported and the loop continues; only the
//! initial branch enumeration can abort a run.

use std::io::Write;
use std::path::Path;

use crate::config::DiffConfig;
use crate::error::{BranchDiffError, Endpoint, Result};
use crate::git::{list_branches, GitCommand, GitExecutor};
use crate::report;
use crate::resolve::{resolve, CommitRef, ResolutionInput};

/// A branch to compare
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffTarget {
    Branch(String),
    /// Whatever is checked out; only explicit commits can resolve here
    Current,
}

impl DiffTarget {
    pub fn branch(&self) -> Option<&str> {
        match self {
            DiffTarget::Branch(name) => Some(name.as_str()),
            DiffTarget::Current => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            DiffTarget::Branch(name) => format!("branch {name}"),
            DiffTarget::Current => "current branch".to_string(),
        }
    }
}

/// A fully resolved comparison, built fresh for every target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    pub start: CommitRef,
    pub end: CommitRef,
    pub name_only: bool,
}

impl ComparisonRequest {
    pub fn to_command(&self) -> GitCommand {
        GitCommand::diff(self.start.as_str(), self.end.as_str(), self.name_only)
    }
}

#[derive(Debug)]
pub enum Outcome {
    Compared(String),
    Failed(BranchDiffError),
}

#[derive(Debug)]
pub struct BranchOutcome {
    pub target: DiffTarget,
    pub outcome: Outcome,
}

impl BranchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Compared(_))
    }
}

/// Everything a run produced, in processing order
#[derive(Debug, Default)]
pub struct DiffSummary {
    pub outcomes: Vec<BranchOutcome>,
}

impl DiffSummary {
    pub fn failed(&self) -> impl Iterator<Item = &BranchOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed().next().is_none()
    }
}

pub struct DiffOrchestrator<'a> {
    git: &'a dyn GitExecutor,
    config: &'a DiffConfig,
}

impl<'a> DiffOrchestrator<'a> {
    pub fn new(git: &'a dyn GitExecutor, config: &'a DiffConfig) -> Self {
        Self { git, config }
    }

    fn directory(&self) -> Option<&Path> {
        self.config.directory.as_deref()
    }

    /// Branches to compare. Enumeration failures abort the run.
    pub fn select_targets(&self) -> Result<Vec<DiffTarget>> {
        if self.config.all {
            let branches = list_branches(self.git, self.directory(), self.config.scope)?;
            return Ok(branches.into_iter().map(DiffTarget::Branch).collect());
        }

        Ok(vec![match &self.config.branch {
            Some(name) => DiffTarget::Branch(name.clone()),
            None => DiffTarget::Current,
        }])
    }

    /// Compare every target, writing progress and results to `out`
    pub fn run(&self, out: &mut dyn Write) -> Result<DiffSummary> {
        let targets = self.select_targets()?;
        let mut summary = DiffSummary::default();

        for target in targets {
            report::write_branch_header(out, &target.label())?;

            let outcome = match self.compare(&target) {
                Ok(output) => {
                    report::write_diff_output(out, &output, self.config.name_only)?;
                    Outcome::Compared(output)
                }
                Err(err) => {
                    report::write_branch_error(out, &err)?;
                    Outcome::Failed(err)
                }
            };

            summary.outcomes.push(BranchOutcome { target, outcome });
        }

        report::write_summary(out, &summary)?;

        Ok(summary)
    }

    fn compare(&self, target: &DiffTarget) -> Result<String> {
        if self.config.pull {
            self.refresh(target)?;
        }

        let request = self.compose(target)?;
        self.git.execute(&request.to_command(), self.directory())
    }

    /// Check out the branch and bring it up to date with its upstream
    fn refresh(&self, target: &DiffTarget) -> Result<()> {
        if let Some(branch) = target.branch() {
            self.git
                .execute(&GitCommand::checkout(branch), self.directory())?;
        }
        self.git.execute(&GitCommand::pull(), self.directory())?;
        Ok(())
    }

    fn compose(&self, target: &DiffTarget) -> Result<ComparisonRequest> {
        let branch = target.branch();
        let config = self.config;

        let start = resolve(
            self.git,
            self.directory(),
            Endpoint::Starting,
            ResolutionInput::from_parts(
                config.commit1.as_deref(),
                config.start_date.as_deref(),
                branch,
            ),
        )?;
        let end = resolve(
            self.git,
            self.directory(),
            Endpoint::Ending,
            ResolutionInput::from_parts(
                config.commit2.as_deref(),
                config.end_date.as_deref(),
                branch,
            ),
        )?;

        Ok(ComparisonRequest {
            start,
            end,
            name_only: config.name_only,
        })
    }
}
