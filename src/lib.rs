//! branch-diff - inspect and compare git branches over time
//!
//! A library behind the `branch-diff` CLI providing:
//! - Branch enumeration (local or remote-tracking)
//! - Resolution of "the commit on this branch as of that date"
//! - Diffs between two points in history, for one or every branch

pub mod config;
pub mod diff;
pub mod error;
pub mod git;
pub mod report;
pub mod resolve;

pub use config::{DiffConfig, FindConfig, ListConfig, Settings};
pub use diff::{BranchOutcome, ComparisonRequest, DiffOrchestrator, DiffSummary, DiffTarget, Outcome};
pub use error::{BranchDiffError, Endpoint, Result};
pub use git::{list_branches, GitCommand, GitExecutor, RefScope, SystemGit};
pub use resolve::{find_commit, resolve, CommitRef, ResolutionInput};
