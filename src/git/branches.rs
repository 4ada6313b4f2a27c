//! Branch enumeration

use std::path::Path;

use super::command::{GitCommand, RefScope};
use super::executor::GitExecutor;
use crate::error::Result;

/// List branch names in `scope`, in the order git reports them.
///
/// Any git failure is returned as-is; there is no partial list.
pub fn list_branches(
    git: &dyn GitExecutor,
    directory: Option<&Path>,
    scope: RefScope,
) -> Result<Vec<String>> {
    let stdout = git.execute(&GitCommand::list_refs(scope), directory)?;
    Ok(parse_branch_list(&stdout))
}

fn parse_branch_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
