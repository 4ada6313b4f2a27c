//! Console output for branch listings and diff runs

use colored::Colorize;
use std::io::Write;

use crate::diff::{BranchOutcome, DiffSummary};
use crate::error::{BranchDiffError, Result};

/// Print branch names one per line, or as a JSON array
pub fn write_branch_list(out: &mut dyn Write, branches: &[String], json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(branches)?;
        writeln!(out, "{rendered}")?;
    } else {
        for branch in branches {
            writeln!(out, "{branch}")?;
        }
    }
    Ok(())
}

pub fn write_branch_header(out: &mut dyn Write, label: &str) -> Result<()> {
    writeln!(out, "{} {}", "Listing changes for".bold(), label.bold())?;
    Ok(())
}

pub fn write_branch_error(out: &mut dyn Write, error: &BranchDiffError) -> Result<()> {
    writeln!(out, "{} {}", "Error:".red().bold(), error.to_string().red())?;
    Ok(())
}

pub fn write_diff_output(out: &mut dyn Write, output: &str, name_only: bool) -> Result<()> {
    if name_only {
        write!(out, "{}", output.green())?;
    } else {
        write!(out, "{output}")?;
    }
    if !output.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

/// Closing summary, only shown when more than one branch was compared
pub fn write_summary(out: &mut dyn Write, summary: &DiffSummary) -> Result<()> {
    let total = summary.outcomes.len();
    if total < 2 {
        return Ok(());
    }

    writeln!(out, "{}", "─".repeat(50).dimmed())?;

    let failed: Vec<&BranchOutcome> = summary.failed().collect();
    if failed.is_empty() {
        writeln!(
            out,
            "{} Compared {} branch(es)",
            "✓".green().bold(),
            total
        )?;
    } else {
        writeln!(
            out,
            "{} {}/{} branch(es) could not be compared",
            "✗".red().bold(),
            failed.len(),
            total
        )?;
        for outcome in failed {
            writeln!(out, "  {} {}", "•".red(), outcome.target.label())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf: Vec<u8> = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_branch_list_plain_and_json() {
        let branches = vec!["main".to_string(), "dev".to_string()];

        assert_eq!(
            render(|out| write_branch_list(out, &branches, false)),
            "main\ndev\n"
        );

        let json = render(|out| write_branch_list(out, &branches, true));
        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, branches);
    }

    #[test]
    fn test_diff_output_ends_with_newline() {
        assert_eq!(render(|out| write_diff_output(out, "a.txt", true)), "a.txt\n");
        assert_eq!(render(|out| write_diff_output(out, "", false)), "\n");
    }
}
