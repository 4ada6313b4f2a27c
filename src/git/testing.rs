//! Throwaway repositories for tests

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// A git repository in a temporary directory, with a fixed identity so
/// commits can be created without any user configuration.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        let repo = Self {
            dir: TempDir::new().unwrap(),
        };
        repo.git(&["init", "-q"]);
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run git in the repository and return trimmed stdout
    pub fn git(&self, args: &[&str]) -> String {
        self.git_at(args, "2024-01-01 00:00:00 +0000")
    }

    fn git_at(&self, args: &[&str], date: &str) -> String {
        let output = Command::new("git")
            .args(["-c", "commit.gpgsign=false"])
            .args(args)
            .current_dir(self.path())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_AUTHOR_NAME", "Test")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "Test")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .env("GIT_AUTHOR_DATE", date)
            .env("GIT_COMMITTER_DATE", date)
            .output()
            .unwrap();

        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Write `file`, commit it at `date` and return the new commit id
    pub fn commit(&self, file: &str, content: &str, date: &str) -> String {
        fs::write(self.path().join(file), content).unwrap();
        self.git(&["add", file]);
        self.git_at(&["commit", "-q", "-m", &format!("update {file}")], date);
        self.git(&["rev-parse", "HEAD"])
    }
}
