use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BranchDiffError, Result};
use crate::git::RefScope;

/// Settings file looked up in the target directory
pub const SETTINGS_FILE: &str = ".branch-diff.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub git: GitSettings,
    pub diff: DiffSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitSettings {
    /// git executable, name or path
    pub binary: String,
    pub verbose: bool,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            binary: "git".to_string(),
            verbose: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffSettings {
    /// Namespace enumerated by `diff --all`
    pub all_scope: RefScope,
    /// Exit non-zero when any branch could not be compared
    pub fail_on_error: bool,
    pub name_only: bool,
}

impl Default for DiffSettings {
    fn default() -> Self {
        Self {
            all_scope: RefScope::Local,
            fail_on_error: true,
            name_only: false,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BranchDiffError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| {
            BranchDiffError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Load `explicit` if given, else the settings file in `directory` (or
    /// the working directory) if one exists, else defaults.
    pub fn discover(explicit: Option<&Path>, directory: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = directory
            .map(|dir| dir.join(SETTINGS_FILE))
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));

        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.git.binary.trim().is_empty() {
            return Err(BranchDiffError::Config(
                "git.binary must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn git_binary(&self) -> PathBuf {
        expand_path(&self.git.binary)
    }
}

/// Expand `~` and `$VAR` in a user-supplied path, keeping the input as-is when
/// a variable is undefined.
pub fn expand_path(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
    }
}

/// Pull the directory out of positionals that may be prefixed by the
/// phrasing words the commands historically accepted (`list branches in`,
/// `diff commits`).
pub fn positional_directory(words: &[String], phrasing: &[&str]) -> Result<Option<PathBuf>> {
    let mut rest = words;
    for word in phrasing {
        match rest.first() {
            Some(first) if first == word => rest = &rest[1..],
            _ => break,
        }
    }

    match rest {
        [] => Ok(None),
        [dir] => Ok(Some(expand_path(dir))),
        _ => Err(BranchDiffError::Config(format!(
            "Unexpected arguments: {}",
            rest.join(" ")
        ))),
    }
}

/// Combine a `--flag` / `--no-flag` pair with the settings default; an
/// explicit flag on the command line wins.
pub fn flag_override(on: bool, off: bool, default: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (false, true) => false,
        (false, false) => default,
    }
}

/// Inputs of the `list` command
#[derive(Debug, Clone)]
pub struct ListConfig {
    pub directory: Option<PathBuf>,
    pub scope: RefScope,
    pub json: bool,
}

/// Inputs of the `find` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindConfig {
    pub date: Option<String>,
    pub branch: String,
    pub directory: Option<PathBuf>,
}

impl FindConfig {
    /// Positionals read as `[date] <branch> [directory]`; two values are
    /// taken as a date and a branch.
    pub fn from_positionals(args: &[String]) -> Result<Self> {
        match args {
            [branch] => Ok(Self {
                date: None,
                branch: branch.clone(),
                directory: None,
            }),
            [date, branch] => Ok(Self {
                date: Some(date.clone()),
                branch: branch.clone(),
                directory: None,
            }),
            [date, branch, dir] => Ok(Self {
                date: Some(date.clone()),
                branch: branch.clone(),
                directory: Some(expand_path(dir)),
            }),
            _ => Err(BranchDiffError::Config(
                "find expects [date] <branch> [directory]".to_string(),
            )),
        }
    }
}

/// Inputs of the `diff` command
#[derive(Debug, Clone, Default)]
pub struct DiffConfig {
    pub directory: Option<PathBuf>,
    pub commit1: Option<String>,
    pub commit2: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub branch: Option<String>,
    pub name_only: bool,
    pub all: bool,
    pub scope: RefScope,
    pub pull: bool,
}
