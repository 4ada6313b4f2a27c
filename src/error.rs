use std::fmt;

use thiserror::Error;

/// Which side of a comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Starting,
    Ending,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Starting => write!(f, "starting"),
            Endpoint::Ending => write!(f, "ending"),
        }
    }
}

/// Errors raised while listing, resolving or comparing branches.
#[derive(Error, Debug)]
pub enum BranchDiffError {
    #[error("Either {endpoint} commit or {endpoint} date and branch should be supplied")]
    MissingResolutionInput { endpoint: Endpoint },
    #[error("`{command}` failed: {detail}")]
    ExternalProcessFailure { command: String, detail: String },
    #[error("No commit on {branch} at or before {date}")]
    NoCommitBefore { branch: String, date: String },
    #[error("Invalid configuration. {0}")]
    Config(String),
    #[error("Error serializing json. {0}")]
    Json(#[from] serde_json::Error),
    #[error("Errored while writing output. {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BranchDiffError>;
