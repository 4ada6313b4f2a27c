//! Git operations module
//!
//! Provides:
//! - Typed git invocations
//! - The executor seam and its process-backed implementation
//! - Branch enumeration

pub mod branches;
pub mod command;
pub mod executor;

#[cfg(test)]
pub(crate) mod fake;
#[cfg(test)]
pub(crate) mod testing;

pub use branches::list_branches;
pub use command::{GitCommand, GitOperation, RefScope};
pub use executor::{GitExecutor, SystemGit};
