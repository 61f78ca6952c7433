//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not domain
//! rules. Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materializing a target.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A filesystem operation failed (permissions, disk, ...).
    #[error("Failed to {operation} {path}: {reason}")]
    Filesystem {
        path: PathBuf,
        operation: &'static str,
        reason: String,
    },

    /// A path component that must be a directory is an existing file, or a
    /// file must be written where a directory already exists.
    #[error("Path conflict at {path}: {reason}")]
    PathConflict { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned by a panicking thread.
    #[error("Filesystem adapter state is poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Directories created before the failure are left in place".into(),
            ],
            Self::PathConflict { path, .. } => vec![
                format!("Something other than a directory already exists at {}", path.display()),
                "Move or delete the conflicting file and run again".into(),
                "Or choose a different target name".into(),
            ],
            Self::LockPoisoned => vec!["This is a bug in tezgen, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Filesystem,
            Self::PathConflict { .. } => ErrorCategory::Conflict,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
