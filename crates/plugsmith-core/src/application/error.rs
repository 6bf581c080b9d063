//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in
//! generation rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::workspace::REQUIRED_DIRS;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Bounded ancestor search found no workspace signature.
    #[error("workspace not found from {start} (searched {max_depth} directories)")]
    WorkspaceNotFound { start: PathBuf, max_depth: usize },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Adapter state access failed (lock poisoned, etc.).
    #[error("Filesystem adapter lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::WorkspaceNotFound { start, .. } => vec![
                format!("No workspace at or above {}", start.display()),
                format!(
                    "Run from the workspace directory (where {}/ exist)",
                    REQUIRED_DIRS.join("/ ")
                ),
                "Or point at it explicitly with --workspace <DIR>".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::StoreLockError => vec!["Internal state is poisoned; try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WorkspaceNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
