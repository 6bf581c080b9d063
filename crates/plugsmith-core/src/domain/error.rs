// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside reports and CLI errors)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A name normalized to the empty string where a name is required.
    #[error("{slot} is empty after normalization")]
    EmptyIdentifier { slot: &'static str },

    /// Plugin and model projects would land in the same directory.
    #[error("plugin and model share the name '{name}'")]
    NameCollision { name: String },

    #[error("Invalid generation plan: {0}")]
    InvalidPlan(String),

    // ========================================================================
    // Artifact Set Violations
    // ========================================================================
    #[error("Duplicate artifact path: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyIdentifier { slot } => vec![
                format!("Provide a non-empty {slot}"),
                "Letters, digits and '_' are kept; anything else becomes '_'".into(),
            ],
            Self::NameCollision { name } => vec![
                format!("Both projects would be generated into PluginsSource/{name}"),
                "Pick a different model name, e.g. --model-name <Name>Model".into(),
            ],
            Self::InvalidPlan(msg) => vec![format!("Details: {msg}")],
            _ => vec!["This is a bug in the generator, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyIdentifier { .. } | Self::NameCollision { .. } | Self::InvalidPlan(_) => {
                ErrorCategory::Validation
            }
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
