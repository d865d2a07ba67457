//! Domain-layer errors (business rule violations).

use thiserror::Error;

/// Errors raised by pure domain logic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A project name failed validation.
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// A rendered file set contained no entries.
    #[error("Rendered file set is empty")]
    EmptyRenderSet,

    /// The same relative path appeared twice in a rendered file set.
    #[error("Duplicate path in rendered file set: {path}")]
    DuplicatePath { path: String },

    /// Rendered file sets must only contain project-relative paths.
    #[error("Absolute path not allowed in rendered file set: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { reason, .. } => vec![
                format!("Project name is invalid: {reason}"),
                "Use alphanumeric characters, hyphens, and underscores".into(),
            ],
            Self::EmptyRenderSet => vec![
                "The project renderer produced no files".into(),
                "This indicates a broken template set".into(),
            ],
            Self::DuplicatePath { path } => {
                vec![format!("The path '{path}' was rendered more than once")]
            }
            Self::AbsolutePathNotAllowed { path } => {
                vec![format!("'{path}' must be relative to the project root")]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::EmptyRenderSet | Self::DuplicatePath { .. } => ErrorCategory::Internal,
            Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

/// Domain error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
