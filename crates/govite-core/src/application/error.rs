//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The import source path does not exist.
    #[error("Source path '{path}' does not exist")]
    SourceNotFound { path: PathBuf },

    /// Neither go.mod nor package.json was found in the source directory.
    #[error("Cannot determine module type for '{path}'")]
    UnrecognizedType { path: PathBuf },

    /// A manifest was present but no usable name field could be extracted.
    #[error("Cannot determine module name from manifest in '{path}'")]
    NameExtractionFailed { path: PathBuf },

    /// Strict import refused: the destination already exists.
    #[error("Module '{name}' already exists at {path}")]
    ModuleExists { name: String, path: PathBuf },

    /// Recursive tree copy aborted. No partial-copy rollback is performed;
    /// the destination may be left partially populated.
    #[error("Copying '{src}' to '{dst}' failed: {reason}")]
    CopyFailed {
        src: PathBuf,
        dst: PathBuf,
        reason: String,
    },

    /// The ledger backing file exists but failed to parse. An absent file is
    /// NOT this error — it loads as an empty ledger.
    #[error("Ledger file '{path}' is corrupt: {reason}")]
    LedgerCorrupt { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Project already exists at the target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// A package-manager subprocess exited non-zero or could not be spawned.
    #[error("Command '{command}' failed: {reason}")]
    CommandFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceNotFound { path } => vec![
                format!("No directory found at: {}", path.display()),
                "Check the path for typos".into(),
            ],
            Self::UnrecognizedType { .. } => vec![
                "Ensure the directory contains go.mod or package.json".into(),
                "Only Go and Node.js modules are recognized".into(),
            ],
            Self::NameExtractionFailed { path } => vec![
                format!("Manifest in {} has no usable name", path.display()),
                "go.mod needs a 'module <path>' line".into(),
                "package.json needs a \"name\" field".into(),
            ],
            Self::ModuleExists { name, .. } => vec![
                format!("A module named '{}' is already installed", name),
                "Use 'govite install-local' to overwrite it".into(),
            ],
            Self::CopyFailed { dst, .. } => vec![
                format!("The destination {} may be partially populated", dst.display()),
                "Check file permissions and available disk space".into(),
            ],
            Self::LedgerCorrupt { path, .. } => vec![
                format!("Inspect or delete the ledger file: {}", path.display()),
                "A deleted ledger is recreated empty on the next install".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Run '{}' by hand to see its full output", command),
                "Check that the tool is installed and on PATH".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceNotFound { .. } => ErrorCategory::NotFound,
            Self::UnrecognizedType { .. } => ErrorCategory::Validation,
            Self::NameExtractionFailed { .. } => ErrorCategory::Validation,
            Self::ModuleExists { .. } => ErrorCategory::Validation,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::CopyFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::CommandFailed { .. } => ErrorCategory::Internal,
            Self::LedgerCorrupt { .. } => ErrorCategory::Configuration,
        }
    }
}
