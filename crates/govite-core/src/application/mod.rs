//! Application layer for Govite.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, ImportService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Manifest logic**: classification and name extraction over the
//!   filesystem port
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod manifest;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ImportService, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, LedgerStore, ProjectRenderer};

pub use error::ApplicationError;
