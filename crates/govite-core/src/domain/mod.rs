//! Core domain layer for Govite.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns (manifest reads, tree copies, ledger persistence) are
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq

pub mod error;
pub mod ledger;
pub mod project;
pub mod render;

pub use error::{DomainError, ErrorCategory};
pub use ledger::Ledger;
pub use project::{
    ImportMode, ModuleDescriptor, ProjectConfig, ProjectKind, MODULES_BASE_DIR,
};
pub use render::{DirectoryToCreate, FileToWrite, FsEntry, RenderedFileSet};
