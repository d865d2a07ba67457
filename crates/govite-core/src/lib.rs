//! Govite Core
//!
//! This crate provides the domain and application layers for the Govite
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           govite-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ScaffoldService, ImportService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, LedgerStore, Renderer)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     govite-adapters (Infrastructure)    │
//! │ (LocalFilesystem, JsonLedgerStore, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ProjectKind, Ledger, RenderedFileSet)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use govite_core::{
//!     application::ImportService,
//!     domain::ImportMode,
//! };
//!
//! # fn demo(fs: Box<dyn govite_core::application::Filesystem>,
//! #         ledger: Box<dyn govite_core::application::LedgerStore>) {
//! let service = ImportService::new(fs, ledger, std::env::current_dir().unwrap());
//! let descriptor = service
//!     .import("./my-module".as_ref(), ImportMode::Overwrite)
//!     .unwrap();
//! println!("imported {}", descriptor.name);
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Filesystem, ImportService, LedgerStore, ProjectRenderer, ScaffoldService,
    };
    pub use crate::domain::{
        ImportMode, Ledger, ModuleDescriptor, ProjectConfig, ProjectKind, RenderedFileSet,
    };
    pub use crate::error::{GoviteError, GoviteResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
