//! Infrastructure adapters for Govite.
//!
//! Implements the driven ports defined in `govite_core::application::ports`:
//!
//! - [`LocalFilesystem`] — `std::fs`-backed filesystem, including the
//!   recursive, mode-preserving tree copier
//! - [`JsonLedgerStore`] — the per-user installed-module ledger file
//! - [`BuiltinRenderer`] — the shipped Go + Vite project templates
//! - [`SystemPackageManager`] — `go` / `npm` subprocess invocation

pub mod filesystem;
pub mod ledger;
pub mod package_manager;
pub mod renderer;

pub use filesystem::LocalFilesystem;
pub use ledger::JsonLedgerStore;
pub use package_manager::{SystemPackageManager, Toolchain};
pub use renderer::BuiltinRenderer;
