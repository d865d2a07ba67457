//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `govite-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File inspection, writes, and tree copies
//!   - `LedgerStore`: Installed-module ledger persistence
//!   - `ProjectRenderer`: Scaffold template rendering
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

use std::path::Path;

use crate::domain::{Ledger, ProjectConfig, RenderedFileSet};
use crate::error::GoviteResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `govite_adapters::filesystem::LocalFilesystem` (production)
/// - in-memory test doubles in unit tests
pub trait Filesystem: Send + Sync {
    /// Check if a path exists. A stat failure is indistinguishable from
    /// absence; this method never errors.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> GoviteResult<String>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GoviteResult<()>;

    /// Write content to a file, create-or-truncate.
    fn write_file(&self, path: &Path, content: &str) -> GoviteResult<()>;

    /// Recursively copy a directory tree, preserving file permission modes.
    ///
    /// Fail-fast: the first I/O error aborts the whole operation; the
    /// destination may be left partially populated.
    fn copy_tree(&self, src: &Path, dst: &Path) -> GoviteResult<()>;
}

/// Port for ledger persistence.
///
/// Implemented by:
/// - `govite_adapters::ledger::JsonLedgerStore` (production)
pub trait LedgerStore: Send + Sync {
    /// Load the full ledger. An absent backing file yields an empty ledger;
    /// a present-but-unparseable file yields `LedgerCorrupt` — "never
    /// existed" and "corrupted" are distinct failure kinds by design.
    fn load(&self) -> GoviteResult<Ledger>;

    /// Serialize and rewrite the whole ledger, replacing the backing file
    /// in one step (no incremental/append format).
    fn save(&self, ledger: &Ledger) -> GoviteResult<()>;
}

/// Port for rendering the scaffold file set.
///
/// Implemented by:
/// - `govite_adapters::renderer::BuiltinRenderer` (the shipped templates)
pub trait ProjectRenderer: Send + Sync {
    /// Produce the full path → content mapping for a new project.
    fn render(&self, config: &ProjectConfig, output_root: &Path) -> GoviteResult<RenderedFileSet>;
}
