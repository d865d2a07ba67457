//! Local module import pipeline.
//!
//! Orchestrates sniff → extract → resolve → copy → record for one source
//! directory. Each step is a hard precondition for the next; there is no
//! rollback on copy or bookkeeping failure — a partially-populated
//! destination is accepted, not hidden.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        manifest,
        ports::{Filesystem, LedgerStore},
        ApplicationError,
    },
    domain::{ImportMode, ModuleDescriptor},
    error::GoviteResult,
};

/// Imports local module directories into the scaffold's module tree.
pub struct ImportService {
    fs: Box<dyn Filesystem>,
    ledger: Box<dyn LedgerStore>,
    /// Ledger key: the working directory this invocation operates in.
    working_dir: PathBuf,
}

impl ImportService {
    /// Create a new import service with the given adapters.
    pub fn new(
        fs: Box<dyn Filesystem>,
        ledger: Box<dyn LedgerStore>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            ledger,
            working_dir: working_dir.into(),
        }
    }

    /// Import one source directory under the given overwrite policy.
    ///
    /// Step sequence (each a hard precondition for the next):
    /// 1. source must exist
    /// 2. classify by manifest presence; `Unknown` fails
    /// 3. extract the module name; empty fails
    /// 4. resolve the destination under the modules base dir
    /// 5. strict mode refuses an existing destination before copying
    /// 6. recursive copy (overwrite mode merges file-by-file; stale files
    ///    from a previous version are never removed)
    /// 7. best-effort ledger record, tagged by provenance
    #[instrument(skip(self), fields(source = %source.display(), ?mode))]
    pub fn import(&self, source: &Path, mode: ImportMode) -> GoviteResult<ModuleDescriptor> {
        if !self.fs.exists(source) {
            return Err(ApplicationError::SourceNotFound {
                path: source.to_path_buf(),
            }
            .into());
        }

        let kind = manifest::classify(self.fs.as_ref(), source);
        if !kind.is_known() {
            return Err(ApplicationError::UnrecognizedType {
                path: source.to_path_buf(),
            }
            .into());
        }
        debug!(%kind, "module type detected");

        let name = manifest::extract_name(self.fs.as_ref(), source, kind);
        if name.is_empty() {
            return Err(ApplicationError::NameExtractionFailed {
                path: source.to_path_buf(),
            }
            .into());
        }

        let Some(destination) = kind.module_destination(&name) else {
            // kind.is_known() was checked above; a None here is a bug.
            return Err(crate::error::GoviteError::Internal {
                message: format!("no destination for known kind {kind}"),
            });
        };

        if mode == ImportMode::StrictNoOverwrite && self.fs.exists(&destination) {
            return Err(ApplicationError::ModuleExists {
                name,
                path: destination,
            }
            .into());
        }

        info!(module = %name, destination = %destination.display(), "copying module");
        self.fs.copy_tree(source, &destination).map_err(|e| {
            ApplicationError::CopyFailed {
                src: source.to_path_buf(),
                dst: destination.clone(),
                reason: e.to_string(),
            }
        })?;

        self.record_best_effort(&mode.ledger_identifier(&name));

        Ok(ModuleDescriptor {
            source_path: source.to_path_buf(),
            kind,
            name,
            destination,
        })
    }

    /// Ledger bookkeeping is secondary to the copy itself: a corrupt or
    /// unwritable ledger is logged and skipped, never failing the import.
    fn record_best_effort(&self, identifier: &str) {
        let mut ledger = match self.ledger.load() {
            Ok(l) => l,
            Err(e) => {
                warn!(error = %e, "skipping ledger bookkeeping");
                return;
            }
        };

        ledger.record(&self.working_dir.display().to_string(), identifier);

        if let Err(e) = self.ledger.save(&ledger) {
            warn!(error = %e, "failed to save ledger");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
