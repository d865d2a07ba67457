//! Implementation of the `govite uninstall` command.
//!
//! Removes the dependency via the package manager and forgets the ledger
//! entry. For `local:`/`imported:` entries only the ledger entry goes away;
//! copied module directories are never deleted.

use tracing::{instrument, warn};

use govite_adapters::{JsonLedgerStore, LocalFilesystem, SystemPackageManager};
use govite_core::application::{manifest, ports::LedgerStore};

use crate::{
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(module = %args.module))]
pub fn execute(args: crate::cli::UninstallArgs, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir()?;
    let fs = LocalFilesystem::new();

    let kind = manifest::classify(&fs, &cwd);
    if !kind.is_known() {
        return Err(CliError::UnknownProjectType { path: cwd });
    }

    output.info(&format!("Removing {} ({} project)...", args.module, kind))?;
    SystemPackageManager::new().uninstall(kind, &cwd, &args.module)?;

    forget_in_ledger(&cwd, &args.module);

    output.success(&format!("Removed {}", args.module))?;
    Ok(())
}

/// Best-effort bookkeeping, same policy as install.
fn forget_in_ledger(working_dir: &std::path::Path, module: &str) {
    let store = JsonLedgerStore::at_default_location();
    let mut ledger = match store.load() {
        Ok(ledger) => ledger,
        Err(e) => {
            warn!(error = %e, "skipping ledger update");
            return;
        }
    };
    ledger.forget(&working_dir.display().to_string(), module);
    if let Err(e) = store.save(&ledger) {
        warn!(error = %e, "failed to save ledger");
    }
}
