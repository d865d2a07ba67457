//! Implementation of the `govite install` command.

use tracing::{instrument, warn};

use govite_adapters::{JsonLedgerStore, LocalFilesystem, SystemPackageManager};
use govite_core::application::{manifest, ports::LedgerStore};

use crate::{
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Detect the project kind of the current directory, run the matching
/// package manager, then record the module in the ledger.
#[instrument(skip_all, fields(module = %args.module))]
pub fn execute(args: crate::cli::InstallArgs, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir()?;
    let fs = LocalFilesystem::new();

    let kind = manifest::classify(&fs, &cwd);
    if !kind.is_known() {
        return Err(CliError::UnknownProjectType { path: cwd });
    }

    output.info(&format!("Installing {} ({} project)...", args.module, kind))?;
    SystemPackageManager::new().install(kind, &cwd, &args.module)?;

    record_in_ledger(&cwd, &args.module);

    output.success(&format!("Installed {}", args.module))?;
    Ok(())
}

/// Best-effort bookkeeping. A broken ledger must not fail an install that
/// already succeeded.
fn record_in_ledger(working_dir: &std::path::Path, module: &str) {
    let store = JsonLedgerStore::at_default_location();
    let mut ledger = match store.load() {
        Ok(ledger) => ledger,
        Err(e) => {
            warn!(error = %e, "skipping ledger update");
            return;
        }
    };
    ledger.record(&working_dir.display().to_string(), module);
    if let Err(e) = store.save(&ledger) {
        warn!(error = %e, "failed to save ledger");
    }
}
