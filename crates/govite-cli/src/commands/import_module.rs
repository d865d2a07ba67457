//! Implementation of the `govite import-module` command.
//!
//! Strict variant of `install-local`: refuses to touch a destination that
//! already exists.

use tracing::instrument;

use govite_adapters::{JsonLedgerStore, LocalFilesystem};
use govite_core::{application::ImportService, domain::ImportMode};

use crate::{error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: crate::cli::ImportModuleArgs, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir()?;
    let service = ImportService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(JsonLedgerStore::at_default_location()),
        cwd,
    );

    output.info(&format!("Importing module from {}...", args.path.display()))?;
    let descriptor = service.import(&args.path, ImportMode::StrictNoOverwrite)?;

    output.success(&format!(
        "Imported module '{}' ({})",
        descriptor.name, descriptor.kind
    ))?;
    output.print(&format!("  \u{2192} {}", descriptor.destination.display()))?;
    Ok(())
}
