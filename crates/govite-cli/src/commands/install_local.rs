//! Implementation of the `govite install-local` command.
//!
//! Imports a local module directory into the current project, overwriting
//! files at the destination on conflict (merge semantics; stale destination
//! files survive).

use tracing::instrument;

use govite_adapters::{JsonLedgerStore, LocalFilesystem};
use govite_core::{application::ImportService, domain::ImportMode};

use crate::{error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: crate::cli::InstallLocalArgs, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir()?;
    let service = ImportService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(JsonLedgerStore::at_default_location()),
        cwd,
    );

    output.info(&format!("Importing local module from {}...", args.path.display()))?;
    let descriptor = service.import(&args.path, ImportMode::Overwrite)?;

    output.success(&format!(
        "Installed local module '{}' ({})",
        descriptor.name, descriptor.kind
    ))?;
    output.print(&format!("  \u{2192} {}", descriptor.destination.display()))?;
    Ok(())
}
