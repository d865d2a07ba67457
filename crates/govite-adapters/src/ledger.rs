//! JSON-backed ledger storage.
//!
//! The ledger lives in a single JSON file under the platform config
//! directory, e.g. `~/.config/govite/cli.json` on Linux. It is advisory
//! bookkeeping: commands record and forget entries but nothing re-reads it
//! for enforcement, and there is no inter-process locking (last writer
//! wins).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use govite_core::{
    application::{ApplicationError, ports::LedgerStore},
    domain::Ledger,
    error::GoviteResult,
};

/// Ledger store persisting to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonLedgerStore {
    path: PathBuf,
}

impl JsonLedgerStore {
    /// Create a store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the default per-user location.
    ///
    /// `GOVITE_CONFIG_DIR` overrides the directory when set; otherwise the
    /// platform config dir is used, falling back to the temp directory when
    /// no home is available.
    pub fn at_default_location() -> Self {
        Self::new(default_ledger_path())
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonLedgerStore {
    fn load(&self) -> GoviteResult<Ledger> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // Absent file is a first run, not an error.
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "ledger file absent, starting empty");
                return Ok(Ledger::new());
            }
            Err(e) => {
                return Err(ApplicationError::FilesystemError {
                    path: self.path.clone(),
                    reason: format!("Failed to read ledger: {}", e),
                }
                .into());
            }
        };

        serde_json::from_str(&raw).map_err(|e| {
            ApplicationError::LedgerCorrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn save(&self, ledger: &Ledger) -> GoviteResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ApplicationError::FilesystemError {
                path: parent.to_path_buf(),
                reason: format!("Failed to create ledger directory: {}", e),
            })?;
        }

        let json =
            serde_json::to_string_pretty(ledger).map_err(|e| ApplicationError::FilesystemError {
                path: self.path.clone(),
                reason: format!("Failed to serialize ledger: {}", e),
            })?;

        // Write to a sibling temp file and rename over, so a crash mid-write
        // never leaves a truncated ledger behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| ApplicationError::FilesystemError {
            path: tmp.clone(),
            reason: format!("Failed to write ledger: {}", e),
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| ApplicationError::FilesystemError {
            path: self.path.clone(),
            reason: format!("Failed to replace ledger: {}", e),
        })?;

        debug!(path = %self.path.display(), "ledger saved");
        Ok(())
    }
}

/// Resolve the default ledger file path.
pub fn default_ledger_path() -> PathBuf {
    if let Ok(dir) = std::env::var("GOVITE_CONFIG_DIR") {
        return PathBuf::from(dir).join("cli.json");
    }
    if let Some(dirs) = ProjectDirs::from("com", "govite", "govite") {
        return dirs.config_dir().join("cli.json");
    }
    std::env::temp_dir().join("govite").join("cli.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use govite_core::error::{ErrorCategory, GoviteError};
    use tempfile::TempDir;

    #[test]
    fn absent_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let store = JsonLedgerStore::new(tmp.path().join("cli.json"));

        let ledger = store.load().unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cli.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonLedgerStore::new(&path).load().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(matches!(
            err,
            GoviteError::Application(ApplicationError::LedgerCorrupt { .. })
        ));
    }

    #[test]
    fn save_then_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let store = JsonLedgerStore::new(tmp.path().join("nested").join("cli.json"));

        let mut ledger = Ledger::new();
        ledger.record("/proj", "gin");
        ledger.record("/proj", "local:widgets");
        store.save(&ledger).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.modules_for("/proj"), ["gin", "local:widgets"]);
    }

    #[test]
    fn save_replaces_previous_content() {
        let tmp = TempDir::new().unwrap();
        let store = JsonLedgerStore::new(tmp.path().join("cli.json"));

        let mut ledger = Ledger::new();
        ledger.record("/a", "one");
        store.save(&ledger).unwrap();

        let mut ledger = store.load().unwrap();
        ledger.forget("/a", "one");
        store.save(&ledger).unwrap();

        assert!(store.load().unwrap().is_empty());
        // No temp file left behind.
        assert!(!tmp.path().join("cli.json.tmp").exists());
    }

    #[test]
    fn ledger_file_shape_is_stable() {
        let tmp = TempDir::new().unwrap();
        let store = JsonLedgerStore::new(tmp.path().join("cli.json"));

        let mut ledger = Ledger::new();
        ledger.record("/proj", "gin");
        store.save(&ledger).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["installed_modules"]["/proj"][0], "gin");
    }
}
