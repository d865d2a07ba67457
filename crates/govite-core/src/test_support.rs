//! Shared in-memory test doubles for the application ports.
//!
//! Test-only; never compiled into the library proper.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use crate::application::{ApplicationError, Filesystem, LedgerStore};
use crate::domain::Ledger;
use crate::error::GoviteResult;

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, registering every ancestor as a directory.
    pub fn put_file(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        let mut ancestor = PathBuf::new();
        for component in path.components() {
            ancestor.push(component);
            if ancestor != path {
                inner.directories.insert(ancestor.clone());
            }
        }
        inner.files.insert(path, content.to_string());
    }

    /// Seed an empty directory.
    pub fn put_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        let mut ancestor = PathBuf::new();
        for component in path.components() {
            ancestor.push(component);
            inner.directories.insert(ancestor.clone());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.inner.read().unwrap().files.get(path).cloned()
    }

    /// All file paths currently stored.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner.read().unwrap().files.keys().cloned().collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn read_to_string(&self, path: &Path) -> GoviteResult<String> {
        let inner = self.inner.read().unwrap();
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }
            .into()
        })
    }

    fn create_dir_all(&self, path: &Path) -> GoviteResult<()> {
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> GoviteResult<()> {
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn copy_tree(&self, src: &Path, dst: &Path) -> GoviteResult<()> {
        if !self.exists(src) {
            return Err(ApplicationError::FilesystemError {
                path: src.to_path_buf(),
                reason: "no such directory".into(),
            }
            .into());
        }

        self.create_dir_all(dst)?;
        let to_copy: Vec<(PathBuf, String)> = {
            let inner = self.inner.read().unwrap();
            inner
                .files
                .iter()
                .filter(|(p, _)| p.starts_with(src))
                .map(|(p, c)| (p.clone(), c.clone()))
                .collect()
        };

        for (path, content) in to_copy {
            let rel = path.strip_prefix(src).expect("prefix checked above");
            self.put_file(dst.join(rel), &content);
        }
        Ok(())
    }
}

/// In-memory ledger store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedgerStore {
    ledger: Arc<RwLock<Ledger>>,
    /// When set, `load` fails with `LedgerCorrupt` to exercise the
    /// best-effort bookkeeping path.
    corrupt: bool,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn corrupt() -> Self {
        Self {
            ledger: Arc::default(),
            corrupt: true,
        }
    }

    pub fn snapshot(&self) -> Ledger {
        self.ledger.read().unwrap().clone()
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn load(&self) -> GoviteResult<Ledger> {
        if self.corrupt {
            return Err(ApplicationError::LedgerCorrupt {
                path: PathBuf::from("<memory>"),
                reason: "simulated corruption".into(),
            }
            .into());
        }
        Ok(self.ledger.read().unwrap().clone())
    }

    fn save(&self, ledger: &Ledger) -> GoviteResult<()> {
        *self.ledger.write().unwrap() = ledger.clone();
        Ok(())
    }
}
