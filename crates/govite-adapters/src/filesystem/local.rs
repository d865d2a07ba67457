//! Local filesystem adapter using std::fs.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use govite_core::{application::ports::Filesystem, error::GoviteResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        // A stat failure (permissions, dangling link) reads as absent.
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> GoviteResult<String> {
        fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn create_dir_all(&self, path: &Path) -> GoviteResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> GoviteResult<()> {
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    /// Recursive tree copy, fail-fast, preserving permission modes.
    ///
    /// The destination root (and missing ancestors) are created first; then
    /// every entry under `src` is copied in walk order, so parent
    /// directories always exist before their children. `fs::copy` carries
    /// the source file's permission bits to the destination. Existing
    /// destination files are overwritten in place; nothing is deleted.
    fn copy_tree(&self, src: &Path, dst: &Path) -> GoviteResult<()> {
        let src_meta = fs::metadata(src).map_err(|e| map_io_error(src, e, "stat source"))?;

        fs::create_dir_all(dst).map_err(|e| map_io_error(dst, e, "create directory"))?;
        copy_mode(&src_meta, dst)?;

        for entry in WalkDir::new(src).min_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| src.to_path_buf());
                let reason = e
                    .io_error()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| e.to_string());
                govite_core::application::ApplicationError::FilesystemError { path, reason }.into()
            });
            let entry = match entry {
                Ok(e) => e,
                Err(e) => return Err(e),
            };

            // Walkdir only yields paths under its root, so this cannot fail.
            let rel = entry.path().strip_prefix(src).map_err(|e| {
                map_io_error(entry.path(), io::Error::other(e), "relativize path")
            })?;
            let target = dst.join(rel);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)
                    .map_err(|e| map_io_error(&target, e, "create directory"))?;
                let meta = entry
                    .metadata()
                    .map_err(|e| map_io_error(entry.path(), io::Error::other(e), "stat"))?;
                copy_mode(&meta, &target)?;
            } else {
                fs::copy(entry.path(), &target)
                    .map_err(|e| map_io_error(&target, e, "copy file"))?;
            }
        }

        Ok(())
    }
}

/// Apply a source permission mode to a destination path (Unix only; Windows
/// has no comparable mode bits).
fn copy_mode(src_meta: &fs::Metadata, dst: &Path) -> GoviteResult<()> {
    #[cfg(unix)]
    {
        fs::set_permissions(dst, src_meta.permissions())
            .map_err(|e| map_io_error(dst, e, "set permissions"))?;
    }
    #[cfg(not(unix))]
    {
        let _ = (src_meta, dst);
    }
    Ok(())
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> govite_core::error::GoviteError {
    use govite_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────
