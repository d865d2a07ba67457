//! Scaffold service — orchestrates the `init` flow.
//!
//! The renderer supplies a path → content mapping; this service validates it
//! and materializes it on disk. Each file write is create-or-truncate and
//! independent of the others; there is no rollback on failure, matching the
//! fail-fast policy of the rest of the tool.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, ProjectRenderer},
        ApplicationError,
    },
    domain::{FsEntry, ProjectConfig, RenderedFileSet},
    error::{GoviteError, GoviteResult},
};

/// Materializes a new project skeleton from the rendered template set.
pub struct ScaffoldService {
    renderer: Box<dyn ProjectRenderer>,
    fs: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(renderer: Box<dyn ProjectRenderer>, fs: Box<dyn Filesystem>) -> Self {
        Self { renderer, fs }
    }

    /// Scaffold a new project at `project_root`.
    ///
    /// Refuses if the root already exists — scaffolding never merges into
    /// an existing directory.
    #[instrument(skip_all, fields(project = %config.name, root = %project_root.display()))]
    pub fn scaffold(&self, config: &ProjectConfig, project_root: &Path) -> GoviteResult<()> {
        if self.fs.exists(project_root) {
            return Err(ApplicationError::ProjectExists {
                path: project_root.to_path_buf(),
            }
            .into());
        }

        let set = self.renderer.render(config, project_root)?;
        set.validate().map_err(GoviteError::Domain)?;

        self.write_set(&set)?;

        info!(
            files = set.files().count(),
            directories = set.directories().count(),
            "scaffold completed"
        );
        Ok(())
    }

    fn write_set(&self, set: &RenderedFileSet) -> GoviteResult<()> {
        self.fs.create_dir_all(set.root())?;

        for entry in &set.entries {
            match entry {
                FsEntry::Directory(dir) => {
                    self.fs.create_dir_all(&set.root().join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = set.root().join(&file.path);
                    if let Some(parent) = path.parent() {
                        self.fs.create_dir_all(parent)?;
                    }
                    self.fs.write_file(&path, &file.content)?;
                }
            }
        }

        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryFilesystem;
    use std::path::PathBuf;

    struct FixedRenderer;

    impl ProjectRenderer for FixedRenderer {
        fn render(
            &self,
            config: &ProjectConfig,
            output_root: &Path,
        ) -> GoviteResult<RenderedFileSet> {
            Ok(RenderedFileSet::new(output_root)
                .with_directory("backend/internal/modules")
                .with_file("go.mod", format!("module {}\n", config.module))
                .with_file("frontend/package.json", format!("{{\"name\": \"{}\"}}\n", config.name)))
        }
    }

    fn config() -> ProjectConfig {
        ProjectConfig {
            name: "my-app".into(),
            module: "github.com/me/my-app".into(),
            description: "demo".into(),
            author: "".into(),
            port: 5173,
            backend_port: 8080,
        }
    }

    #[test]
    fn writes_rendered_files_and_directories() {
        let fs = MemoryFilesystem::new();
        let svc = ScaffoldService::new(Box::new(FixedRenderer), Box::new(fs.clone()));

        svc.scaffold(&config(), Path::new("/out/my-app")).unwrap();

        assert_eq!(
            fs.read_file(Path::new("/out/my-app/go.mod")).as_deref(),
            Some("module github.com/me/my-app\n")
        );
        assert!(fs
            .read_file(Path::new("/out/my-app/frontend/package.json"))
            .is_some_and(|c| c.contains("my-app")));
        assert!(fs.exists(Path::new("/out/my-app/backend/internal/modules")));
    }

    #[test]
    fn refuses_existing_project_root() {
        let fs = MemoryFilesystem::new();
        fs.put_dir("/out/my-app");
        let svc = ScaffoldService::new(Box::new(FixedRenderer), Box::new(fs.clone()));

        let err = svc.scaffold(&config(), Path::new("/out/my-app")).unwrap_err();
        assert!(matches!(
            err,
            GoviteError::Application(ApplicationError::ProjectExists { .. })
        ));
        assert!(!fs.exists(Path::new("/out/my-app/go.mod")));
    }

    #[test]
    fn rejects_invalid_render_set() {
        struct EmptyRenderer;
        impl ProjectRenderer for EmptyRenderer {
            fn render(
                &self,
                _config: &ProjectConfig,
                output_root: &Path,
            ) -> GoviteResult<RenderedFileSet> {
                Ok(RenderedFileSet::new(output_root))
            }
        }

        let fs = MemoryFilesystem::new();
        let svc = ScaffoldService::new(Box::new(EmptyRenderer), Box::new(fs));
        let err = svc
            .scaffold(&config(), &PathBuf::from("/out/empty"))
            .unwrap_err();
        assert!(matches!(err, GoviteError::Domain(_)));
    }
}
