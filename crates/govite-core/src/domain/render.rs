//! Rendered file sets — the output of the project renderer.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// Final set of files and directories ready for materialization.
///
/// This is the output of template rendering for the `init` flow. It contains
/// no business logic, only data: a root path plus project-relative entries.
#[derive(Debug, Clone)]
pub struct RenderedFileSet {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl RenderedFileSet {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate {
            path: path.into(),
        }));
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    /// Reject empty sets, duplicate paths, and absolute paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyRenderSet);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = match entry {
                FsEntry::File(f) => &f.path,
                FsEntry::Directory(d) => &d.path,
            };

            let path_str = path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_correctly() {
        let set = RenderedFileSet::new("/tmp/test")
            .with_directory("backend")
            .with_file("go.mod", "module test\n".into());

        assert_eq!(set.entry_count(), 2);
        assert_eq!(set.files().count(), 1);
        assert_eq!(set.directories().count(), 1);
    }

    #[test]
    fn validates_duplicates() {
        let set = RenderedFileSet::new("/tmp/test")
            .with_file("main.go", "".into())
            .with_file("main.go", "".into());

        assert_eq!(
            set.validate(),
            Err(DomainError::DuplicatePath {
                path: "main.go".into()
            })
        );
    }

    #[test]
    fn validates_empty() {
        let set = RenderedFileSet::new("/tmp/test");
        assert_eq!(set.validate(), Err(DomainError::EmptyRenderSet));
    }

    #[test]
    fn rejects_absolute_entries() {
        let set = RenderedFileSet::new("/tmp/test").with_file("/etc/passwd", "".into());
        assert!(matches!(
            set.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }
}
