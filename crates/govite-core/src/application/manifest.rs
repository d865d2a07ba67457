//! Manifest sniffing and name extraction.
//!
//! A directory's [`ProjectKind`] is decided purely by which manifest file is
//! present directly inside it — `go.mod` wins over `package.json`, and there
//! is no recursive or parent-directory search. Content is never inspected
//! for classification.

use std::path::Path;

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::domain::ProjectKind;

/// Classify a directory by manifest presence.
///
/// Never errors: a stat failure is treated identically to "file absent".
pub fn classify(fs: &dyn Filesystem, dir: &Path) -> ProjectKind {
    if fs.exists(&dir.join("go.mod")) {
        return ProjectKind::GoLike;
    }
    if fs.exists(&dir.join("package.json")) {
        return ProjectKind::NodeLike;
    }
    ProjectKind::Unknown
}

/// Extract the identifying name from a directory's manifest.
///
/// Returns the empty string on any failure — a sentinel, not an error. No
/// fallback name is ever synthesized.
pub fn extract_name(fs: &dyn Filesystem, dir: &Path, kind: ProjectKind) -> String {
    match kind {
        ProjectKind::GoLike => go_module_name(fs, dir),
        ProjectKind::NodeLike => node_package_name(fs, dir),
        ProjectKind::Unknown => String::new(),
    }
}

/// Second field of the first `module ` line in go.mod.
fn go_module_name(fs: &dyn Filesystem, dir: &Path) -> String {
    let path = dir.join("go.mod");
    let content = match fs.read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "go.mod unreadable");
            return String::new();
        }
    };

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with("module ") {
            if let Some(name) = line.split_whitespace().nth(1) {
                return name.to_string();
            }
        }
    }
    String::new()
}

/// Value of the first `"name"` key in package.json.
///
/// Deliberately a minimal landmark scan rather than a structured parse: it
/// tolerates otherwise-invalid-but-close JSON, and any missing landmark
/// degrades to the empty string instead of raising.
fn node_package_name(fs: &dyn Filesystem, dir: &Path) -> String {
    let path = dir.join("package.json");
    let content = match fs.read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "package.json unreadable");
            return String::new();
        }
    };

    let Some(name_start) = content.find("\"name\"") else {
        return String::new();
    };
    let after_key = &content[name_start + "\"name\"".len()..];

    let Some(colon) = after_key.find(':') else {
        return String::new();
    };
    let after_colon = &after_key[colon + 1..];

    let Some(open_quote) = after_colon.find('"') else {
        return String::new();
    };
    let value = &after_colon[open_quote + 1..];

    match value.find('"') {
        Some(close_quote) => value[..close_quote].to_string(),
        None => String::new(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
