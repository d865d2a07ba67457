//! Project-level value objects: kinds, import modes, descriptors, config.

use std::fmt;
use std::path::PathBuf;

/// Relative directory inside a scaffolded project where local modules land.
pub const MODULES_BASE_DIR: &str = "backend/internal/modules";

/// The ecosystem kind of a module directory, determined solely by which
/// manifest file is present — never inferred from file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectKind {
    /// Neither recognized manifest file was found.
    #[default]
    Unknown,
    /// Directory contains a `go.mod`.
    GoLike,
    /// Directory contains a `package.json`.
    NodeLike,
}

impl ProjectKind {
    /// The manifest file whose presence signals this kind.
    ///
    /// `None` for [`ProjectKind::Unknown`] — absence is a distinguishable
    /// outcome, not a panic.
    pub fn manifest_file(self) -> Option<&'static str> {
        match self {
            Self::GoLike => Some("go.mod"),
            Self::NodeLike => Some("package.json"),
            Self::Unknown => None,
        }
    }

    /// Destination directory for a module of this kind, relative to the
    /// scaffold root. Pure and deterministic; `None` for `Unknown`.
    pub fn module_destination(self, name: &str) -> Option<PathBuf> {
        match self {
            Self::GoLike | Self::NodeLike => Some(PathBuf::from(MODULES_BASE_DIR).join(name)),
            Self::Unknown => None,
        }
    }

    /// Whether this kind maps to a recognized ecosystem.
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoLike => write!(f, "Go"),
            Self::NodeLike => write!(f, "Node.js"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Policy applied when a local import's destination already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Merge/overwrite files by name; the destination tree is never deleted
    /// first, so stale files from a previous version survive.
    Overwrite,
    /// Refuse before copying if the destination exists; the existing tree is
    /// left untouched.
    StrictNoOverwrite,
}

impl ImportMode {
    /// Provenance prefix recorded in the ledger for this mode.
    pub fn ledger_prefix(self) -> &'static str {
        match self {
            Self::Overwrite => "local:",
            Self::StrictNoOverwrite => "imported:",
        }
    }

    /// Full ledger identifier for a module imported under this mode.
    pub fn ledger_identifier(self, name: &str) -> String {
        format!("{}{}", self.ledger_prefix(), name)
    }
}

/// Ephemeral description of one imported module. Created fresh per import
/// invocation and discarded when the operation completes — never persisted.
///
/// Invariant: `name` is non-empty; construction happens only after manifest
/// extraction succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// Directory the module was imported from.
    pub source_path: PathBuf,
    /// Detected ecosystem kind.
    pub kind: ProjectKind,
    /// Identifying name extracted from the manifest.
    pub name: String,
    /// Destination the module was copied to, relative to the scaffold root.
    pub destination: PathBuf,
}

/// Configuration for one `init` invocation, assembled at the CLI layer from
/// flags and defaults and passed down by parameter — there is no process-wide
/// config state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Project (directory) name.
    pub name: String,
    /// Go module path for the generated root `go.mod`.
    pub module: String,
    /// Human-readable description, used in README/package.json.
    pub description: String,
    /// Author name.
    pub author: String,
    /// Frontend (Vite dev server) port.
    pub port: u16,
    /// Backend service port.
    pub backend_port: u16,
}

// ── tests ─────────────────────────────────────────────────────────────────────
