//! Package-manager invocation per project kind.
//!
//! A small capability table maps [`ProjectKind`] to the commands that add or
//! remove a dependency. Kinds with no toolchain (Unknown) get `None` rather
//! than a panic, so callers surface a user error instead of crashing.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use govite_core::{
    application::ApplicationError, domain::ProjectKind, error::GoviteResult,
};

/// One shell command: program plus fixed arguments; the module name is
/// appended by the caller where `{module}` appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl ToolCommand {
    fn to_line(&self, module: &str) -> String {
        let mut parts = vec![self.program.to_string()];
        parts.extend(self.args.iter().map(|a| a.replace("{module}", module)));
        parts.join(" ")
    }
}

/// The install/uninstall commands available for a project kind.
#[derive(Debug, Clone, Copy)]
pub struct Toolchain {
    pub install: ToolCommand,
    pub uninstall: &'static [ToolCommand],
}

impl Toolchain {
    /// Look up the toolchain for a kind. Unknown has none.
    pub fn for_kind(kind: ProjectKind) -> Option<Toolchain> {
        match kind {
            ProjectKind::GoLike => Some(Toolchain {
                install: ToolCommand {
                    program: "go",
                    args: &["get", "{module}"],
                },
                // Dropping a require directive leaves go.sum stale; tidy
                // cleans it up.
                uninstall: &[
                    ToolCommand {
                        program: "go",
                        args: &["mod", "edit", "-droprequire", "{module}"],
                    },
                    ToolCommand {
                        program: "go",
                        args: &["mod", "tidy"],
                    },
                ],
            }),
            ProjectKind::NodeLike => Some(Toolchain {
                install: ToolCommand {
                    program: "npm",
                    args: &["install", "{module}"],
                },
                uninstall: &[ToolCommand {
                    program: "npm",
                    args: &["uninstall", "{module}"],
                }],
            }),
            ProjectKind::Unknown => None,
        }
    }
}

/// Runs package-manager subprocesses with inherited stdio, so the user sees
/// the tool's own progress output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPackageManager;

impl SystemPackageManager {
    pub fn new() -> Self {
        Self
    }

    /// Install `module` into the project at `dir` using its kind's toolchain.
    pub fn install(&self, kind: ProjectKind, dir: &Path, module: &str) -> GoviteResult<()> {
        let toolchain = Toolchain::for_kind(kind).ok_or(ApplicationError::UnrecognizedType {
            path: dir.to_path_buf(),
        })?;
        info!(%kind, module, "installing dependency");
        run(&toolchain.install, dir, module)
    }

    /// Remove `module` from the project at `dir`, running every uninstall
    /// step in order and stopping at the first failure.
    pub fn uninstall(&self, kind: ProjectKind, dir: &Path, module: &str) -> GoviteResult<()> {
        let toolchain = Toolchain::for_kind(kind).ok_or(ApplicationError::UnrecognizedType {
            path: dir.to_path_buf(),
        })?;
        info!(%kind, module, "removing dependency");
        for step in toolchain.uninstall {
            run(step, dir, module)?;
        }
        Ok(())
    }
}

fn run(command: &ToolCommand, dir: &Path, module: &str) -> GoviteResult<()> {
    let line = command.to_line(module);
    debug!(command = %line, dir = %dir.display(), "spawning");

    let status = Command::new(command.program)
        .args(command.args.iter().map(|a| a.replace("{module}", module)))
        .current_dir(dir)
        .status()
        .map_err(|e| ApplicationError::CommandFailed {
            command: line.clone(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(ApplicationError::CommandFailed {
            command: line,
            reason: match status.code() {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            },
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_has_no_toolchain() {
        assert!(Toolchain::for_kind(ProjectKind::Unknown).is_none());
    }

    #[test]
    fn go_toolchain_commands() {
        let tc = Toolchain::for_kind(ProjectKind::GoLike).unwrap();
        assert_eq!(tc.install.to_line("gin"), "go get gin");
        assert_eq!(tc.uninstall[0].to_line("gin"), "go mod edit -droprequire gin");
        assert_eq!(tc.uninstall[1].to_line("gin"), "go mod tidy");
    }

    #[test]
    fn node_toolchain_commands() {
        let tc = Toolchain::for_kind(ProjectKind::NodeLike).unwrap();
        assert_eq!(tc.install.to_line("react"), "npm install react");
        assert_eq!(tc.uninstall[0].to_line("react"), "npm uninstall react");
    }

    #[test]
    fn install_on_unknown_kind_is_a_user_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = SystemPackageManager::new()
            .install(ProjectKind::Unknown, tmp.path(), "anything")
            .unwrap_err();
        assert_eq!(
            err.category(),
            govite_core::error::ErrorCategory::Validation
        );
    }

    #[test]
    fn failing_command_reports_the_command_line() {
        let tmp = tempfile::TempDir::new().unwrap();
        let cmd = ToolCommand {
            program: "false",
            args: &[],
        };
        let err = run(&cmd, tmp.path(), "x").unwrap_err();
        assert!(err.to_string().contains("false"));
    }
}
