//! Implementation of the `govite init` command.
//!
//! Responsibility: translate CLI arguments into a `ProjectConfig`, call the
//! core scaffold service, and display results.

use std::path::PathBuf;

use tracing::{info, instrument};

use govite_adapters::{BuiltinRenderer, LocalFilesystem};
use govite_core::{application::ScaffoldService, domain::ProjectConfig};

use crate::{
    cli::{InitArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `govite init` command.
///
/// Dispatch sequence:
/// 1. Validate the project name
/// 2. Merge CLI flags over config defaults into a `ProjectConfig`
/// 3. Refuse an existing target directory
/// 4. Execute scaffolding via `ScaffoldService`
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    validate_project_name(&args.name)?;

    let project_config = build_project_config(&args, &config);
    let project_root = PathBuf::from(&args.name);

    if project_root.exists() {
        return Err(CliError::ProjectExists { path: project_root });
    }

    output.header(&format!(
        "\u{1f680} Creating new Go-Vite project: {}",
        args.name
    ))?;
    output.print(&format!("\u{1f4e6} Module: {}", project_config.module))?;
    output.print(&format!(
        "\u{1f527} Frontend port: {}",
        project_config.port
    ))?;
    output.print(&format!(
        "\u{1f527} Backend port: {}",
        project_config.backend_port
    ))?;
    output.print("")?;

    info!(project = %args.name, root = %project_root.display(), "scaffold started");

    let service = ScaffoldService::new(Box::new(BuiltinRenderer::new()), Box::new(LocalFilesystem::new()));
    service.scaffold(&project_config, &project_root)?;

    info!(project = %args.name, "scaffold completed");

    output.success("Project created successfully!")?;

    if !global.quiet {
        output.print("")?;
        output.print("\u{1f4dd} Next steps:")?;
        output.print(&format!("   cd {}", args.name))?;
        output.print("   make deps      # Install dependencies")?;
        output.print("   make binary    # Build the application")?;
        output.print(&format!("   ./dist/{}  # Run the application", args.name))?;
    }

    Ok(())
}

/// Merge CLI flags over config-file defaults.
fn build_project_config(args: &InitArgs, config: &AppConfig) -> ProjectConfig {
    ProjectConfig {
        name: args.name.clone(),
        module: args.module.clone().unwrap_or_else(|| args.name.clone()),
        description: args
            .description
            .clone()
            .unwrap_or_else(|| config.defaults.description.clone()),
        author: args
            .author
            .clone()
            .unwrap_or_else(|| config.defaults.author.clone()),
        port: args.port.unwrap_or(config.defaults.port),
        backend_port: args.backend_port.unwrap_or(config.defaults.backend_port),
    }
}

fn validate_project_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidInput {
            message: "project name cannot be empty".into(),
        });
    }
    if name.starts_with('.') || name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidInput {
            message: format!("'{name}' is not a valid project name"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::InitArgs;

    fn args(name: &str) -> InitArgs {
        InitArgs {
            name: name.into(),
            module: None,
            description: None,
            author: None,
            port: None,
            backend_port: None,
        }
    }

    #[test]
    fn module_defaults_to_project_name() {
        let cfg = build_project_config(&args("my-app"), &AppConfig::default());
        assert_eq!(cfg.module, "my-app");
    }

    #[test]
    fn flags_override_config_defaults() {
        let mut a = args("my-app");
        a.module = Some("github.com/acme/my-app".into());
        a.port = Some(3000);
        let cfg = build_project_config(&a, &AppConfig::default());
        assert_eq!(cfg.module, "github.com/acme/my-app");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.backend_port, 8080);
    }

    #[test]
    fn rejects_path_like_names() {
        assert!(validate_project_name("../evil").is_err());
        assert!(validate_project_name(".hidden").is_err());
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("my-app").is_ok());
    }
}
