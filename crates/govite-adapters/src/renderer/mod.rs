//! Built-in project renderer.
//!
//! Produces the complete Go + Vite desktop-app skeleton as a
//! [`RenderedFileSet`]. Templates are plain string constants with
//! `{{NAME}}`-style placeholders; substitution is literal text replacement,
//! no template engine.

mod templates;

use std::path::Path;

use tracing::debug;

use govite_core::{
    application::ports::ProjectRenderer,
    domain::{ProjectConfig, RenderedFileSet},
    error::GoviteResult,
};

/// Directories created up front, including the ones that start out empty.
const SCAFFOLD_DIRS: &[&str] = &[
    "backend/cmd/server",
    "backend/config",
    "backend/internal/api/handlers",
    "backend/internal/api/middleware",
    "backend/internal/models",
    "backend/internal/modules",
    "backend/internal/storage",
    "backend/internal/utils",
    "backend/tests",
    "frontend/src/components",
    "frontend/src/pages",
    "frontend/src/hooks",
    "frontend/src/services",
    "frontend/src/utils",
    "frontend/public",
    "netlify/functions",
    "dist",
    "bin",
];

/// Project-relative path → template body.
const SCAFFOLD_FILES: &[(&str, &str)] = &[
    // Root
    ("go.mod", templates::root::GO_MOD),
    ("main.go", templates::root::MAIN_GO),
    ("Makefile", templates::root::MAKEFILE),
    ("README.md", templates::root::README),
    (".gitignore", templates::root::GITIGNORE),
    (".gitattributes", templates::root::GITATTRIBUTES),
    (".env.example", templates::root::ENV_EXAMPLE),
    ("netlify.toml", templates::root::NETLIFY_TOML),
    ("netlify/functions/api.js", templates::root::NETLIFY_API_FUNCTION),
    // Backend
    ("backend/go.mod", templates::backend::GO_MOD),
    ("backend/cmd/server/main.go", templates::backend::SERVER_MAIN),
    ("backend/config/config.go", templates::backend::CONFIG),
    ("backend/internal/api/routes.go", templates::backend::ROUTES),
    (
        "backend/internal/api/handlers/handlers.go",
        templates::backend::HANDLERS,
    ),
    (
        "backend/internal/api/middleware/cors.go",
        templates::backend::CORS_MIDDLEWARE,
    ),
    (
        "backend/internal/api/middleware/logger.go",
        templates::backend::LOGGER_MIDDLEWARE,
    ),
    (
        "backend/internal/models/pipeline.go",
        templates::backend::PIPELINE_MODEL,
    ),
    (
        "backend/internal/models/project.go",
        templates::backend::PROJECT_MODEL,
    ),
    ("backend/internal/models/user.go", templates::backend::USER_MODEL),
    (
        "backend/internal/modules/modules.go",
        templates::backend::MODULES_MANAGER,
    ),
    (
        "backend/internal/modules/builtin.go",
        templates::backend::BUILTIN_MODULES,
    ),
    (
        "backend/internal/storage/database.go",
        templates::backend::DATABASE,
    ),
    ("backend/internal/utils/logger.go", templates::backend::LOGGER),
    // Frontend
    ("frontend/package.json", templates::frontend::PACKAGE_JSON),
    ("frontend/vite.config.js", templates::frontend::VITE_CONFIG),
    (
        "frontend/tailwind.config.js",
        templates::frontend::TAILWIND_CONFIG,
    ),
    (
        "frontend/postcss.config.js",
        templates::frontend::POSTCSS_CONFIG,
    ),
    ("frontend/index.html", templates::frontend::INDEX_HTML),
    ("frontend/src/main.tsx", templates::frontend::MAIN_TSX),
    ("frontend/src/App.tsx", templates::frontend::APP_TSX),
    ("frontend/src/index.css", templates::frontend::INDEX_CSS),
    ("frontend/.eslintrc.cjs", templates::frontend::ESLINTRC),
    ("frontend/.prettierrc", templates::frontend::PRETTIERRC),
];

/// Renderer backed by the templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRenderer;

impl BuiltinRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectRenderer for BuiltinRenderer {
    fn render(&self, config: &ProjectConfig, output_root: &Path) -> GoviteResult<RenderedFileSet> {
        let vars = Vars::from_config(config);
        let mut set = RenderedFileSet::new(output_root);

        for dir in SCAFFOLD_DIRS {
            set.add_directory(*dir);
        }
        for (path, template) in SCAFFOLD_FILES {
            set.add_file(*path, vars.apply(template));
        }

        debug!(
            entries = set.entry_count(),
            root = %output_root.display(),
            "rendered project skeleton"
        );
        Ok(set)
    }
}

/// Placeholder values substituted into every template.
struct Vars {
    name: String,
    module: String,
    description: String,
    author: String,
    port: String,
    backend_port: String,
}

impl Vars {
    fn from_config(config: &ProjectConfig) -> Self {
        Self {
            name: config.name.clone(),
            module: config.module.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            port: config.port.to_string(),
            backend_port: config.backend_port.to_string(),
        }
    }

    fn apply(&self, template: &str) -> String {
        template
            .replace("{{NAME}}", &self.name)
            .replace("{{MODULE}}", &self.module)
            .replace("{{DESCRIPTION}}", &self.description)
            .replace("{{AUTHOR}}", &self.author)
            .replace("{{PORT}}", &self.port)
            .replace("{{BACKEND_PORT}}", &self.backend_port)
    }
}
