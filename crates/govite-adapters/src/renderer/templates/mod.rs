//! Template bodies for the generated project.
//!
//! Grouped by where the file lands: project root, Go backend, Vite frontend.
//! Placeholders: `{{NAME}}`, `{{MODULE}}`, `{{DESCRIPTION}}`, `{{AUTHOR}}`,
//! `{{PORT}}`, `{{BACKEND_PORT}}`.

pub mod backend;
pub mod frontend;
pub mod root;
