//! Command handler implementations.
//!
//! Each handler translates CLI arguments into core service calls and
//! displays results. No business logic lives here.

pub mod completions;
pub mod import_module;
pub mod init;
pub mod install;
pub mod install_local;
pub mod uninstall;
