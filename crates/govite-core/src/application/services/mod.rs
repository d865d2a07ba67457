//! Application services (use case orchestration).

pub mod import_service;
pub mod scaffold_service;

pub use import_service::ImportService;
pub use scaffold_service::ScaffoldService;
