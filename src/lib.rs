pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use app::MenuApp;
pub use config::TomlConfig;
pub use core::{CourseCatalog, EnrollmentService, StudentDirectory};
pub use utils::error::{CcrmError, Result};
