pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;
pub use core::engine::ScanEngine;
pub use domain::model::{PrimePair, ScanOutcome};
pub use domain::ports::ScanConfig;
pub use utils::error::{GoldbachError, Result};
