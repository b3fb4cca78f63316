pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use crate::domain::ports::ScanConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};

/// Hard cap on the upper bound. Trial division is quadratic; anything past
/// this takes longer than anyone wants to wait.
pub const MAX_SCAN_BOUND: u64 = 1_000_000;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "goldbach-scan")]
#[command(about = "Empirically check Goldbach's conjecture over a range of even numbers")]
pub struct CliConfig {
    /// Exclusive lower bound of the scan (clamped up to 2)
    #[arg(long, default_value = "0")]
    pub from: u64,

    /// Exclusive upper bound of the scan
    #[arg(long, default_value = "2000")]
    pub to: u64,

    /// TOML config file overriding the range from the command line
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ScanConfig for CliConfig {
    fn from_number(&self) -> u64 {
        self.from
    }

    fn to_number(&self) -> u64 {
        self.to
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range_bound("to", self.to, MAX_SCAN_BOUND)?;

        if let Some(path) = &self.config {
            validation::validate_file_extension("config", path, &["toml"])?;
        }

        Ok(())
    }
}
