use crate::config::MAX_SCAN_BOUND;
use crate::domain::ports::ScanConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub scan: Option<ScanSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSection {
    pub from: Option<u64>,
    pub to: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate_config(&self) -> Result<()> {
        let scan = validation::validate_required_field("scan", &self.scan)?;
        let to = validation::validate_required_field("scan.to", &scan.to)?;
        validation::validate_range_bound("scan.to", *to, MAX_SCAN_BOUND)?;
        Ok(())
    }
}

impl ScanConfig for TomlConfig {
    fn from_number(&self) -> u64 {
        self.scan.as_ref().and_then(|s| s.from).unwrap_or(0)
    }

    // Only meaningful after validate_config: scan.to is required.
    fn to_number(&self) -> u64 {
        self.scan.as_ref().and_then(|s| s.to).unwrap_or(0)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
