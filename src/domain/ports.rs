/// Source of the scan interval. Implemented by the CLI arguments and by the
/// TOML config file so the engine does not care where its range came from.
pub trait ScanConfig {
    fn from_number(&self) -> u64;
    fn to_number(&self) -> u64;
}
