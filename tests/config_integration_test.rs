use goldbach_scan::utils::validation::Validate;
use goldbach_scan::{GoldbachError, ScanConfig, ScanEngine, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_scan_driven_by_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[scan]\nfrom = 0\nto = 100\n").unwrap();

    let config = TomlConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();

    assert_eq!(config.from_number(), 0);
    assert_eq!(config.to_number(), 100);

    let outcome = ScanEngine::new(config).run().unwrap();
    assert!(outcome.holds());
    assert_eq!(outcome.from, 2);
}

#[test]
fn test_config_file_without_upper_bound_fails_validation() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[scan]\nfrom = 10\n").unwrap();

    let config = TomlConfig::from_file(file.path()).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, GoldbachError::MissingConfigError { .. }));
}

#[test]
fn test_malformed_config_file_is_a_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[scan\nto = ").unwrap();

    let err = TomlConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, GoldbachError::TomlError(_)));
}

#[cfg(feature = "cli")]
mod cli {
    use clap::Parser;
    use goldbach_scan::utils::validation::Validate;
    use goldbach_scan::{CliConfig, ScanConfig, ScanEngine};

    #[test]
    fn test_default_cli_invocation_scans_zero_to_two_thousand() {
        let config = CliConfig::parse_from(["goldbach-scan"]);
        config.validate().unwrap();
        assert_eq!(config.from_number(), 0);
        assert_eq!(config.to_number(), 2000);
    }

    #[test]
    fn test_cli_range_flags_drive_the_engine() {
        let config = CliConfig::parse_from(["goldbach-scan", "--from", "10", "--to", "60"]);
        config.validate().unwrap();

        let outcome = ScanEngine::new(config).run().unwrap();
        assert!(outcome.holds());
        assert_eq!(outcome.from, 10);
        assert_eq!(outcome.to, 60);
        // Evens strictly between 10 and 60.
        assert_eq!(outcome.candidates, 24);
    }
}
