use clap::Parser;
use goldbach_scan::utils::{logger, validation::Validate};
use goldbach_scan::{CliConfig, ScanEngine, ScanOutcome, TomlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting goldbach-scan CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = if let Some(path) = config.config.clone() {
        tracing::info!("Loading scan range from {}", path);
        run_from_file(&path)
    } else {
        ScanEngine::new(config).run()
    };

    match result {
        Ok(outcome) => report(&outcome),
        Err(e) => {
            tracing::error!("❌ Scan failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn run_from_file(path: &str) -> goldbach_scan::Result<ScanOutcome> {
    let config = TomlConfig::from_file(path)?;
    config.validate()?;
    ScanEngine::new(config).run()
}

fn report(outcome: &ScanOutcome) {
    match outcome.counterexample {
        None => {
            tracing::info!("✅ Scan finished with no counterexample");
            println!(
                "✅ Goldbach's conjecture holds for every even number in ({}, {})",
                outcome.from, outcome.to
            );
        }
        Some(n) => {
            tracing::warn!("❌ Candidate counterexample at {}", n);
            println!(
                "❌ Goldbach's conjecture failed for {}: no prime pair found",
                n
            );
        }
    }
}
