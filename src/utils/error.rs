use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoldbachError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Can only be calculated with even numbers above 2")]
    InvalidTarget { value: u64 },
}

impl GoldbachError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            GoldbachError::IoError(e) => format!("Could not read a file: {}", e),
            GoldbachError::TomlError(e) => format!("The config file is not valid TOML: {}", e),
            GoldbachError::ConfigError { message } => format!("Configuration problem: {}", message),
            GoldbachError::InvalidConfigValueError { field, value, reason } => {
                format!("The value '{}' for {} is not usable: {}", value, field, reason)
            }
            GoldbachError::MissingConfigError { field } => {
                format!("The config file is missing the '{}' field", field)
            }
            GoldbachError::InvalidTarget { value } => {
                format!("{} is not an even number above 2", value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GoldbachError::IoError(_) => "Check that the path exists and is readable",
            GoldbachError::TomlError(_) | GoldbachError::ConfigError { .. } => {
                "The config file needs a [scan] table with integer 'from' and 'to' fields"
            }
            GoldbachError::InvalidConfigValueError { .. }
            | GoldbachError::MissingConfigError { .. } => {
                "Adjust the offending field and run again"
            }
            GoldbachError::InvalidTarget { .. } => {
                "Only even numbers greater than 2 can be tested against the conjecture"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GoldbachError>;
