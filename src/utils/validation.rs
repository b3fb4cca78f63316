use crate::utils::error::{GoldbachError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range_bound(field_name: &str, value: u64, max_value: u64) -> Result<()> {
    if value > max_value {
        return Err(GoldbachError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!(
                "Value must be at most {} (trial division does not scale further)",
                max_value
            ),
        });
    }
    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &str, allowed: &[&str]) -> Result<()> {
    if path.is_empty() {
        return Err(GoldbachError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed.contains(&extension) => Ok(()),
        Some(extension) => Err(GoldbachError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed.join(", ")
            ),
        }),
        None => Err(GoldbachError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| GoldbachError::MissingConfigError {
        field: field_name.to_string(),
    })
}
