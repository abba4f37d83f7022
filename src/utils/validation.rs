use crate::utils::error::{CardError, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// File extensions are written without the leading dot.
pub fn validate_extension(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    let pattern = Regex::new(r"^[A-Za-z0-9]+$").expect("static regex is valid");
    if !pattern.is_match(value) {
        return Err(CardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Extension must be alphanumeric, without a leading dot".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension("image.extension", "png").is_ok());
        assert!(validate_extension("image.extension", "webp").is_ok());
        assert!(validate_extension("image.extension", "").is_err());
        assert!(validate_extension("image.extension", ".png").is_err());
        assert!(validate_extension("image.extension", "p g").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("table.cards", 12, 3, 81).is_ok());
        assert!(validate_range("table.cards", 3, 3, 81).is_ok());
        assert!(validate_range("table.cards", 81, 3, 81).is_ok());
        assert!(validate_range("table.cards", 2, 3, 81).is_err());
        assert!(validate_range("table.cards", 82, 3, 81).is_err());
    }
}
