use crate::utils::error::{Result, RoiError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(RoiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(RoiError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(RoiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Rejects NaN, infinities, zero and negative amounts.
pub fn validate_positive_amount(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RoiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Amount must be a finite number greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RoiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
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
        return Err(RoiError::InvalidConfigValueError {
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
    fn test_validate_url() {
        assert!(validate_url("behavior.booking_url", "https://calendly.com/demo").is_ok());
        assert!(validate_url("behavior.booking_url", "http://example.com").is_ok());
        assert!(validate_url("behavior.booking_url", "").is_err());
        assert!(validate_url("behavior.booking_url", "invalid-url").is_err());
        assert!(validate_url("behavior.booking_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_amount() {
        assert!(validate_positive_amount("pricing.monthly_fee", 1500.0).is_ok());
        assert!(validate_positive_amount("pricing.monthly_fee", 0.0).is_err());
        assert!(validate_positive_amount("pricing.monthly_fee", -1.0).is_err());
        assert!(validate_positive_amount("pricing.monthly_fee", f64::NAN).is_err());
        assert!(validate_positive_amount("pricing.monthly_fee", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("pricing.guarantee_days", 30u32, 0, 365).is_ok());
        assert!(validate_range("pricing.guarantee_days", 400u32, 0, 365).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("site.name", "InjuryAutomation").is_ok());
        assert!(validate_non_empty_string("site.name", "   ").is_err());
    }
}
