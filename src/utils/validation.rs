use crate::domain::model::FormInputs;
use crate::utils::error::{SiteError, Result};
use regex::Regex;
use url::Url;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::ValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
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
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Basic `local@domain.tld` shape, the same bar a browser email input sets.
pub fn validate_email_shape(field_name: &str, value: &str) -> Result<()> {
    let re = Regex::new(EMAIL_PATTERN).map_err(|e| SiteError::ConfigError {
        message: format!("email pattern failed to compile: {}", e),
    })?;

    if !re.is_match(value.trim()) {
        return Err(SiteError::ValidationError {
            field: field_name.to_string(),
            message: format!("'{}' is not a valid email address", value),
        });
    }
    Ok(())
}

/// Required-field checks of the form surface. The submission flow itself
/// does not re-validate.
pub fn validate_form_inputs(inputs: &FormInputs, known_services: &[&str]) -> Result<()> {
    validate_non_empty_string("name", &inputs.name)?;
    validate_non_empty_string("email", &inputs.email)?;
    validate_email_shape("email", &inputs.email)?;

    if !inputs.service.is_empty() && !known_services.contains(&inputs.service.as_str()) {
        return Err(SiteError::ValidationError {
            field: "service".to_string(),
            message: format!(
                "Unknown service '{}'. Known services: {}",
                inputs.service,
                known_services.join(", ")
            ),
        });
    }

    Ok(())
}
