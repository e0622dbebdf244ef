use crate::utils::error::{HamPrefixError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(HamPrefixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(HamPrefixError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(HamPrefixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HamPrefixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Like [`validate_non_empty_string`], but `None` is accepted.
pub fn validate_optional_string(field_name: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) => validate_non_empty_string(field_name, v),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://api.hamnut.com/v1/call-signs/prefixes").is_ok());
        assert!(validate_url("base_url", "http://127.0.0.1:8080/").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("field", "countryName").is_ok());
        assert!(validate_non_empty_string("field", "   ").is_err());
    }

    #[test]
    fn test_validate_optional_string() {
        assert!(validate_optional_string("api_key", None).is_ok());
        assert!(validate_optional_string("api_key", Some("secret")).is_ok());
        assert!(validate_optional_string("api_key", Some("")).is_err());
    }
}
