use crate::utils::error::{PushError, Result};
use reqwest::header::HeaderValue;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PushError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PushError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PushError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(PushError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Secrets are never echoed back in the error value.
pub fn validate_non_empty_secret(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PushError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "<redacted>".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects values reqwest would refuse to put on the wire as a header
/// (newlines and other control characters). Redacted like any secret.
pub fn validate_header_value(field_name: &str, value: &str) -> Result<()> {
    HeaderValue::from_str(value)
        .map(|_| ())
        .map_err(|_| PushError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "<redacted>".to_string(),
            reason: "Value is not a valid HTTP header value (control characters are not allowed)"
                .to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint", "https://example.com/admin/set_token").is_ok());
        assert!(validate_url("endpoint", "http://127.0.0.1:8000/admin/set_token").is_ok());
        assert!(validate_url("endpoint", "").is_err());
        assert!(validate_url("endpoint", "invalid-url").is_err());
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timeout_seconds", 30, 1).is_ok());
        assert!(validate_positive_number("timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_secret_redacts() {
        assert!(validate_non_empty_secret("admin_key", "HedgeAI_Admin_2025").is_ok());

        match validate_non_empty_secret("admin_key", "   ") {
            Err(PushError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "admin_key");
                assert_eq!(value, "<redacted>");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_header_value() {
        assert!(validate_header_value("admin_key", "HedgeAI_Admin_2025").is_ok());
        assert!(validate_header_value("admin_key", "bad\nkey").is_err());
        assert!(validate_header_value("admin_key", "bad\rkey").is_err());

        match validate_header_value("admin_key", "bad\u{7f}key") {
            Err(PushError::InvalidConfigValueError { value, .. }) => {
                assert_eq!(value, "<redacted>");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
