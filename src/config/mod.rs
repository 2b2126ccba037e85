#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_header_value, validate_non_empty_secret, validate_positive_number, validate_url,
    Validate,
};
use std::fmt;
use std::time::Duration;

pub use toml_config::{PusherFileConfig, TargetConfig};

pub const DEFAULT_ENDPOINT: &str = "https://hedge-ai.onrender.com/admin/set_token";
pub const DEFAULT_ADMIN_KEY: &str = "HedgeAI_Admin_2025";
pub const ADMIN_KEY_HEADER: &str = "X-ADMIN-KEY";

/// Fully resolved target for a push.
#[derive(Clone, PartialEq, Eq)]
pub struct PusherSettings {
    pub endpoint: String,
    pub admin_key: String,
    pub timeout_seconds: Option<u64>,
    pub fail_on_http_error: bool,
}

impl PusherSettings {
    pub fn new(endpoint: impl Into<String>, admin_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            admin_key: admin_key.into(),
            timeout_seconds: None,
            fail_on_http_error: false,
        }
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }

    pub fn with_fail_on_http_error(mut self, fail: bool) -> Self {
        self.fail_on_http_error = fail;
        self
    }
}

impl Default for PusherSettings {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_ADMIN_KEY)
    }
}

impl fmt::Debug for PusherSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PusherSettings")
            .field("endpoint", &self.endpoint)
            .field("admin_key", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .field("fail_on_http_error", &self.fail_on_http_error)
            .finish()
    }
}

impl Validate for PusherSettings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_secret("admin_key", &self.admin_key)?;
        validate_header_value("admin_key", &self.admin_key)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

impl ConfigProvider for PusherSettings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn admin_key(&self) -> &str {
        &self.admin_key
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn fail_on_http_error(&self) -> bool {
        self.fail_on_http_error
    }
}
