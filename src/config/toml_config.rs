use crate::utils::error::{PushError, Result};
use crate::utils::validation::{
    validate_header_value, validate_non_empty_secret, validate_positive_number, validate_url,
    Validate,
};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Optional on-disk configuration.
///
/// ```toml
/// [target]
/// endpoint = "https://hedge-ai.onrender.com/admin/set_token"
/// admin_key = "${HEDGE_ADMIN_KEY}"
/// timeout_seconds = 30
/// fail_on_http_error = true
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PusherFileConfig {
    #[serde(default)]
    pub target: TargetConfig,
}

#[derive(Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    pub endpoint: Option<String>,
    pub admin_key: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub fail_on_http_error: Option<bool>,
}

impl fmt::Debug for TargetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetConfig")
            .field("endpoint", &self.endpoint)
            .field("admin_key", &self.admin_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .field("fail_on_http_error", &self.fail_on_http_error)
            .finish()
    }
}

impl PusherFileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded config file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content =
            Self::substitute_vars(content, |name| std::env::var(name).ok())?;

        toml::from_str(&processed_content).map_err(|e| PushError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the value `lookup` returns for it. Unknown
    /// variables are left as written.
    fn substitute_vars<F>(content: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PushError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for PusherFileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.target.endpoint {
            validate_url("target.endpoint", endpoint)?;
        }
        if let Some(admin_key) = &self.target.admin_key {
            validate_non_empty_secret("target.admin_key", admin_key)?;
            validate_header_value("target.admin_key", admin_key)?;
        }
        if let Some(timeout) = self.target.timeout_seconds {
            validate_positive_number("target.timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
