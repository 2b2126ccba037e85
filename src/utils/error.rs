use thiserror::Error;

pub const USAGE: &str = "Usage: token-pusher ACCESS_TOKEN";

#[derive(Error, Debug)]
pub enum PushError {
    #[error("Error: {message}\n{}", USAGE)]
    UsageError { message: String },

    #[error("Request to admin endpoint failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Admin endpoint rejected the token with HTTP {status}")]
    ServerRejected { status: u16, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Caller mistake in the invocation or config values; fixed by changing them.
    High,
    /// Remote side failed or refused; may succeed later without local changes.
    Medium,
    /// The local environment failed: config file unreadable or stdout closed.
    Critical,
}

impl PushError {
    pub fn missing_token() -> Self {
        PushError::UsageError {
            message: "no access token provided.".to_string(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PushError::UsageError { .. }
            | PushError::ConfigError { .. }
            | PushError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            PushError::TransportError(_) | PushError::ServerRejected { .. } => {
                ErrorSeverity::Medium
            }
            PushError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            PushError::TransportError(_) => 2,
            // same code curl uses for --fail
            PushError::ServerRejected { .. } => 22,
            _ => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PushError::UsageError { .. } => {
                "Pass the access token as the first argument".to_string()
            }
            PushError::TransportError(e) if e.is_timeout() => {
                "The admin endpoint did not answer in time; raise --timeout-seconds or retry later"
                    .to_string()
            }
            PushError::TransportError(e) if e.is_connect() => {
                "Check network connectivity and that the endpoint host is reachable".to_string()
            }
            PushError::TransportError(_) => {
                "Check the endpoint URL and network connectivity".to_string()
            }
            PushError::ServerRejected { status: 401, .. } => {
                "The admin key was refused; check --admin-key".to_string()
            }
            PushError::ServerRejected { .. } => {
                "Inspect the response body; the server may have rejected the token".to_string()
            }
            PushError::IoError(_) => {
                "Check that the config file is readable and that stdout is still open".to_string()
            }
            PushError::ConfigError { .. } | PushError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PushError::ServerRejected { body, .. } if !body.is_empty() => {
                format!("{}: {}", self, body)
            }
            PushError::ServerRejected { status, .. } => {
                format!("Admin endpoint rejected the token with HTTP {}", status)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PushError>;
