use crate::config::toml_config::PusherFileConfig;
use crate::config::{PusherSettings, DEFAULT_ADMIN_KEY, DEFAULT_ENDPOINT};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Clone, Parser)]
#[command(name = "token-pusher")]
#[command(about = "Forward an access token to the HedgeAI admin endpoint")]
pub struct CliConfig {
    /// Access token to store on the server (use `--` before one starting with `-`)
    #[arg(value_name = "ACCESS_TOKEN")]
    pub access_token: Option<String>,

    #[arg(long, env = "TOKEN_PUSHER_ENDPOINT", help = "Admin endpoint URL")]
    pub endpoint: Option<String>,

    #[arg(
        long,
        env = "TOKEN_PUSHER_ADMIN_KEY",
        hide_env_values = true,
        help = "Value sent in the X-ADMIN-KEY header"
    )]
    pub admin_key: Option<String>,

    #[arg(long, env = "TOKEN_PUSHER_CONFIG", help = "TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Abort the request after this many seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Exit with status 22 when the server answers non-2xx")]
    pub fail: bool,

    #[arg(long, help = "Print the equivalent curl command instead of sending")]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Flags (and their env vars) win over the config file, which wins over
    /// the built-in defaults.
    pub fn resolve_settings(&self) -> Result<PusherSettings> {
        let file = match &self.config {
            Some(path) => {
                let file = PusherFileConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => PusherFileConfig::default(),
        };
        let target = file.target;

        let settings = PusherSettings {
            endpoint: self
                .endpoint
                .clone()
                .or(target.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            admin_key: self
                .admin_key
                .clone()
                .or(target.admin_key)
                .unwrap_or_else(|| DEFAULT_ADMIN_KEY.to_string()),
            timeout_seconds: self.timeout_seconds.or(target.timeout_seconds),
            fail_on_http_error: self.fail || target.fail_on_http_error.unwrap_or(false),
        };

        settings.validate()?;
        Ok(settings)
    }
}
