pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::{curl_command, HttpTokenSink};
pub use config::PusherSettings;
pub use core::pusher::TokenPusher;
pub use domain::model::{PushResponse, TokenRequest};
pub use utils::error::{PushError, Result};
