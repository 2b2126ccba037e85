use crate::domain::model::{PushResponse, TokenRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn admin_key(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn fail_on_http_error(&self) -> bool;
}

/// Delivers a token to the admin endpoint. Implementations make exactly one
/// attempt per call.
#[async_trait]
pub trait TokenSink: Send + Sync {
    async fn push(&self, request: &TokenRequest) -> Result<PushResponse>;
}
