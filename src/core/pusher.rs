use crate::domain::model::{PushResponse, TokenRequest};
use crate::domain::ports::TokenSink;
use crate::utils::error::{PushError, Result};

/// Validates a token and hands it to a [`TokenSink`], once.
pub struct TokenPusher<S: TokenSink> {
    sink: S,
    fail_on_http_error: bool,
}

impl<S: TokenSink> TokenPusher<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            fail_on_http_error: false,
        }
    }

    pub fn with_fail_on_http_error(mut self, fail: bool) -> Self {
        self.fail_on_http_error = fail;
        self
    }

    /// An empty token fails with a usage error before the sink is touched.
    pub async fn push(&self, token: &str) -> Result<PushResponse> {
        let request = TokenRequest::new(token)?;
        self.send(request).await
    }

    pub async fn send(&self, request: TokenRequest) -> Result<PushResponse> {
        tracing::info!("Pushing access token {}", request.masked());

        let response = self.sink.push(&request).await?;

        if self.fail_on_http_error && !response.is_success() {
            tracing::warn!("Admin endpoint rejected token: HTTP {}", response.status);
            return Err(PushError::ServerRejected {
                status: response.status,
                body: response.body_text(),
            });
        }

        tracing::info!("Admin endpoint answered HTTP {}", response.status);
        Ok(response)
    }
}
