use crate::config::ADMIN_KEY_HEADER;
use crate::domain::model::{PushResponse, TokenRequest};
use crate::domain::ports::{ConfigProvider, TokenSink};
use crate::utils::error::Result;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Posts the token to the admin endpoint with reqwest. Single attempt, no retry.
pub struct HttpTokenSink {
    client: Client,
    endpoint: String,
    admin_key: String,
}

impl HttpTokenSink {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint().to_string(),
            admin_key: config.admin_key().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl TokenSink for HttpTokenSink {
    async fn push(&self, request: &TokenRequest) -> Result<PushResponse> {
        tracing::debug!(
            "POST {} with access_token {}",
            self.endpoint,
            request.masked()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ADMIN_KEY_HEADER, &self.admin_key)
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::debug!("Admin endpoint response status: {}", status);

        let body = response.bytes().await?.to_vec();
        Ok(PushResponse { status, body })
    }
}

/// Renders the request as a copy-pasteable curl invocation.
pub fn curl_command<C: ConfigProvider>(config: &C, request: &TokenRequest) -> String {
    let mut lines = vec![format!("curl -X POST {}", shell_quote(config.endpoint()))];
    lines.push(format!("  -H {}", shell_quote("Content-Type: application/json")));
    lines.push(format!(
        "  -H {}",
        shell_quote(&format!("{}: {}", ADMIN_KEY_HEADER, config.admin_key()))
    ));
    if let Some(timeout) = config.timeout() {
        lines.push(format!("  --max-time {}", timeout.as_secs()));
    }
    if config.fail_on_http_error() {
        lines.push("  --fail".to_string());
    }
    lines.push(format!("  -d {}", shell_quote(&request.to_json())));
    lines.join(" \\\n")
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
