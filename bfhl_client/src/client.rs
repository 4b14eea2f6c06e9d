use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use crate::retry::retry_with_backoff;

/// Status code and decoded JSON body of one API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    #[must_use]
    pub const fn is_success_status(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    #[must_use]
    pub fn is_success_flag(&self) -> Option<bool> {
        self.body.get("is_success").and_then(Value::as_bool)
    }
}

/// HTTP client for a running bfhl server.
pub struct BfhlClient {
    client: Client,
    base_url: String,
    retry_delays: Vec<Duration>,
}

impl BfhlClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("Creating BfhlClient for {base_url}");
        Self {
            client: Client::new(),
            base_url,
            retry_delays: vec![
                Duration::from_millis(250),
                Duration::from_millis(500),
                Duration::from_secs(1),
            ],
        }
    }

    /// Delays between attempts when the server is not reachable yet.
    #[must_use]
    pub fn with_retry_delays(mut self, retry_delays: Vec<Duration>) -> Self {
        self.retry_delays = retry_delays;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /bfhl` with `body` as the JSON payload.
    pub async fn classify(&self, body: &Value) -> anyhow::Result<ApiResponse> {
        let url = format!("{}/bfhl", self.base_url);
        debug!("POST {url}");
        self.send(|| self.client.post(&url).json(body)).await
    }

    /// `GET /`
    pub async fn status(&self) -> anyhow::Result<ApiResponse> {
        let url = format!("{}/", self.base_url);
        debug!("GET {url}");
        self.send(|| self.client.get(&url)).await
    }

    async fn send<B>(&self, build: B) -> anyhow::Result<ApiResponse>
    where
        B: Fn() -> reqwest::RequestBuilder,
    {
        let response = retry_with_backoff(
            || build().send(),
            &self.retry_delays,
            reqwest::Error::is_connect,
        )
        .await
        .map_err(|e| {
            if e.is_connect() {
                anyhow::anyhow!(
                    "No response from server at {}. Make sure the server is running: {e}",
                    self.base_url
                )
            } else {
                anyhow::anyhow!("Request error: {e}")
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .json::<Value>()
            .await
            .map_err(|e| anyhow::anyhow!("Server returned {status} with a non-JSON body: {e}"))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = BfhlClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn success_helpers() {
        let ok = ApiResponse {
            status: 200,
            body: json!({"is_success": true}),
        };
        assert!(ok.is_success_status());
        assert_eq!(ok.is_success_flag(), Some(true));

        let rejected = ApiResponse {
            status: 400,
            body: json!({"is_success": false, "error": "bad"}),
        };
        assert!(!rejected.is_success_status());
        assert_eq!(rejected.is_success_flag(), Some(false));

        let bare = ApiResponse {
            status: 200,
            body: json!({"status": "active"}),
        };
        assert_eq!(bare.is_success_flag(), None);
    }

    #[tokio::test]
    async fn unreachable_server_reports_connection_error() {
        // Port 9 (discard) is not expected to be served locally.
        let client = BfhlClient::new("http://127.0.0.1:9").with_retry_delays(Vec::new());
        let err = client.status().await;
        assert!(err.is_err());
    }
}
