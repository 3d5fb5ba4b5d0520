use std::time::Duration;

use reqwest::Client;

use crate::{
    config::Config,
    error::FetchError,
    model::{ApiEnvelope, WeatherPayload},
};

/// Production endpoint for city weather details.
pub const DEFAULT_BASE_URL: &str = "https://v2.xxapi.cn/api/weatherDetails";

/// Upper bound on one whole lookup, connect time included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the weather-details endpoint.
///
/// Holds no state between calls: repeated lookups with the same inputs are
/// independent requests.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl WeatherClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: config.api_key.clone(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Point the client at a different endpoint, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch current weather for `city` with a single GET request.
    ///
    /// No retries: a failed attempt is final for this invocation. An
    /// envelope without a `data` object yields an empty payload.
    pub async fn fetch(&self, city: &str) -> Result<WeatherPayload, FetchError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[("key", self.api_key.as_str()), ("city", city)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::Network(format!(
                "request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let envelope: ApiEnvelope = serde_json::from_str(&body)?;

        if envelope.code != 0 {
            return Err(FetchError::Api(
                envelope.msg.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(envelope.data.unwrap_or_default())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
