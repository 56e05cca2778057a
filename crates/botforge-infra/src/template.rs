//! HTTP template source: fetches the entrypoint file written into every
//! new bot workspace.

use std::time::Duration;

use botforge_core::service::template::TemplateSource;
use botforge_types::error::UpstreamError;

/// Default location of the entrypoint template.
const DEFAULT_TEMPLATE_URL: &str =
    "https://raw.githubusercontent.com/botforge-dev/bot-template/refs/heads/main/bot.js";

/// Outbound request timeout. A hung template fetch must not pin a create
/// request forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the entrypoint template over HTTPS.
pub struct HttpTemplateSource {
    url: String,
    http: reqwest::Client,
}

impl HttpTemplateSource {
    pub fn new() -> Self {
        Self::with_url(DEFAULT_TEMPLATE_URL.to_string())
    }

    /// Use a non-default template location (tests, self-hosted mirrors).
    pub fn with_url(url: String) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("botforge/0.1")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self { url, http }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpTemplateSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSource for HttpTemplateSource {
    async fn fetch(&self) -> Result<String, UpstreamError> {
        tracing::debug!(url = %self.url, "fetching entrypoint template");

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| UpstreamError::UnexpectedResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let source = HttpTemplateSource::new();
        assert!(source.url().starts_with("https://"));
        assert!(source.url().ends_with("bot.js"));
    }

    #[test]
    fn test_with_url_overrides() {
        let source = HttpTemplateSource::with_url("https://mirror.local/bot.js".to_string());
        assert_eq!(source.url(), "https://mirror.local/bot.js");
    }
}
