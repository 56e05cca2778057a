//! HTTP client for the plugin metadata service.
//!
//! The registry answers `GET {base}/plugin/{name}` with a JSON document
//! carrying at least a `repository` field (`owner/repo`). A 404, or a 200
//! whose body lacks a usable `repository`, both mean "no such plugin" --
//! only transport failures and malformed bodies are upstream errors.

use std::time::Duration;

use botforge_core::service::registry::PluginRegistry;
use botforge_types::error::UpstreamError;
use botforge_types::plugin::ResolvedPlugin;
use serde::Deserialize;

/// Default plugin metadata service.
const DEFAULT_REGISTRY_BASE: &str = "https://plugins.botforge.dev";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wire shape of a registry entry. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct PluginRecord {
    #[serde(default)]
    repository: Option<String>,
}

/// Plugin registry backed by the hosted metadata service.
pub struct HttpPluginRegistry {
    base_url: String,
    http: reqwest::Client,
}

impl HttpPluginRegistry {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_REGISTRY_BASE.to_string())
    }

    /// Point at a non-default registry (tests, self-hosted deployments).
    pub fn with_base_url(base_url: String) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("botforge/0.1")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    fn plugin_url(&self, name: &str) -> String {
        format!("{}/plugin/{name}", self.base_url)
    }
}

impl Default for HttpPluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginRegistry for HttpPluginRegistry {
    async fn resolve(&self, name: &str) -> Result<Option<ResolvedPlugin>, UpstreamError> {
        let url = self.plugin_url(name);
        tracing::debug!(plugin = %name, url = %url, "resolving plugin");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(UpstreamError::Request(format!(
                "registry returned {} for '{name}'",
                response.status()
            )));
        }

        let record: PluginRecord = response
            .json()
            .await
            .map_err(|e| UpstreamError::UnexpectedResponse(e.to_string()))?;

        Ok(record
            .repository
            .filter(|repo| !repo.is_empty())
            .map(|repository| ResolvedPlugin {
                name: name.to_string(),
                repository,
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_url() {
        let registry = HttpPluginRegistry::with_base_url("https://reg.local/".to_string());
        assert_eq!(registry.plugin_url("greeter"), "https://reg.local/plugin/greeter");
    }

    #[test]
    fn test_record_with_repository() {
        let record: PluginRecord =
            serde_json::from_str(r#"{"repository": "owner/repo", "stars": 5}"#).unwrap();
        assert_eq!(record.repository.as_deref(), Some("owner/repo"));
    }

    #[test]
    fn test_record_without_repository() {
        let record: PluginRecord = serde_json::from_str(r#"{"name": "greeter"}"#).unwrap();
        assert!(record.repository.is_none());
    }
}
