//! Gemini HTTP client for route planning.
//!
//! One `generateContent` call per `fetch_routes` invocation, no internal
//! retries; a fresh call is the unit of retry. The API key is resolved from
//! the environment on every call so that a key injected after process start
//! is still picked up.

use tracing::error;

use crate::domain::RouteOption;

use super::decode::decode_route_options;
use super::error::RouteError;
use super::prompt::build_prompt;
use super::schema::route_options_schema;
use super::types::{GenerateContentRequest, GenerateContentResponse};

/// Default base URL for the generative-model service.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model identifier.
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the API key.
const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default request timeout. Structured generation can take tens of seconds,
/// so this is much looser than a typical API timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Name of the environment variable holding the API key.
    ///
    /// The key itself is deliberately not stored here: it is re-read from
    /// the environment on every call.
    pub api_key_env: String,
    /// Base URL for the API (overridable for testing)
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeminiConfig {
    /// Create a config with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the environment variable the API key is read from.
    pub fn with_api_key_env(mut self, name: impl Into<String>) -> Self {
        self.api_key_env = name.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Read the API key from the environment, fresh.
    ///
    /// Whitespace-only values count as absent.
    pub fn resolve_api_key(&self) -> Result<String, RouteError> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => Err(RouteError::NotConfigured(format!(
                "set {} to a Gemini API key",
                self.api_key_env
            ))),
        }
    }
}

/// Client for the Gemini `generateContent` endpoint.
///
/// Stateless between calls: no shared caches, no de-duplication, no
/// cancellation. Concurrent `fetch_routes` calls are fully independent.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, RouteError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Fetch candidate itineraries for one origin/destination pair.
    ///
    /// Performs exactly one outbound request. On success the returned set
    /// is wholly owned by the caller; the client keeps no reference. An
    /// empty set is a valid result and is not rejected. On failure the
    /// error is always one classified [`RouteError`], and the diagnostic
    /// detail (including raw model text on a parse failure) has already
    /// been written to the error log.
    pub async fn fetch_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RouteOption>, RouteError> {
        self.fetch_routes_inner(origin, destination)
            .await
            .inspect_err(|e| match e {
                RouteError::MalformedResponse { message, body } => {
                    error!(%message, raw = %body, "failed to decode model response");
                }
                e => error!("route fetch failed: {e}"),
            })
    }

    async fn fetch_routes_inner(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RouteOption>, RouteError> {
        // Checked on every call, before any network traffic
        let api_key = self.config.resolve_api_key()?;

        let prompt = build_prompt(origin, destination);
        let request = GenerateContentRequest::schema_constrained(prompt, route_options_schema());

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(RouteError::from_transport)?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RouteError::from_status(status.as_u16(), body));
        }

        let body = response.text().await.map_err(RouteError::from_transport)?;

        let reply: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| RouteError::MalformedResponse {
                message: format!("invalid response envelope: {e}"),
                body,
            })?;

        let text = reply.text().ok_or(RouteError::EmptyResponse)?;

        decode_route_options(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = GeminiConfig::new();
        assert_eq!(config.api_key_env, DEFAULT_API_KEY_ENV);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn config_builder() {
        let config = GeminiConfig::new()
            .with_base_url("http://localhost:8080")
            .with_model("gemini-test")
            .with_api_key_env("OTHER_KEY")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.api_key_env, "OTHER_KEY");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        let client = GeminiClient::new(GeminiConfig::new());
        assert!(client.is_ok());
    }

    #[test]
    fn missing_key_is_not_configured() {
        // Unique variable name so parallel tests cannot interfere
        let config = GeminiConfig::new().with_api_key_env("ROUTE_SERVER_TEST_KEY_ABSENT");
        assert!(matches!(
            config.resolve_api_key(),
            Err(RouteError::NotConfigured(_))
        ));
    }

    #[test]
    fn blank_key_is_not_configured() {
        let var = "ROUTE_SERVER_TEST_KEY_BLANK";
        unsafe { std::env::set_var(var, "   ") };

        let config = GeminiConfig::new().with_api_key_env(var);
        assert!(matches!(
            config.resolve_api_key(),
            Err(RouteError::NotConfigured(_))
        ));

        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn key_is_trimmed() {
        let var = "ROUTE_SERVER_TEST_KEY_PADDED";
        unsafe { std::env::set_var(var, "  abc123  ") };

        let config = GeminiConfig::new().with_api_key_env(var);
        assert_eq!(config.resolve_api_key().unwrap(), "abc123");

        unsafe { std::env::remove_var(var) };
    }

    #[tokio::test]
    async fn credential_gate_fires_before_any_network_call() {
        // The base URL is unroutable: if the gate did not fire first, the
        // failure would classify as Network, not NotConfigured.
        let config = GeminiConfig::new()
            .with_api_key_env("ROUTE_SERVER_TEST_KEY_GATE")
            .with_base_url("http://127.0.0.1:1")
            .with_timeout(1);
        let client = GeminiClient::new(config).unwrap();

        let err = client.fetch_routes("中環", "山頂").await.unwrap_err();
        assert!(matches!(err, RouteError::NotConfigured(_)));
        assert!(err.user_message().contains("API 金鑰"));
    }
}
