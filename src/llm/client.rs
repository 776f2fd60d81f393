use super::types::CompletionRequest;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";
/// Upstream calls must settle within this bound; there is no retry layer
/// above, so a hung call would otherwise hold the request slot indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issues exactly one chat-completion call and returns the upstream JSON
    /// payload verbatim. A non-success status maps to
    /// [`Error::UpstreamGateway`] carrying the raw response body as detail.
    async fn create_completion(&self, request: CompletionRequest) -> Result<Value>;
}

/// HTTP client for the OpenAI Chat Completions API and compatible endpoints.
///
/// The payload stays untyped ([`serde_json::Value`]) on purpose: callers
/// relay it downstream unmodified, so deserializing into a response model
/// would only lose fields and reject shapes the relay is required to accept.
pub struct OpenAiHttpClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiHttpClient {
    pub fn new(config: &LlmConfig) -> Self {
        let url = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            COMPLETIONS_PATH
        );
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: config.api_key.clone(),
            url,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiHttpClient {
    async fn create_completion(&self, request: CompletionRequest) -> Result<Value> {
        debug!(
            "Creating chat completion with {} messages",
            request.messages.len()
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("OpenAI API error: {} {}", status, body);
            return Err(Error::upstream(status.as_u16(), body));
        }

        let payload = response.json::<Value>().await?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_config() -> LlmConfig {
        LlmConfig {
            base_url: "https://api.openai.com".to_string(),
            api_key: "test-api-key".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 1400,
            temperature: 0.2,
        }
    }

    #[test]
    fn endpoint_url_is_joined_onto_base() {
        let client = OpenAiHttpClient::new(&create_test_config());
        assert_eq!(client.url, "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        let mut config = create_test_config();
        config.base_url = "http://localhost:1234/".to_string();

        let client = OpenAiHttpClient::new(&config);
        assert_eq!(client.url, "http://localhost:1234/v1/chat/completions");
    }
}
