use super::prompt;
use crate::llm::{ChatMessage, CompletionClient, CompletionRequest};
use crate::session::SessionRequest;
use crate::{Error, Result, config::LlmConfig};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Fixed message for the missing-credential refusal. No internal detail
/// beyond the variable name leaves the server.
pub const MISSING_CREDENTIAL: &str = "OPENAI_API_KEY no definida en el servidor";

/// Result of one successful generation: the extracted document text plus the
/// verbatim upstream payload.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSession {
    pub text: String,
    pub raw: Value,
}

/// The relay proper: accepts one [`SessionRequest`], makes exactly one
/// upstream call, returns one [`GeneratedSession`] or one error.
///
/// The credential arrives injected through [`LlmConfig`] at construction,
/// never read from the process environment here, so tests can substitute
/// both the configuration and the client.
pub struct Relay {
    config: LlmConfig,
    client: Arc<dyn CompletionClient>,
}

impl Relay {
    pub fn new(config: LlmConfig, client: Arc<dyn CompletionClient>) -> Self {
        Self { config, client }
    }

    pub async fn generate(&self, request: &SessionRequest) -> Result<GeneratedSession> {
        if self.config.api_key.is_empty() {
            // Refuse before any outbound traffic.
            return Err(Error::config(MISSING_CREDENTIAL));
        }

        // A caller-supplied prompt replaces the template but not the persona.
        let prompt = match &request.prompt {
            Some(prompt) if !prompt.trim().is_empty() => prompt.clone(),
            _ => prompt::build_prompt(&request.details()),
        };

        debug!("Relaying completion request ({} prompt chars)", prompt.len());

        let completion = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(prompt::SYSTEM_PERSONA),
                ChatMessage::user(prompt),
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let raw = self.client.create_completion(completion).await?;
        let text = extract_text(&raw)?;

        Ok(GeneratedSession { text, raw })
    }
}

/// First choice's message content. A payload without that field degrades to
/// its own serialized form, so `text` is always non-empty on success.
fn extract_text(payload: &Value) -> Result<String> {
    match payload["choices"][0]["message"]["content"].as_str() {
        Some(content) => Ok(content.to_string()),
        None => Ok(serde_json::to_string(payload)?),
    }
}
