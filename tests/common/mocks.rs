use async_trait::async_trait;
use educa_relay::{
    Error, Result,
    llm::{CompletionClient, CompletionRequest},
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// Mock completion client for testing: records every request and replays
/// canned payloads, or fails with a configured upstream error.
#[derive(Debug)]
pub struct MockCompletionClient {
    pub responses: Arc<Mutex<Vec<Value>>>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
    pub upstream_error: Option<(u16, String)>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            upstream_error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<Value>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_upstream_error(mut self, status: u16, body: impl Into<String>) -> Self {
        self.upstream_error = Some((status, body.into()));
        self
    }

    pub fn get_requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn create_completion(&self, request: CompletionRequest) -> Result<Value> {
        self.requests.lock().unwrap().push(request);

        if let Some((status, body)) = &self.upstream_error {
            return Err(Error::upstream(*status, body.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating test data

/// A well-formed chat-completion payload with the given content.
pub fn chat_payload(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 0,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    })
}

/// A success-status payload missing the expected completion-content field.
pub fn malformed_payload() -> Value {
    json!({"id": "chatcmpl-test", "unexpected": {"shape": true}})
}
