mod client;
mod types;

pub use client::{CompletionClient, OpenAiHttpClient};
pub use types::{ChatMessage, CompletionRequest};
