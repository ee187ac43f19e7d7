use async_trait::async_trait;

use super::error::LlmError;
use super::types::{ChatCompletionResponse, ChatMessage};

/// A chat-completion endpoint. Stateless: nothing is remembered between calls.
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    /// Submit one chat request and wait for the full response.
    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<ChatCompletionResponse, LlmError>;
}
