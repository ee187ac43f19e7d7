use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::chat_client_interface::ChatCompletionClient;
use super::error::LlmError;
use super::types::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::credential::Credential;

/// Mistral AI chat-completions client
pub struct MistralClient {
    client: Client,
    base_url: String,
    credential: Credential,
}

impl MistralClient {
    pub fn new(
        base_url: &str,
        credential: Credential,
        timeout: Option<Duration>,
    ) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(LlmError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatCompletionClient for MistralClient {
    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<ChatCompletionResponse, LlmError> {
        let url = self.endpoint();
        debug!("POST {} model={} messages={}", url, model, messages.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.credential.expose())
            .json(&ChatCompletionRequest { model, messages })
            .send()
            .await
            .map_err(LlmError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(LlmError::Transport)?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::Decode(e.to_string()))?;
        if parsed.choices.is_empty() {
            return Err(LlmError::EmptyChoices);
        }

        info!(
            "Chat completion received: id={:?} model={:?} choices={} finish_reason={:?}",
            parsed.id,
            parsed.model,
            parsed.choices.len(),
            parsed.choices[0].finish_reason
        );
        Ok(parsed)
    }
}

/// Pull `message` out of a JSON error body, else fall back to the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            message: serde_json::Value::String(message),
        }) => message,
        Ok(ApiErrorBody { message }) => message.to_string(),
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
