//! In-process stand-ins for the provider, shared by unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::chat_client_interface::ChatCompletionClient;
use super::client_factory::ChatClientFactory;
use super::error::LlmError;
use super::types::{ChatChoice, ChatCompletionResponse, ChatMessage, ChatRole};
use crate::credential::Credential;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub credential: String,
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Clone)]
enum Reply {
    Text(String),
    Fail(String),
    NoChoices,
}

/// Factory whose clients record every call and answer with a canned reply.
#[derive(Clone)]
pub struct RecordingFactory {
    reply: Reply,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingFactory {
    pub fn replying(text: &str) -> Self {
        Self::with(Reply::Text(text.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::with(Reply::Fail(message.to_string()))
    }

    pub fn empty() -> Self {
        Self::with(Reply::NoChoices)
    }

    fn with(reply: Reply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ChatClientFactory for RecordingFactory {
    fn create(&self, credential: &Credential) -> Result<Arc<dyn ChatCompletionClient>, LlmError> {
        Ok(Arc::new(RecordingClient {
            credential: credential.expose().to_string(),
            reply: self.reply.clone(),
            calls: self.calls.clone(),
        }))
    }
}

struct RecordingClient {
    credential: String,
    reply: Reply,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

#[async_trait]
impl ChatCompletionClient for RecordingClient {
    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<ChatCompletionResponse, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            credential: self.credential.clone(),
            model: model.to_string(),
            messages: messages.to_vec(),
        });

        match &self.reply {
            Reply::Text(text) => Ok(ChatCompletionResponse {
                id: Some("test".to_string()),
                model: Some(model.to_string()),
                choices: vec![ChatChoice {
                    message: ChatMessage {
                        role: ChatRole::Assistant,
                        content: text.clone(),
                    },
                    finish_reason: Some("stop".to_string()),
                }],
            }),
            Reply::Fail(message) => Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            }),
            Reply::NoChoices => Err(LlmError::EmptyChoices),
        }
    }
}
