use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::chat_client_interface::ChatCompletionClient;
use super::error::LlmError;
use super::mistral_client::MistralClient;
use crate::config::TranslatorConfig;
use crate::credential::Credential;

/// Builds a fresh provider client for every translation.
pub trait ChatClientFactory: Send + Sync {
    fn create(&self, credential: &Credential) -> Result<Arc<dyn ChatCompletionClient>, LlmError>;
}

pub struct MistralClientFactory {
    base_url: String,
    timeout: Option<Duration>,
}

impl MistralClientFactory {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }
}

impl ChatClientFactory for MistralClientFactory {
    fn create(&self, credential: &Credential) -> Result<Arc<dyn ChatCompletionClient>, LlmError> {
        debug!("Creating Mistral client for {}", self.base_url);
        Ok(Arc::new(MistralClient::new(
            &self.base_url,
            credential.clone(),
            self.timeout,
        )?))
    }
}
