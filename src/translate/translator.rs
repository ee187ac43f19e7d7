use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use super::interface::{TranslationError, TranslationRequest};
use super::prompt::build_messages;
use crate::config::TranslatorConfig;
use crate::llm::{ChatClientFactory, LlmError};

/// Turns a [`TranslationRequest`] into one chat-completion call.
pub struct Translator {
    client_factory: Arc<dyn ChatClientFactory>,
    model: String,
    directive_template: String,
}

impl Translator {
    pub fn new(
        client_factory: Arc<dyn ChatClientFactory>,
        model: impl Into<String>,
        directive_template: impl Into<String>,
    ) -> Self {
        Self {
            client_factory,
            model: model.into(),
            directive_template: directive_template.into(),
        }
    }

    pub fn from_config(client_factory: Arc<dyn ChatClientFactory>, config: &TranslatorConfig) -> Self {
        Self::new(
            client_factory,
            config.model.clone(),
            config.directive_template.clone(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Exactly one provider call; the first choice's content comes back
    /// verbatim. Every failure is flattened into a [`TranslationError`].
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        let span = info_span!(
            "translate",
            request_id = %Uuid::new_v4(),
            target_language = %request.target_language(),
            source_len = request.source_text().len(),
        );

        self.call_provider(request)
            .instrument(span)
            .await
            .map_err(|e| TranslationError::new(e.to_string()))
    }

    async fn call_provider(&self, request: &TranslationRequest) -> Result<String, LlmError> {
        let messages = build_messages(
            &self.directive_template,
            request.target_language(),
            request.source_text(),
        );

        let client = self.client_factory.create(request.credential())?;
        let response = match client.chat(&self.model, &messages).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Translation failed: {}", e);
                return Err(e);
            }
        };

        let text = response
            .first_content()
            .ok_or(LlmError::EmptyChoices)?
            .to_string();
        info!("Translation complete: {} chars", text.len());
        Ok(text)
    }
}
