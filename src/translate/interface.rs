use serde::Serialize;
use thiserror::Error;

use crate::credential::Credential;

/// Guards checked before a request may be built. None of these reach the
/// provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("source text is empty")]
    EmptyText,
    #[error("target language is empty")]
    EmptyLanguage,
    #[error("no API key configured")]
    MissingCredential,
}

/// One translation job. Only constructible with non-empty text, a non-blank
/// language and a credential.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    source_text: String,
    target_language: String,
    credential: Credential,
}

impl TranslationRequest {
    pub fn new(
        source_text: impl Into<String>,
        target_language: impl Into<String>,
        credential: Option<Credential>,
    ) -> Result<Self, RequestError> {
        let source_text = source_text.into();
        let target_language = target_language.into();

        if source_text.is_empty() {
            return Err(RequestError::EmptyText);
        }
        if target_language.trim().is_empty() {
            return Err(RequestError::EmptyLanguage);
        }
        let credential = credential.ok_or(RequestError::MissingCredential)?;

        Ok(Self {
            source_text,
            target_language,
            credential,
        })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }
}

/// Any provider-side fault, collapsed to its description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TranslationError {
    pub message: String,
}

impl TranslationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome of a single translation as shown to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TranslationResult {
    Success { text: String },
    Error { error_message: String },
}

impl From<Result<String, TranslationError>> for TranslationResult {
    fn from(result: Result<String, TranslationError>) -> Self {
        match result {
            Ok(text) => Self::Success { text },
            Err(e) => Self::Error {
                error_message: e.message,
            },
        }
    }
}
