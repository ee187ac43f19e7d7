use thiserror::Error;

/// Failures talking to the chat-completion provider.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to provider failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed provider response: {0}")]
    Decode(String),

    #[error("provider returned no choices")]
    EmptyChoices,
}
