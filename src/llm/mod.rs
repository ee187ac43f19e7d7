pub mod chat_client_interface;
pub mod client_factory;
pub mod error;
pub mod mistral_client;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use chat_client_interface::*;
pub use client_factory::*;
pub use error::LlmError;
pub use types::*;
