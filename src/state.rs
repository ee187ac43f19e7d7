use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::credential::Credential;
use crate::llm::{ChatClientFactory, MistralClientFactory};
use crate::translate::Translator;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Key found at startup; `None` means users must type one in.
    pub credential: Option<Credential>,
    pub translator: Arc<Translator>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let credential =
            Credential::resolve(&config.translator_config, |name| std::env::var(name).ok());
        let factory = Arc::new(MistralClientFactory::from_config(&config.translator_config));
        Self::with_factory(config, credential, factory)
    }

    pub fn with_factory(
        config: Config,
        credential: Option<Credential>,
        client_factory: Arc<dyn ChatClientFactory>,
    ) -> Self {
        let translator = Arc::new(Translator::from_config(
            client_factory,
            &config.translator_config,
        ));

        Self {
            config: Arc::new(config),
            credential,
            translator,
            started_at: Utc::now(),
        }
    }

    pub fn has_server_credential(&self) -> bool {
        self.credential.is_some()
    }
}
