use std::fmt;

use crate::config::TranslatorConfig;

/// Opaque bearer token for the provider. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for empty input; an empty key counts as no key.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Server-side credential: the configured environment variable first,
    /// then `translator_config.api_key`.
    pub fn resolve<F>(config: &TranslatorConfig, lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(&config.api_key_env)
            .and_then(Self::new)
            .or_else(|| {
                config
                    .api_key
                    .as_deref()
                    // An unexpanded `${VAR}` placeholder is not a key.
                    .filter(|key| !(key.starts_with("${") && key.ends_with('}')))
                    .and_then(Self::new)
            })
    }

    /// The server credential wins; otherwise whatever the user typed in.
    pub fn pick(server: Option<&Credential>, submitted: Option<&str>) -> Option<Self> {
        server
            .cloned()
            .or_else(|| submitted.and_then(Self::new))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> TranslatorConfig {
        TranslatorConfig {
            api_key: api_key.map(str::to_string),
            ..TranslatorConfig::default()
        }
    }

    #[test]
    fn empty_values_are_absent() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("   ").is_none());
        assert!(Credential::new("sk-1").is_some());
    }

    #[test]
    fn env_var_takes_precedence_over_file_key() {
        let resolved = Credential::resolve(&config(Some("from-file")), |name| {
            (name == "MISTRAL_API_KEY").then(|| "from-env".to_string())
        });
        assert_eq!(resolved.unwrap().expose(), "from-env");
    }

    #[test]
    fn falls_back_to_file_key() {
        let resolved = Credential::resolve(&config(Some("from-file")), |_| None);
        assert_eq!(resolved.unwrap().expose(), "from-file");
    }

    #[test]
    fn unexpanded_placeholder_is_ignored() {
        let resolved = Credential::resolve(&config(Some("${MISTRAL_API_KEY}")), |_| None);
        assert!(resolved.is_none());
    }

    #[test]
    fn blank_env_var_is_ignored() {
        let resolved = Credential::resolve(&config(None), |_| Some(String::new()));
        assert!(resolved.is_none());
    }

    #[test]
    fn server_credential_wins_over_submitted() {
        let server = Credential::new("server");
        let picked = Credential::pick(server.as_ref(), Some("typed"));
        assert_eq!(picked.unwrap().expose(), "server");

        let picked = Credential::pick(None, Some("typed"));
        assert_eq!(picked.unwrap().expose(), "typed");

        assert!(Credential::pick(None, Some("")).is_none());
        assert!(Credential::pick(None, None).is_none());
    }

    #[test]
    fn debug_is_redacted() {
        let credential = Credential::new("sk-secret").unwrap();
        assert!(!format!("{:?}", credential).contains("secret"));
    }
}
