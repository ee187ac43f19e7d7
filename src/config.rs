use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::translate::DEFAULT_DIRECTIVE_TEMPLATE;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server_config: ServerConfig,
    #[serde(default)]
    pub translator_config: TranslatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_directive_template")]
    pub directive_template: String,
    /// Unset means the HTTP client's own defaults.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://api.mistral.ai".to_string()
}

fn default_model() -> String {
    "mistral-large-latest".to_string()
}

fn default_api_key_env() -> String {
    "MISTRAL_API_KEY".to_string()
}

fn default_directive_template() -> String {
    DEFAULT_DIRECTIVE_TEMPLATE.to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            api_key: None,
            directive_template: default_directive_template(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load a YAML or JSON config file, picked by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Configuration file not found: {}", path.display());
        }

        let content = load_text_file(path)?;
        let content = substitute_env_vars(&content, |name| std::env::var(name).ok());

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        let config = match extension.as_deref() {
            Some("json") | Some("jsonld") => serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON config: {}", path.display()))?,
            _ => serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML config: {}", path.display()))?,
        };
        Ok(config)
    }

    /// Try each candidate path in order; fall back to built-in defaults when
    /// none exists. A file that exists but fails to parse is an error.
    pub fn discover(candidates: &[PathBuf]) -> Result<(Self, Option<PathBuf>)> {
        for path in candidates {
            if !path.exists() {
                debug!("No config at {}", path.display());
                continue;
            }
            let config = Self::load(path)?;
            info!("Loaded configuration from: {}", path.display());
            return Ok((config, Some(path.clone())));
        }

        warn!(
            "No configuration file found (tried {:?}); using defaults",
            candidates
        );
        Ok((Self::default(), None))
    }

    /// `CONFIG_PATH`, then `conf.yaml`/`conf.json` in the working directory,
    /// then next to the executable.
    pub fn candidate_paths() -> Vec<PathBuf> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));

        let mut paths: Vec<PathBuf> = std::env::var("CONFIG_PATH")
            .ok()
            .map(PathBuf::from)
            .into_iter()
            .collect();
        paths.push(PathBuf::from("conf.yaml"));
        paths.push(PathBuf::from("conf.json"));
        if let Some(dir) = exe_dir {
            paths.push(dir.join("conf.yaml"));
            paths.push(dir.join("conf.json"));
        }
        paths
    }
}

/// Replace `${VAR}` with the variable's value; unknown variables are left as is.
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> Cow<'_, str>
where
    F: Fn(&str) -> Option<String>,
{
    let pattern = Regex::new(r"\$\{(\w+)\}").expect("valid env var pattern");
    pattern.replace_all(content, |caps: &regex::Captures| {
        lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    })
}

/// Read a text file, honouring a BOM and falling back to Windows-1252 when the
/// bytes are not valid UTF-8.
pub fn load_text_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

    let (encoding, bom_len) = encoding_rs::Encoding::for_bom(&bytes).unwrap_or((encoding_rs::UTF_8, 0));
    let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
    if !had_errors {
        return Ok(text.into_owned());
    }

    debug!("{} is not {}; decoding as windows-1252", path.display(), encoding.name());
    let (text, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(&bytes[bom_len..]);
    Ok(text.into_owned())
}
