//! Client configuration

use serde::{Deserialize, Serialize};

/// Environment variable naming the backend host
pub const HOST_ENV_VAR: &str = "OLLAMA_HOST";

/// Standard port of the backend
pub const DEFAULT_PORT: u16 = 11434;

/// Configuration for the backend client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used for embedding
    #[serde(default = "default_embed_model")]
    pub embed_model: String,

    /// Model used for content generation
    #[serde(default = "default_generation_model")]
    pub generation_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Token budget for generation
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Initial sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// System prompt override; the built-in prompt is used when absent
    #[serde(default)]
    pub system_prompt: Option<String>,
}

fn default_base_url() -> String {
    resolve_base_url(None)
}

fn default_embed_model() -> String {
    "mxbai-embed-large".to_string()
}

fn default_generation_model() -> String {
    "llama3.2:3b".to_string()
}

const fn default_timeout_ms() -> u64 {
    60000 // 60 seconds
}

const fn default_max_tokens() -> u32 {
    2048
}

const fn default_temperature() -> f32 {
    0.7
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            embed_model: default_embed_model(),
            generation_model: default_generation_model(),
            timeout_ms: default_timeout_ms(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            system_prompt: None,
        }
    }
}

impl ClientConfig {
    /// Config pointed at the given server address.
    ///
    /// An empty address falls back to the environment/loopback resolution
    /// of [`resolve_base_url`].
    #[must_use]
    pub fn for_server(server: &str) -> Self {
        Self {
            base_url: resolve_base_url(Some(server)),
            ..Self::default()
        }
    }

    /// Use the given embedding model
    #[must_use]
    pub fn with_embed_model(mut self, model: impl Into<String>) -> Self {
        self.embed_model = model.into();
        self
    }

    /// Use the given generation model
    #[must_use]
    pub fn with_generation_model(mut self, model: impl Into<String>) -> Self {
        self.generation_model = model.into();
        self
    }
}

/// Resolve the backend base URL.
///
/// An explicit non-empty server address wins. Otherwise the host is taken
/// from the `OLLAMA_HOST` environment variable, defaulting to the loopback
/// address, and combined with the http scheme and the backend's standard
/// port.
#[must_use]
pub fn resolve_base_url(server: Option<&str>) -> String {
    match server {
        Some(server) if !server.is_empty() => server.to_string(),
        _ => {
            let host =
                std::env::var(HOST_ENV_VAR).unwrap_or_else(|_| "127.0.0.1".to_string());
            format!("http://{host}:{DEFAULT_PORT}")
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = ClientConfig::default();
        assert_eq!(config.embed_model, "mxbai-embed-large");
        assert_eq!(config.generation_model, "llama3.2:3b");
        assert_eq!(config.timeout_ms, 60000);
        assert_eq!(config.max_tokens, 2048);
        assert!((config.temperature - 0.7).abs() < 0.01);
        assert!(config.system_prompt.is_none());
    }

    #[test]
    fn explicit_server_address_wins() {
        assert_eq!(
            resolve_base_url(Some("http://example.com:8080")),
            "http://example.com:8080"
        );
    }

    #[test]
    fn empty_server_address_falls_back() {
        let url = resolve_base_url(Some(""));
        assert!(url.starts_with("http://"));
        assert!(url.ends_with(":11434"));
    }

    #[test]
    fn unset_server_address_uses_standard_port() {
        let url = resolve_base_url(None);
        assert!(url.starts_with("http://"));
        assert!(url.ends_with(":11434"));
    }

    #[test]
    fn for_server_sets_base_url() {
        let config = ClientConfig::for_server("http://backend:11434");
        assert_eq!(config.base_url, "http://backend:11434");
        assert_eq!(config.embed_model, "mxbai-embed-large");
    }

    #[test]
    fn model_builders_override_defaults() {
        let config = ClientConfig::default()
            .with_embed_model("bge-m3")
            .with_generation_model("deepseek-r1:7b");
        assert_eq!(config.embed_model, "bge-m3");
        assert_eq!(config.generation_model, "deepseek-r1:7b");
    }

    #[test]
    fn config_deserialization_with_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.embed_model, "mxbai-embed-large");
        assert_eq!(config.timeout_ms, 60000);
    }

    #[test]
    fn config_deserialization_overrides() {
        let json = r#"{"base_url":"http://custom:8080","generation_model":"my-model"}"#;
        let config: ClientConfig = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.base_url, "http://custom:8080");
        assert_eq!(config.generation_model, "my-model");
    }

    #[test]
    fn config_serialization() {
        let json = serde_json::to_string(&ClientConfig::default()).expect("serialize");
        assert!(json.contains("base_url"));
        assert!(json.contains("embed_model"));
    }
}
