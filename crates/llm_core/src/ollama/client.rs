//! Ollama client implementation

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use domain::{Part, Schema, ToolDefinition};
use parking_lot::RwLock;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{ClientError, classify_status};
use crate::ports::ContentGenerator;

use super::assemble::assemble_response;

/// System prompt used when the config does not override it
const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant. Use the available tools when \
     they are needed to fulfill the user's request; otherwise respond with text.";

/// A connection to an Ollama-compatible server.
///
/// Implements [`crate::ports::Embedder`] and [`ContentGenerator`]. The
/// client owns no locking beyond the temperature cell; callers issuing
/// concurrent calls on one instance synchronize themselves.
#[derive(Debug)]
pub struct OllamaClient {
    http: Client,
    config: ClientConfig,
    temperature: RwLock<f32>,
    tools: Vec<ToolDefinition>,
}

impl OllamaClient {
    /// Create a client with its own HTTP transport.
    ///
    /// The transport timeout comes from `config.timeout_ms`; an in-flight
    /// request that exceeds it is aborted and surfaced as a timeout error.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ClientError::ConnectionFailed(e.to_string()))?;
        Ok(Self::with_http_client(http, config))
    }

    /// Create a client around a caller-supplied HTTP transport.
    ///
    /// The caller keeps the transport's lifecycle; any timeout configured
    /// on it applies to every request this client issues.
    #[must_use]
    pub fn with_http_client(http: Client, config: ClientConfig) -> Self {
        info!(
            base_url = %config.base_url,
            embed_model = %config.embed_model,
            generation_model = %config.generation_model,
            "Initialized Ollama client"
        );

        let temperature = RwLock::new(config.temperature);
        Self {
            http,
            config,
            temperature,
            tools: Vec::new(),
        }
    }

    /// Advertise the given tools on subsequent generation calls
    #[must_use]
    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    /// The configured embedding model
    #[must_use]
    pub fn embed_model(&self) -> &str {
        &self.config.embed_model
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Build the API URL for a given endpoint
    pub(crate) fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/api/{}",
            self.config.base_url,
            endpoint.trim_start_matches('/')
        )
    }

    fn system_prompt(&self) -> &str {
        self.config
            .system_prompt
            .as_deref()
            .unwrap_or(DEFAULT_SYSTEM_PROMPT)
    }

    fn chat_payload<'a>(&'a self, schema: Option<&'a Schema>, parts: &[Part]) -> ChatPayload<'a> {
        let mut content = String::new();
        let mut images = Vec::new();
        for part in parts {
            match part {
                Part::Text(text) => content.push_str(text),
                Part::Blob(blob) => images.push(BASE64.encode(&blob.data)),
            }
        }

        let tools: Vec<ToolSpec<'a>> = self
            .tools
            .iter()
            .map(|tool| ToolSpec {
                kind: "function",
                function: ToolFunction {
                    name: &tool.name,
                    description: &tool.description,
                    parameters: &tool.parameters,
                },
            })
            .collect();
        let tool_choice = if tools.is_empty() { None } else { Some("auto") };

        ChatPayload {
            model: &self.config.generation_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: self.system_prompt().to_string(),
                },
                ChatMessage {
                    role: "user",
                    content,
                },
            ],
            tools,
            tool_choice,
            max_tokens: self.config.max_tokens,
            temperature: *self.temperature.read(),
            format: schema,
            images,
        }
    }
}

/// Chat-style generation request payload
#[derive(Debug, Serialize)]
struct ChatPayload<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<ToolSpec<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<&'static str>,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    images: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ToolSpec<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    function: ToolFunction<'a>,
}

#[derive(Debug, Serialize)]
struct ToolFunction<'a> {
    name: &'a str,
    description: &'a str,
    parameters: &'a Schema,
}

#[async_trait]
impl ContentGenerator for OllamaClient {
    fn model(&self) -> &str {
        &self.config.generation_model
    }

    #[instrument(skip(self, schema, parts), fields(model = %self.config.generation_model, parts = parts.len()))]
    async fn generate_content(
        &self,
        schema: Option<&Schema>,
        parts: &[Part],
    ) -> Result<String, ClientError> {
        let payload = self.chat_payload(schema, parts);

        debug!("Sending generate request");

        let response = self
            .http
            .post(self.api_url("generate"))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        classify_status(status, &body)?;

        assemble_response(&body)
    }

    fn set_temperature(&self, temperature: f32) {
        *self.temperature.write() = temperature;
    }
}
