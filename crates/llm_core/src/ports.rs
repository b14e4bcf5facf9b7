//! Port definitions for the client layer
//!
//! Defines the capability traits the rest of the system programs against.
//! Each has exactly one production implementation (the Ollama client) and a
//! deterministic stand-in in [`crate::testing`].

use async_trait::async_trait;
use domain::{EmbedDoc, Part, Schema, ToolDefinition, Vector};

use crate::error::{ClientError, EmbedError};

/// Computes vector embeddings of a list of documents.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed the documents, returning one vector per document in input
    /// order.
    ///
    /// Implementations with a batch-size limit split the input into
    /// multiple requests. If a request fails after some documents have
    /// been embedded, the returned [`EmbedError`] carries the vectors for
    /// the prefix already completed.
    async fn embed_docs(&self, docs: &[EmbedDoc]) -> Result<Vec<Vector>, EmbedError>;
}

/// Generates content in response to prompts.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Name of the generative model used by this generator
    fn model(&self) -> &str;

    /// Generate a text response for the prompt parts.
    ///
    /// A schema, when given, is passed to the backend as a structuring
    /// hint; the returned text is not validated against it.
    async fn generate_content(
        &self,
        schema: Option<&Schema>,
        parts: &[Part],
    ) -> Result<String, ClientError>;

    /// Change the sampling temperature for subsequent calls
    fn set_temperature(&self, temperature: f32);
}

/// External capability provider for tool execution.
///
/// Backed by a request/response RPC peer over a local subprocess channel.
/// This layer only consumes tool definitions to advertise them to the
/// generation backend; invoking a tool is the provider's business.
#[async_trait]
pub trait ToolProvider: Send + Sync {
    /// The tools the provider can execute
    async fn list_tools(&self) -> Result<Vec<ToolDefinition>, ClientError>;

    /// Execute a tool by name, returning its textual content
    async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<String, ClientError>;
}
