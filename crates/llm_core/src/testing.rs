//! Deterministic stand-ins for the capability traits
//!
//! Semantically useless implementations that are nonetheless helpful when
//! writing tests: fixed vectors, echoed prompts, no I/O.

use async_trait::async_trait;
use domain::{EmbedDoc, Part, Schema, Vector};
use parking_lot::RwLock;

use crate::error::{ClientError, EmbedError};
use crate::ports::{ContentGenerator, Embedder};

/// An [`Embedder`] returning the same fixed vector for every document.
#[derive(Debug, Clone)]
pub struct StaticEmbedder {
    vector: Vector,
}

impl StaticEmbedder {
    /// Create an embedder that answers every document with `vector`
    #[must_use]
    pub const fn new(vector: Vector) -> Self {
        Self { vector }
    }
}

#[async_trait]
impl Embedder for StaticEmbedder {
    async fn embed_docs(&self, docs: &[EmbedDoc]) -> Result<Vec<Vector>, EmbedError> {
        Ok(vec![self.vector.clone(); docs.len()])
    }
}

/// A [`ContentGenerator`] that echoes the text parts of the prompt.
#[derive(Debug)]
pub struct EchoGenerator {
    model: String,
    temperature: RwLock<f32>,
}

impl EchoGenerator {
    /// Create an echo generator reporting the given model name
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: RwLock::new(0.0),
        }
    }

    /// Current temperature, observable for assertions
    #[must_use]
    pub fn temperature(&self) -> f32 {
        *self.temperature.read()
    }
}

#[async_trait]
impl ContentGenerator for EchoGenerator {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate_content(
        &self,
        _schema: Option<&Schema>,
        parts: &[Part],
    ) -> Result<String, ClientError> {
        Ok(parts.iter().filter_map(Part::as_text).collect())
    }

    fn set_temperature(&self, temperature: f32) {
        *self.temperature.write() = temperature;
    }
}
