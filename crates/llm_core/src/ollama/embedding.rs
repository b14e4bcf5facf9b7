//! Batched embedding against the embed endpoint

use async_trait::async_trait;
use domain::{EmbedDoc, Vector};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::{ClientError, EmbedError, classify_status};
use crate::ports::Embedder;

use super::client::OllamaClient;

/// Documents per physical embed request.
///
/// The backend caps its physical batch size, so larger inputs are split
/// client-side. Not tunable per request.
pub const EMBED_BATCH_SIZE: usize = 512;

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vector>,
}

impl OllamaClient {
    async fn embed_chunk(&self, inputs: &[String]) -> Result<Vec<Vector>, ClientError> {
        let request = EmbedRequest {
            model: self.embed_model(),
            input: inputs,
        };

        debug!(inputs = inputs.len(), "Sending embed request");

        let response = self
            .http()
            .post(self.api_url("embed"))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        classify_status(status, &body)?;

        let decoded: EmbedResponse = serde_json::from_slice(&body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        Ok(decoded.embeddings)
    }
}

#[async_trait]
impl Embedder for OllamaClient {
    /// Embed the documents, chunking into [`EMBED_BATCH_SIZE`] requests.
    ///
    /// Chunks are processed strictly in order, one request in flight at a
    /// time; per-chunk vectors are appended in document order. A chunk
    /// failure surfaces an [`EmbedError`] carrying the vectors already
    /// produced for the preceding chunks.
    #[instrument(skip(self, docs), fields(model = %self.embed_model(), docs = docs.len()))]
    async fn embed_docs(&self, docs: &[EmbedDoc]) -> Result<Vec<Vector>, EmbedError> {
        let mut vectors = Vec::with_capacity(docs.len());
        for chunk in docs.chunks(EMBED_BATCH_SIZE) {
            let inputs: Vec<String> = chunk.iter().map(EmbedDoc::embed_input).collect();
            match self.embed_chunk(&inputs).await {
                Ok(embeddings) => vectors.extend(embeddings),
                Err(source) => {
                    warn!(completed = vectors.len(), error = %source, "Embedding batch failed");
                    return Err(EmbedError {
                        completed: vectors,
                        source,
                    });
                },
            }
        }
        Ok(vectors)
    }
}
