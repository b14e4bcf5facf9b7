//! Ollama-compatible backend client
//!
//! Implements [`crate::ports::Embedder`] and [`crate::ports::ContentGenerator`]
//! against any Ollama-compatible server.

mod assemble;
mod client;
mod embedding;

pub use assemble::{GenerateChunk, assemble_response};
pub use client::OllamaClient;
pub use embedding::EMBED_BATCH_SIZE;
