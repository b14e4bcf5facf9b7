//! LLM client core
//!
//! Client-side abstractions for talking to local large-language-model
//! services: capability traits for embedding and content generation, the
//! error taxonomy, and the one HTTP-based backend client (Ollama-compatible).
//!
//! The crate emits `tracing` events but never installs a subscriber; the
//! embedding process owns logger setup.

pub mod config;
pub mod error;
pub mod ollama;
pub mod ports;
pub mod testing;

pub use config::{ClientConfig, resolve_base_url};
pub use error::{ClientError, EmbedError};
pub use ollama::{EMBED_BATCH_SIZE, GenerateChunk, OllamaClient, assemble_response};
pub use ports::{ContentGenerator, Embedder, ToolProvider};
