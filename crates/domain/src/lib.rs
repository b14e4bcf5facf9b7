//! Domain layer for the LLM client
//!
//! Contains the value types the client layer is built from: embedding
//! vectors and their binary codec, embedding documents, structured-output
//! schemas, prompt parts, and tool definitions. This layer performs no I/O.

pub mod document;
pub mod part;
pub mod schema;
pub mod tool;
pub mod vector;

pub use document::EmbedDoc;
pub use part::{Blob, Part};
pub use schema::{Schema, SchemaType};
pub use tool::ToolDefinition;
pub use vector::Vector;
