//! Embedding document value object

use serde::{Deserialize, Serialize};

/// A single document to be embedded.
///
/// Immutable once constructed; the title is optional and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedDoc {
    /// Title of the document (may be empty)
    #[serde(default)]
    pub title: String,
    /// Text of the document
    pub text: String,
}

impl EmbedDoc {
    /// Create a document with a title
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// Create a document with an empty title
    pub fn untitled(text: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            text: text.into(),
        }
    }

    /// The flat text submitted to the embedding backend.
    ///
    /// The backend takes a single text field, so title and body are joined
    /// as `title + "\n\n" + text`. The join is literal: no trimming, and an
    /// empty title still contributes its (empty) segment.
    #[must_use]
    pub fn embed_input(&self) -> String {
        format!("{}\n\n{}", self.title, self.text)
    }
}
