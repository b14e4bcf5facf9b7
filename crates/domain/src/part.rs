//! Prompt parts
//!
//! A prompt to a content generator is an ordered sequence of [`Part`]s.
//! The set of part kinds is fixed, so it is a closed sum type and callers
//! match exhaustively.

use serde::{Deserialize, Serialize};

/// Binary data attached to a prompt, like an image or video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    /// MIME type of the data, e.g. `image/png`
    pub mime_type: String,
    /// Raw bytes
    pub data: Vec<u8>,
}

/// One fragment of a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    /// A plain text fragment
    Text(String),
    /// A binary fragment
    Blob(Blob),
}

impl Part {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a blob part
    pub fn blob(mime_type: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Blob(Blob {
            mime_type: mime_type.into(),
            data: data.into(),
        })
    }

    /// The text of this part, if it is a text part
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Blob(_) => None,
        }
    }
}

impl From<&str> for Part {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Part {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_part_round_trips() {
        let part = Part::text("hello");
        assert_eq!(part.as_text(), Some("hello"));
    }

    #[test]
    fn blob_part_has_no_text() {
        let part = Part::blob("image/png", vec![1, 2, 3]);
        assert_eq!(part.as_text(), None);
        match part {
            Part::Blob(blob) => {
                assert_eq!(blob.mime_type, "image/png");
                assert_eq!(blob.data, vec![1, 2, 3]);
            },
            Part::Text(_) => unreachable!("expected a blob"),
        }
    }

    #[test]
    fn part_from_str() {
        let part: Part = "hi".into();
        assert_eq!(part, Part::Text("hi".to_string()));
    }
}
