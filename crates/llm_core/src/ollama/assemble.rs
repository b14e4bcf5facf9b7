//! Generation response assembly
//!
//! The backend may answer a generation call with a single JSON object or a
//! stream of newline-delimited JSON objects, each carrying a partial text
//! fragment. The assembler turns either shape into one aggregated string.

use serde::Deserialize;
use tracing::trace;

use crate::error::ClientError;

/// One decoded unit of a streamed generation reply
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateChunk {
    /// Model that produced the chunk
    #[serde(default)]
    pub model: String,
    /// Creation timestamp as reported by the backend
    #[serde(default)]
    pub created_at: String,
    /// Partial text
    #[serde(default)]
    pub response: String,
    /// Whether the backend considers the reply complete
    #[serde(default)]
    pub done: bool,
}

/// Assemble a generation reply body into one text result.
///
/// Each non-blank line is decoded independently as a [`GenerateChunk`] and
/// the partial texts are concatenated in line order. Fail-fast: the first
/// undecodable line aborts the whole assembly with an error and no partial
/// text. The completion flag is decoded but never short-circuits; all lines
/// are processed regardless of its value.
pub fn assemble_response(body: &[u8]) -> Result<String, ClientError> {
    let text = std::str::from_utf8(body)
        .map_err(|e| ClientError::InvalidResponse(format!("invalid UTF-8: {e}")))?;

    let mut assembled = String::new();
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        trace!(line = %line, "Decoding response chunk");

        let chunk: GenerateChunk = serde_json::from_str(line)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {e}")))?;
        assembled.push_str(&chunk.response);
    }
    Ok(assembled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_two_chunks() {
        let body = b"{\"response\":\"Hel\",\"done\":false}\n{\"response\":\"lo\",\"done\":true}";
        assert_eq!(assemble_response(body).expect("assemble"), "Hello");
    }

    #[test]
    fn assembles_single_object() {
        let body = br#"{"model":"llama3.2:3b","created_at":"2025-01-01T00:00:00Z","response":"Hi!","done":true}"#;
        assert_eq!(assemble_response(body).expect("assemble"), "Hi!");
    }

    #[test]
    fn malformed_middle_line_aborts_without_partial_result() {
        let body = b"{\"response\":\"Hel\",\"done\":false}\nnot json\n{\"response\":\"lo\",\"done\":true}";
        let err = assemble_response(body).expect_err("must fail fast");
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn done_flag_does_not_short_circuit() {
        let body = b"{\"response\":\"a\",\"done\":true}\n{\"response\":\"b\",\"done\":false}";
        assert_eq!(assemble_response(body).expect("assemble"), "ab");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let body = b"{\"response\":\"a\",\"done\":false}\n\n{\"response\":\"b\",\"done\":true}\n";
        assert_eq!(assemble_response(body).expect("assemble"), "ab");
    }

    #[test]
    fn empty_body_assembles_to_empty_string() {
        assert_eq!(assemble_response(b"").expect("assemble"), "");
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let err = assemble_response(&[0xff, 0xfe, 0x00]).expect_err("must reject");
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn chunk_carries_model_and_timestamp() {
        let chunk: GenerateChunk = serde_json::from_str(
            r#"{"model":"llama3.2:3b","created_at":"2025-01-01T00:00:00Z","response":"x","done":false}"#,
        )
        .expect("deserialize");
        assert_eq!(chunk.model, "llama3.2:3b");
        assert_eq!(chunk.created_at, "2025-01-01T00:00:00Z");
        assert_eq!(chunk.response, "x");
        assert!(!chunk.done);
    }
}
