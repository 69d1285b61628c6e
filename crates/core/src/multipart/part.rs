//! Parsed multipart part types.

use bytes::Bytes;

/// One named section of a multipart body.
///
/// Transient: a part exists only for the duration of one request and is
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// A plain text field.
    Text {
        /// Field name from the `Content-Disposition` header.
        name: String,
        /// Field value, trimmed of surrounding whitespace.
        value: String,
    },
    /// A file attachment.
    File {
        /// Field name from the `Content-Disposition` header.
        name: String,
        /// Original filename as submitted by the client.
        filename: String,
        /// Declared content type, `application/octet-stream` when absent.
        content_type: String,
        /// Raw file bytes.
        content: Bytes,
    },
}

impl Part {
    /// Field name this part was submitted under.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }

    /// Text value, if this is a text part.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { value, .. } => Some(value),
            Self::File { .. } => None,
        }
    }

    /// Whether this part carries a file attachment.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }
}
