use thiserror::Error;

/// Client-wide error taxonomy.
///
/// `Validation` is raised before any request leaves the machine; `Api` carries
/// the server-supplied message verbatim; `Network` means no response was
/// obtained at all and is surfaced to the user as a generic connectivity
/// message, never mixed up with `Api`.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of an `Api` error, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for transport-level failures (DNS, connect, timeout) where the
    /// UI should show a generic connectivity notice.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}
