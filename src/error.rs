//! Error types for the Koordinates client.

use serde_json::Value;
use thiserror::Error;

/// Result type for Koordinates operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the Koordinates client.
#[derive(Error, Debug)]
pub enum Error {
    /// The service reported a structured error in the response body.
    ///
    /// The message is `errors.detail` when present, else `errors.items`
    /// joined with `", "`, else the serialized `errors` value.
    #[error("{message}")]
    Api {
        /// Error message taken from the envelope.
        message: String,
        /// Optional status code reported inside the envelope.
        status_code: Option<u16>,
    },

    /// Network or HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error while writing a downloaded archive.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Contents of the service's error envelope. Failure is signalled
/// structurally, by the presence of an `errors` key, never by HTTP status
/// code.
#[derive(Debug, Default, serde::Deserialize)]
struct ErrorBody {
    items: Option<Vec<String>>,
    detail: Option<String>,
}

impl Error {
    /// Detect the service's error envelope in a decoded response body.
    ///
    /// Returns `None` when the body is not an object carrying an `errors`
    /// key, i.e. a successful response.
    pub(crate) fn from_envelope(body: &Value) -> Option<Self> {
        let errors = body.get("errors")?;

        let parsed: ErrorBody = serde_json::from_value(errors.clone()).unwrap_or_default();

        let message = parsed
            .detail
            .filter(|detail| !detail.is_empty())
            .or_else(|| {
                parsed
                    .items
                    .map(|items| items.join(", "))
                    .filter(|joined| !joined.is_empty())
            })
            .unwrap_or_else(|| errors.to_string());

        let status_code = body
            .get("status_code")
            .and_then(Value::as_u64)
            .map(|code| code as u16);

        Some(Error::Api {
            message,
            status_code,
        })
    }
}
