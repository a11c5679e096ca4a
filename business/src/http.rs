//! Shared pieces of the `ehttp` call sites.

use serde::Deserialize;
use thiserror::Error;

/// Error raised by a backend call. The `Display` text is what the user
/// sees, composed at the call site from the backend's `error` field or
/// the operation's fallback message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{0}")]
    Backend(String),
    /// The request never completed.
    #[error("{0}")]
    Transport(String),
    /// The backend rejected the token.
    #[error("sessão expirada")]
    Unauthorized,
}

/// Shape of the backend's JSON error bodies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Extracts the `error` field from a response body, falling back to the
/// given message when the body has none.
pub fn error_message(body: &[u8], fallback: String) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or(fallback)
}

/// Header set sent with every admin call.
pub fn admin_headers(token: &str) -> ehttp::Headers {
    ehttp::Headers::new(&[
        ("Content-Type", "application/json"),
        ("x-access-token", token),
    ])
}
