// ── Core error types ──
//
// User-facing errors from roster-core. The viewer renders the display string
// of a `CoreError` as its single error line, so every variant's message must
// stand on its own.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Fetch errors ─────────────────────────────────────────────────
    #[error("Cannot reach {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Non-success HTTP status. The message format is relied on by the
    /// error view and the CLI.
    #[error("Request failed with {status} error")]
    Status { status: u16 },

    #[error("Unexpected response from server: {message}")]
    InvalidResponse { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("HTTP client error: {0}")]
    Transport(String),
}

impl CoreError {
    /// HTTP status of the failed request, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<roster_api::Error> for CoreError {
    fn from(err: roster_api::Error) -> Self {
        match err {
            roster_api::Error::Status { status, .. } => CoreError::Status { status },
            roster_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            roster_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if let Some(status) = e.status() {
                    CoreError::Status {
                        status: status.as_u16(),
                    }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Transport(e.to_string())
                }
            }
            roster_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            roster_api::Error::Tls(msg) => CoreError::Config {
                message: format!("TLS error: {msg}"),
            },
            roster_api::Error::Deserialization { message, body: _ } => {
                CoreError::InvalidResponse { message }
            }
        }
    }
}
