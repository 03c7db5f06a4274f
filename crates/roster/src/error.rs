//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use roster_config::ConfigError;
use roster_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to {url}")]
    #[diagnostic(
        code(roster::connection_failed),
        help(
            "Check the base URL and your network connection.\n\
             Reason: {reason}\n\
             Override with: roster --base-url <URL> list"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(roster::timeout),
        help("Increase the timeout with --timeout or [api] timeout in the config file.")
    )]
    Timeout { seconds: u64 },

    // ── API ──────────────────────────────────────────────────────────
    #[error("Request failed with {status} error")]
    #[diagnostic(code(roster::api_error))]
    Api { status: u16 },

    #[error("Unexpected response from server")]
    #[diagnostic(
        code(roster::invalid_response),
        help("Is the base URL pointing at a dummyjson-compatible API?\n{message}")
    )]
    InvalidResponse { message: String },

    #[error("HTTP client error: {message}")]
    #[diagnostic(code(roster::transport))]
    Transport { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(roster::validation))]
    Validation { field: String, reason: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(roster::config),
        help("Inspect the effective settings with: roster config show")
    )]
    Config { message: String },

    #[error("Config file already exists at {path}")]
    #[diagnostic(
        code(roster::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render output: {0}")]
    #[diagnostic(code(roster::output))]
    Output(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::Config { .. } | Self::ConfigExists { .. } => {
                exit_code::USAGE
            }
            Self::Api { .. }
            | Self::InvalidResponse { .. }
            | Self::Transport { .. }
            | Self::Io(_)
            | Self::Output(_) => exit_code::GENERAL,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => Self::ConnectionFailed { url, reason },
            CoreError::Timeout { timeout_secs } => Self::Timeout {
                seconds: timeout_secs,
            },
            CoreError::Status { status } => Self::Api { status },
            CoreError::InvalidResponse { message } => Self::InvalidResponse { message },
            CoreError::Config { message } => Self::Config { message },
            CoreError::Transport(message) => Self::Transport { message },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::Io(e) => Self::Io(e),
            other => Self::Config {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_by_category() {
        let connection: CliError = CoreError::ConnectionFailed {
            url: "http://127.0.0.1:9/users".into(),
            reason: "refused".into(),
        }
        .into();
        assert_eq!(connection.exit_code(), exit_code::CONNECTION);

        let timeout: CliError = CoreError::Timeout { timeout_secs: 5 }.into();
        assert_eq!(timeout.exit_code(), exit_code::TIMEOUT);

        let api: CliError = CoreError::Status { status: 500 }.into();
        assert_eq!(api.exit_code(), exit_code::GENERAL);
        assert_eq!(api.to_string(), "Request failed with 500 error");

        let config: CliError = ConfigError::Validation {
            field: "api.page_size".into(),
            reason: "must be at least 1".into(),
        }
        .into();
        assert_eq!(config.exit_code(), exit_code::USAGE);
    }
}
