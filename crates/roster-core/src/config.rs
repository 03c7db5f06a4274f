// ── Runtime viewer configuration ──
//
// Describes *where* to fetch from and how to lay out the table. Never touches
// disk: `roster-config` resolves files and environment, the binaries build a
// `ViewerConfig` and hand it in.

use std::path::PathBuf;
use std::time::Duration;

use roster_api::{TlsMode, TransportConfig};
use url::Url;

use crate::error::CoreError;
use crate::layout::DEFAULT_MIN_WIDTH;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed mirrors).
    DangerAcceptInvalid,
}

/// Everything the viewer needs for one session.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// API root, e.g. `https://dummyjson.com`. `/users` is appended.
    pub base_url: Url,
    /// Rows per page; fixed for the session.
    pub page_size: usize,
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
    /// Minimum column width in terminal cells.
    pub min_column_width: u16,
}

impl ViewerConfig {
    /// Config for `base_url` with every other setting at its default.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            page_size: DEFAULT_PAGE_SIZE,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            min_column_width: DEFAULT_MIN_WIDTH,
        }
    }

    /// Reject values that would make the view-state math meaningless.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.page_size == 0 {
            return Err(CoreError::Config {
                message: "page_size must be at least 1".into(),
            });
        }
        if self.min_column_width == 0 {
            return Err(CoreError::Config {
                message: "min_column_width must be at least 1".into(),
            });
        }
        if self.base_url.cannot_be_a_base() {
            return Err(CoreError::Config {
                message: format!("base_url is not a base URL: {}", self.base_url),
            });
        }
        Ok(())
    }

    /// Transport settings for building the HTTP client.
    pub fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ViewerConfig {
        ViewerConfig::new(Url::parse(DEFAULT_BASE_URL).expect("static URL"))
    }

    #[test]
    fn defaults_are_valid() {
        let config = defaults();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.base_url.as_str(), "https://dummyjson.com/");
    }

    #[test]
    fn zero_page_size_rejected() {
        let config = ViewerConfig {
            page_size: 0,
            ..defaults()
        };
        let err = config.validate().expect_err("page_size 0");
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn transport_maps_tls_mode() {
        let config = ViewerConfig {
            tls: TlsVerification::DangerAcceptInvalid,
            timeout: Duration::from_secs(5),
            ..defaults()
        };
        let transport = config.transport();
        assert!(matches!(transport.tls, TlsMode::DangerAcceptInvalid));
        assert_eq!(transport.timeout, Duration::from_secs(5));
    }
}
