// Listing API HTTP client
//
// Wraps `reqwest::Client` with URL construction for the two listing forms
// and uniform status/body handling. Every failure is mapped into `Error`
// before the caller sees it.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::UsersResponse;
use crate::query::UserQuery;
use crate::transport::TransportConfig;

/// Raw HTTP client for the user-listing endpoint.
///
/// Read-only: the only operation is a paginated GET. Non-2xx responses are
/// surfaced as [`Error::Status`]; timeouts as [`Error::Timeout`].
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: reqwest::Client,
    base_url: Url,
    /// Request timeout the `http` client was built with, for error reporting.
    timeout: Option<Duration>,
}

impl UsersClient {
    /// Create a client from a `TransportConfig`.
    ///
    /// `base_url` is the API root, e.g. `https://dummyjson.com`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            timeout: Some(transport.timeout),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            timeout: None,
        }
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch one page of users.
    ///
    /// Uses `/users/filter` when the query carries a filter clause and
    /// `/users` otherwise.
    pub async fn list_users(&self, query: &UserQuery) -> Result<UsersResponse, Error> {
        let url = query.url(&self.base_url)?;
        let page: UsersResponse = self.get(url).await?;
        debug!(
            returned = page.users.len(),
            total = page.total,
            skip = page.skip,
            "listing page received"
        );
        Ok(page)
    }

    // ── Request helpers ──────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        self.parse_body(resp).await
    }

    async fn parse_body<T: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            trace!(status = status.as_u16(), "non-success response");
            return Err(Error::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let body = resp.text().await.map_err(|e| self.map_transport(e))?;

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })
    }

    fn map_transport(&self, err: reqwest::Error) -> Error {
        match self.timeout {
            Some(timeout) if err.is_timeout() => Error::Timeout {
                timeout_secs: timeout.as_secs(),
            },
            _ => Error::Transport(err),
        }
    }
}
