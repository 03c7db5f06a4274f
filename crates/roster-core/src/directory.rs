// ── User directory ──
//
// Facade over the listing client. Takes store-level `FetchParams`, returns a
// domain `Page`, and never exposes wire types or raw API errors.

use tracing::{debug, instrument};
use url::Url;

use roster_api::UsersClient;

use crate::config::ViewerConfig;
use crate::error::CoreError;
use crate::model::Page;
use crate::store::{FetchParams, FetchRequest, Msg};

/// Read-only access to the remote user listing.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    client: UsersClient,
}

impl UserDirectory {
    /// Validate `config` and build the HTTP client it describes.
    pub fn new(config: &ViewerConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let client = UsersClient::new(config.base_url.clone(), &config.transport())?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn from_client(client: UsersClient) -> Self {
        Self { client }
    }

    pub fn base_url(&self) -> &Url {
        self.client.base_url()
    }

    /// Fetch the page `params` describe.
    #[instrument(skip(self), fields(skip = params.skip, limit = params.page_size))]
    pub async fn fetch(&self, params: &FetchParams) -> Result<Page, CoreError> {
        let query = params.to_query();
        let response = self.client.list_users(&query).await?;
        let page = Page::from(response);
        debug!(rows = page.len(), total = page.total, "page loaded");
        Ok(page)
    }

    /// Run `request` and wrap the outcome as the store message that reports
    /// it.
    pub async fn execute(&self, request: FetchRequest) -> Msg {
        let result = self
            .fetch(&request.params)
            .await
            .map_err(|e| e.to_string());
        Msg::FetchFinished {
            seq: request.seq,
            result,
        }
    }
}
