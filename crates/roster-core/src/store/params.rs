// ── Fetch parameters ──

use std::fmt;

use roster_api::{SortOrder, UserQuery};

use super::state::ViewState;
use crate::model::ColumnKey;

/// Monotonic id of an issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(pub u64);

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything a listing request depends on. A change of this tuple is what
/// triggers a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchParams {
    pub page_size: usize,
    pub skip: usize,
    pub sort: Option<(ColumnKey, SortOrder)>,
    /// Present only when the filter text is non-empty.
    pub filter: Option<(ColumnKey, String)>,
}

impl FetchParams {
    pub fn derive(state: &ViewState, page_size: usize) -> Self {
        Self {
            page_size,
            skip: state.page_index.saturating_mul(page_size),
            sort: state.sort.active(),
            filter: state
                .filter
                .effective()
                .map(|(field, text)| (field, text.to_owned())),
        }
    }

    /// The API query for these params.
    pub fn to_query(&self) -> UserQuery {
        let mut query = UserQuery::page(self.page_size, self.skip);
        if let Some((field, order)) = self.sort {
            query = query.sort_by(field.api_name(), order);
        }
        if let Some((field, text)) = &self.filter {
            query = query.filter(field.api_name(), text.as_str());
        }
        query
    }
}

/// A fetch the caller must execute, tagged for stale-result detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: RequestSeq,
    pub params: FetchParams,
}
