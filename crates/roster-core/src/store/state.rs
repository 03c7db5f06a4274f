// ── View state ──

use crate::model::{FilterSpec, Page, SortSpec, User};
use crate::pagination::PageInfo;

/// What the data area shows. Exactly one mode at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Loading,
    /// Error message, shown instead of table, pagination and filter.
    Failed(String),
    Ready(Page),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn page(&self) -> Option<&Page> {
        match self {
            Self::Ready(page) => Some(page),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Root-owned view state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub fetch: FetchState,
    /// Zero-based.
    pub page_index: usize,
    pub sort: SortSpec,
    pub filter: FilterSpec,
    pub selected: Option<User>,
    pub modal_visible: bool,
}

impl ViewState {
    /// Pagination for the loaded page; zero total while loading or failed.
    pub fn page_info(&self, per_page: usize) -> PageInfo {
        let total = self.fetch.page().map_or(0, |p| p.total);
        PageInfo::new(self.page_index, per_page, total)
    }

    /// The selected user, only while the modal is open.
    pub fn modal_user(&self) -> Option<&User> {
        if self.modal_visible {
            self.selected.as_ref()
        } else {
            None
        }
    }
}
