// ── Transitions ──
//
// One arm per message. Pure: no I/O, no sequence bookkeeping (the `Store`
// decides which completions reach this point).

use super::params::RequestSeq;
use super::state::{FetchState, ViewState};
use crate::model::{ColumnKey, FilterPatch, Page, User};

/// Inputs to the store.
#[derive(Debug, Clone)]
pub enum Msg {
    /// The viewer is up; issue the first fetch.
    Mounted,
    /// Pagination asked for this zero-based page.
    PageRequested(usize),
    /// A header was clicked (or its sort key pressed).
    HeaderClicked(ColumnKey),
    FilterChanged(FilterPatch),
    RowSelected(User),
    ModalClosed,
    /// A fetch completed. `Err` carries the display message.
    FetchFinished {
        seq: RequestSeq,
        result: Result<Page, String>,
    },
}

/// Apply one message to `state`.
pub fn reduce(mut state: ViewState, msg: Msg) -> ViewState {
    match msg {
        Msg::Mounted => {}
        Msg::PageRequested(index) => state.page_index = index,
        Msg::HeaderClicked(key) => state.sort = state.sort.toggle(key),
        Msg::FilterChanged(patch) => {
            let before = state.filter.clone();
            state.filter = state.filter.merge(patch);
            if state.filter.effective() != before.effective() {
                state.page_index = 0;
            }
        }
        Msg::RowSelected(user) => {
            state.selected = Some(user);
            state.modal_visible = true;
        }
        Msg::ModalClosed => state.modal_visible = false,
        Msg::FetchFinished { result, .. } => {
            state.fetch = match result {
                Ok(page) => FetchState::Ready(page),
                Err(message) => FetchState::Failed(message),
            };
        }
    }
    state
}
