//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::sync::Arc;

use roster_core::{ColumnKey, FilterPatch, Msg, Page, RequestSeq, User, ViewState};

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── View intents (translated into store messages) ─────────────
    RequestPage(usize),
    SortBy(ColumnKey),
    PatchFilter(FilterPatch),
    SelectUser(User),
    CloseModal,

    // ── Data Events ───────────────────────────────────────────────
    FetchFinished {
        seq: RequestSeq,
        result: Result<Page, String>,
    },
    /// Snapshot of the store after a change, fanned out to components.
    ViewUpdated(Arc<ViewState>),

    // ── Filter editing ────────────────────────────────────────────
    /// Filter line gained (`true`) or lost input focus.
    FilterEditing(bool),

    // ── Help ──────────────────────────────────────────────────────
    ToggleHelp,
}

impl Action {
    /// Store message for actions that change view state.
    pub fn to_msg(&self) -> Option<Msg> {
        match self {
            Self::RequestPage(index) => Some(Msg::PageRequested(*index)),
            Self::SortBy(key) => Some(Msg::HeaderClicked(*key)),
            Self::PatchFilter(patch) => Some(Msg::FilterChanged(patch.clone())),
            Self::SelectUser(user) => Some(Msg::RowSelected(user.clone())),
            Self::CloseModal => Some(Msg::ModalClosed),
            Self::FetchFinished { seq, result } => Some(Msg::FetchFinished {
                seq: *seq,
                result: result.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_map_to_messages() {
        assert!(matches!(
            Action::SortBy(ColumnKey::Age).to_msg(),
            Some(Msg::HeaderClicked(ColumnKey::Age))
        ));
        assert!(matches!(
            Action::RequestPage(3).to_msg(),
            Some(Msg::PageRequested(3))
        ));
        assert!(Action::Render.to_msg().is_none());
        assert!(Action::FilterEditing(true).to_msg().is_none());
    }
}
