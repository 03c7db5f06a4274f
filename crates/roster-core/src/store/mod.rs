// ── View-state store ──
//
// Single owner of the viewer's cross-cutting state. Front ends feed it
// `Msg`s and execute the `FetchRequest`s it hands back; results come back in
// as `Msg::FetchFinished` tagged with the request's sequence number.

mod params;
mod reducer;
mod state;

pub use params::{FetchParams, FetchRequest, RequestSeq};
pub use reducer::{Msg, reduce};
pub use state::{FetchState, ViewState};

use tracing::{debug, warn};

/// The view-state store.
///
/// Applies one pure transition per message, then compares the derived
/// [`FetchParams`] with the last issued ones: a change yields exactly one
/// [`FetchRequest`] and moves the fetch state to `Loading`.
#[derive(Debug)]
pub struct Store {
    state: ViewState,
    page_size: usize,
    mounted: bool,
    /// Params of the most recently issued fetch.
    issued: Option<FetchParams>,
    /// Sequence of the most recently issued fetch. Completions carrying any
    /// other sequence are stale.
    latest: Option<RequestSeq>,
    next_seq: u64,
}

impl Store {
    /// A store with default sort/filter and page size `page_size` (at least 1).
    pub fn new(page_size: usize) -> Self {
        Self {
            state: ViewState::default(),
            page_size: page_size.max(1),
            mounted: false,
            issued: None,
            latest: None,
            next_seq: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Params derived from the current state.
    pub fn params(&self) -> FetchParams {
        FetchParams::derive(&self.state, self.page_size)
    }

    /// Sequence number of the fetch whose result the store is waiting for.
    pub fn latest_request(&self) -> Option<RequestSeq> {
        self.latest
    }

    /// Apply `msg`. Returns the fetch to run, if the params changed.
    pub fn dispatch(&mut self, msg: Msg) -> Option<FetchRequest> {
        match msg {
            Msg::Mounted => {
                self.mounted = true;
                self.issued = None;
                self.sync_fetch()
            }
            Msg::FetchFinished { seq, result } => {
                if self.latest != Some(seq) {
                    debug!(%seq, latest = ?self.latest, "dropping stale fetch result");
                    return None;
                }
                if let Err(message) = &result {
                    warn!(%seq, %message, "fetch failed");
                }
                self.apply(Msg::FetchFinished { seq, result });
                None
            }
            other => {
                self.apply(other);
                self.sync_fetch()
            }
        }
    }

    fn apply(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, msg);
    }

    /// Issue a fetch when the derived params differ from the last issued.
    fn sync_fetch(&mut self) -> Option<FetchRequest> {
        if !self.mounted {
            return None;
        }
        let params = self.params();
        if self.issued.as_ref() == Some(&params) {
            return None;
        }

        self.next_seq += 1;
        let seq = RequestSeq(self.next_seq);
        self.latest = Some(seq);
        self.issued = Some(params.clone());
        self.state.fetch = FetchState::Loading;
        debug!(%seq, ?params, "issuing fetch");
        Some(FetchRequest { seq, params })
    }
}
