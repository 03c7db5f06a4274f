//! View-state synchronization model for the roster table viewer.
//!
//! Sits between `roster-api` and the front ends (TUI / CLI):
//!
//! - **[`Store`]**: owns the [`ViewState`] and applies one pure transition
//!   per [`Msg`]. Whenever the derived [`FetchParams`] change it hands back a
//!   [`FetchRequest`] tagged with a [`RequestSeq`]; completions carrying an
//!   older sequence are dropped.
//!
//! - **[`UserDirectory`]**: turns fetch params into listing calls and maps
//!   the wire format into the domain [`model`].
//!
//! - **[`layout`]**: column widths, the drag-resize state machine, and the
//!   RAII [`PointerCapture`] held while a drag is in progress.
//!
//! - **[`columns`]** / **[`pagination`]**: the typed column accessor table
//!   and page arithmetic shared by every renderer.

pub mod columns;
pub mod config;
pub mod convert;
pub mod directory;
pub mod error;
pub mod layout;
pub mod model;
pub mod pagination;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use columns::{COLUMNS, Column};
pub use config::{TlsVerification, ViewerConfig};
pub use directory::UserDirectory;
pub use error::CoreError;
pub use layout::{CaptureGuard, ColumnResizer, ColumnWidths, DragState, PointerCapture};
pub use model::{Address, ColumnKey, FilterPatch, FilterSpec, Page, SortSpec, User};
pub use pagination::PageInfo;
pub use store::{FetchParams, FetchRequest, FetchState, Msg, RequestSeq, Store, ViewState};

pub use roster_api::SortOrder;
