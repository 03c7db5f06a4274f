// ── Table layout ──
//
// Column widths in terminal cells, the drag-resize state machine, and the
// pointer capture held for the duration of a drag.

pub mod capture;
pub mod resize;
pub mod widths;

pub use capture::{CaptureGuard, PointerCapture};
pub use resize::{ColumnResizer, DragState, ResizeSession, clamp_width};
pub use widths::{ColumnWidths, DEFAULT_MIN_WIDTH};
