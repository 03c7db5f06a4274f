// ── Drag-resize state machine ──
//
//   Idle ──(mouse down on handle)──▶ Resizing ──(mouse up / Esc / drop)──▶ Idle
//
// A session records where the drag started and the container width at that
// moment. Every pointer move recomputes the width from those two values.

use tracing::{debug, warn};

use super::capture::{CaptureGuard, PointerCapture};
use super::widths::ColumnWidths;

/// Clamp a proposed column width: at least `min`, and at most what is left
/// of `container` after `others`. The floor wins when the two conflict.
pub fn clamp_width(proposed: i32, min: u16, container: u16, others: u32) -> u16 {
    let upper = u32::from(container)
        .saturating_sub(others)
        .max(u32::from(min));
    let proposed = u32::try_from(proposed).unwrap_or(0);
    u16::try_from(proposed.clamp(u32::from(min), upper)).unwrap_or(u16::MAX)
}

/// An in-progress drag of one column's right edge.
#[derive(Debug)]
pub struct ResizeSession {
    pub column: usize,
    pub start_x: u16,
    pub start_width: u16,
    pub container_width: u16,
    /// Sum of the other columns at drag start.
    others: u32,
    _capture: CaptureGuard,
}

#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Resizing(ResizeSession),
}

/// Owns the drag state for one table.
#[derive(Debug)]
pub struct ColumnResizer {
    state: DragState,
    capture: PointerCapture,
}

impl ColumnResizer {
    pub fn new(capture: PointerCapture) -> Self {
        Self {
            state: DragState::Idle,
            capture,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.state, DragState::Resizing(_))
    }

    /// Column being dragged, if any.
    pub fn active_column(&self) -> Option<usize> {
        match &self.state {
            DragState::Resizing(session) => Some(session.column),
            DragState::Idle => None,
        }
    }

    /// Start dragging `column` from pointer position `x`.
    ///
    /// Ends any previous session first. Returns `false` if the pointer
    /// capture is held elsewhere.
    pub fn begin(&mut self, column: usize, x: u16, widths: &ColumnWidths, container: u16) -> bool {
        self.end();
        let Some(guard) = self.capture.acquire() else {
            warn!(column, "pointer capture busy, ignoring resize start");
            return false;
        };
        debug!(column, x, container, "column resize started");
        self.state = DragState::Resizing(ResizeSession {
            column,
            start_x: x,
            start_width: widths.get(column),
            container_width: container,
            others: widths.others(column),
            _capture: guard,
        });
        true
    }

    /// Apply a pointer move. Returns the new width while resizing.
    pub fn drag_to(&mut self, x: u16, widths: &mut ColumnWidths) -> Option<u16> {
        let DragState::Resizing(session) = &self.state else {
            return None;
        };
        let delta = i32::from(x) - i32::from(session.start_x);
        let width = clamp_width(
            i32::from(session.start_width) + delta,
            widths.min_width(),
            session.container_width,
            session.others,
        );
        widths.set(session.column, width);
        Some(width)
    }

    /// Finish the drag and release the capture. Returns `true` if a drag was
    /// in progress.
    pub fn end(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            DragState::Resizing(session) => {
                debug!(column = session.column, "column resize finished");
                true
            }
            DragState::Idle => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_columns() -> ColumnWidths {
        let mut widths = ColumnWidths::new(6);
        widths.distribute(3, 60);
        widths
    }

    #[test]
    fn clamp_applies_floor_then_cap() {
        assert_eq!(clamp_width(-5, 6, 60, 40), 6);
        assert_eq!(clamp_width(15, 6, 60, 40), 15);
        assert_eq!(clamp_width(50, 6, 60, 40), 20);
        // Floors don't fit: the minimum still wins.
        assert_eq!(clamp_width(50, 6, 60, 58), 6);
    }

    #[test]
    fn drag_grows_and_shrinks_relative_to_start() {
        let capture = PointerCapture::new();
        let mut resizer = ColumnResizer::new(capture.clone());
        let mut widths = three_columns();

        assert!(resizer.begin(0, 19, &widths, 60));
        assert!(capture.is_held());
        assert_eq!(resizer.active_column(), Some(0));

        assert_eq!(resizer.drag_to(23, &mut widths), Some(20), "capped by others");
        assert_eq!(resizer.drag_to(14, &mut widths), Some(15));
        assert_eq!(resizer.drag_to(0, &mut widths), Some(6));
        assert_eq!(widths.get(0), 6);

        assert!(resizer.end());
        assert!(!capture.is_held());
        assert_eq!(resizer.drag_to(30, &mut widths), None);
    }

    #[test]
    fn sum_never_exceeds_container() {
        let capture = PointerCapture::new();
        let mut resizer = ColumnResizer::new(capture);
        let mut widths = ColumnWidths::new(6);
        widths.distribute(4, 80);
        widths.set(1, 10);

        assert!(resizer.begin(1, 29, &widths, 80));
        for x in (0..200).step_by(7) {
            let w = resizer.drag_to(x, &mut widths).expect("resizing");
            assert!(w >= 6);
            assert!(widths.total() <= 80, "x={x} total={}", widths.total());
        }
    }

    #[test]
    fn dropping_mid_drag_releases_capture() {
        let capture = PointerCapture::new();
        let widths = three_columns();
        {
            let mut resizer = ColumnResizer::new(capture.clone());
            assert!(resizer.begin(2, 59, &widths, 60));
            assert!(capture.is_held());
        }
        assert!(!capture.is_held());
    }

    #[test]
    fn busy_capture_refuses_second_drag() {
        let capture = PointerCapture::new();
        let widths = three_columns();
        let mut first = ColumnResizer::new(capture.clone());
        let mut second = ColumnResizer::new(capture.clone());

        assert!(first.begin(0, 19, &widths, 60));
        assert!(!second.begin(1, 39, &widths, 60));
        assert!(!second.is_resizing());
    }
}
