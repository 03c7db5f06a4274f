//! Child components composed by the users screen.

pub mod detail_modal;
pub mod filter_bar;
pub mod pagination;
pub mod resizable_table;

use ratatui::layout::{Position, Rect};

/// Whether terminal cell (`column`, `row`) lies inside `rect`.
pub(crate) fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}
