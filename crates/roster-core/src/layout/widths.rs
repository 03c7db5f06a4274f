// ── Column widths ──

/// Narrowest a column may become, in terminal cells.
pub const DEFAULT_MIN_WIDTH: u16 = 6;

/// Per-column widths in terminal cells.
///
/// Empty until the first layout with a known container width; after that
/// every width is at least `min_width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnWidths {
    widths: Vec<u16>,
    min_width: u16,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WIDTH)
    }
}

impl ColumnWidths {
    pub fn new(min_width: u16) -> Self {
        Self {
            widths: Vec::new(),
            min_width: min_width.max(1),
        }
    }

    pub fn min_width(&self) -> u16 {
        self.min_width
    }

    pub fn is_initialized(&self) -> bool {
        !self.widths.is_empty()
    }

    /// Distribute `container` across `columns` unless that already happened.
    /// Returns `true` when widths were (re)computed.
    pub fn ensure(&mut self, columns: usize, container: u16) -> bool {
        if self.widths.len() == columns || columns == 0 || container == 0 {
            return false;
        }
        self.distribute(columns, container);
        true
    }

    /// Equal share of `container` per column, floored at the minimum.
    pub fn distribute(&mut self, columns: usize, container: u16) {
        if columns == 0 {
            self.widths.clear();
            return;
        }
        let count = u16::try_from(columns).unwrap_or(u16::MAX);
        let each = (container / count).max(self.min_width);
        self.widths = vec![each; columns];
    }

    /// Width of column `index`; the minimum for unknown columns.
    pub fn get(&self, index: usize) -> u16 {
        self.widths.get(index).copied().unwrap_or(self.min_width)
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.widths
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.widths.iter().copied().map(u32::from).sum()
    }

    /// Sum of every column except `index`.
    pub fn others(&self, index: usize) -> u32 {
        self.total() - self.widths.get(index).copied().map_or(0, u32::from)
    }

    /// Set column `index`, raising it to the minimum if needed.
    pub fn set(&mut self, index: usize, width: u16) {
        if let Some(slot) = self.widths.get_mut(index) {
            *slot = width.max(self.min_width);
        }
    }

    /// Grow or shrink column `index` by `delta` cells through the same clamp
    /// a drag uses.
    pub fn nudge(&mut self, index: usize, delta: i32, container: u16) -> u16 {
        let width = super::clamp_width(
            i32::from(self.get(index)) + delta,
            self.min_width,
            container,
            self.others(index),
        );
        self.set(index, width);
        width
    }

    /// Widths as rendered inside `container`: columns past the right edge are
    /// truncated (possibly to zero) so the sum never exceeds the container.
    pub fn fit(&self, container: u16) -> Vec<u16> {
        let mut remaining = container;
        self.widths
            .iter()
            .map(|&w| {
                let take = w.min(remaining);
                remaining -= take;
                take
            })
            .collect()
    }

    /// Column whose resize handle (its last cell) sits at `x`, relative to
    /// the table's left edge.
    pub fn handle_at(&self, x: u16, container: u16) -> Option<usize> {
        let mut start = 0u16;
        for (index, w) in self.fit(container).into_iter().enumerate() {
            if w > 0 && x == start + w - 1 {
                return Some(index);
            }
            start += w;
        }
        None
    }

    /// Column containing `x`, relative to the table's left edge.
    pub fn column_at(&self, x: u16, container: u16) -> Option<usize> {
        let mut start = 0u16;
        for (index, w) in self.fit(container).into_iter().enumerate() {
            if x >= start && x < start + w {
                return Some(index);
            }
            start += w;
        }
        None
    }
}
