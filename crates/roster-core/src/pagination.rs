// ── Page arithmetic ──
//
// Pure function of (current page, page size, total items). The pagination
// control and the CLI footer both render from a `PageInfo`.

/// Derived pagination state for one result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Zero-based page index.
    pub current: usize,
    pub per_page: usize,
    /// Total matching items across all pages.
    pub total: u64,
}

impl PageInfo {
    pub fn new(current: usize, per_page: usize, total: u64) -> Self {
        Self {
            current,
            per_page,
            total,
        }
    }

    /// `ceil(total / per_page)`; zero when there are no items.
    pub fn total_pages(&self) -> usize {
        let per_page = u64::try_from(self.per_page.max(1)).unwrap_or(u64::MAX);
        usize::try_from(self.total.div_ceil(per_page)).unwrap_or(usize::MAX)
    }

    /// Page count as displayed: never less than one.
    pub fn displayed_pages(&self) -> usize {
        self.total_pages().max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.current > 0
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.total_pages()
    }

    /// Index the Previous button requests, when enabled.
    pub fn prev(&self) -> Option<usize> {
        self.has_prev().then(|| self.current - 1)
    }

    /// Index the Next button requests, when enabled.
    pub fn next(&self) -> Option<usize> {
        self.has_next().then(|| self.current + 1)
    }

    /// `Page {current+1} of {pages}`.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current + 1, self.displayed_pages())
    }
}
