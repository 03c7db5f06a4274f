// ── Sort order ──

use roster_api::SortOrder;

use super::column::ColumnKey;

/// Active sort. `field == None` means unsorted; `order` is then ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub field: Option<ColumnKey>,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn by(field: ColumnKey, order: SortOrder) -> Self {
        Self {
            field: Some(field),
            order,
        }
    }

    /// Three-state header cycle: a new column sorts ascending, the same
    /// ascending column flips to descending, the same descending column
    /// clears the sort.
    #[must_use]
    pub fn toggle(self, key: ColumnKey) -> Self {
        match self.field {
            Some(field) if field == key => match self.order {
                SortOrder::Asc => Self::by(key, SortOrder::Desc),
                SortOrder::Desc => Self::default(),
            },
            _ => Self::by(key, SortOrder::Asc),
        }
    }

    /// `(field, order)` when a sort is active.
    pub fn active(self) -> Option<(ColumnKey, SortOrder)> {
        self.field.map(|field| (field, self.order))
    }

    /// Direction to show on `key`'s header, if it is the sorted column.
    pub fn indicator(self, key: ColumnKey) -> Option<SortOrder> {
        self.active()
            .and_then(|(field, order)| (field == key).then_some(order))
    }
}
