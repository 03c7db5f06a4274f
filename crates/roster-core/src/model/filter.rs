// ── Filter criteria ──

use super::column::ColumnKey;

/// Single-field filter. Empty `text` means no filtering, whatever `field` is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub field: ColumnKey,
    pub text: String,
}

/// Partial update emitted by the filter control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub field: Option<ColumnKey>,
    pub text: Option<String>,
}

impl FilterPatch {
    pub fn field(field: ColumnKey) -> Self {
        Self {
            field: Some(field),
            text: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            field: None,
            text: Some(text.into()),
        }
    }
}

impl FilterSpec {
    pub fn new(field: ColumnKey, text: impl Into<String>) -> Self {
        Self {
            field,
            text: text.into(),
        }
    }

    /// Apply `patch`, keeping whatever it leaves unset.
    #[must_use]
    pub fn merge(self, patch: FilterPatch) -> Self {
        Self {
            field: patch.field.unwrap_or(self.field),
            text: patch.text.unwrap_or(self.text),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.text.is_empty()
    }

    /// `(field, text)` as sent to the server, or `None` when inactive.
    pub fn effective(&self) -> Option<(ColumnKey, &str)> {
        self.is_active().then_some((self.field, self.text.as_str()))
    }
}
