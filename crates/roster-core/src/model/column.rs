// ── Column keys ──
//
// The set of table columns is closed. Each key knows its header label and the
// field name the API understands for `sortBy` / filter `key`.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// Identifies one table column and the user field behind it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ColumnKey {
    #[default]
    #[serde(rename = "firstName")]
    #[strum(serialize = "firstName", serialize = "first-name", serialize = "first")]
    FirstName,
    #[serde(rename = "maidenName")]
    #[strum(serialize = "maidenName", serialize = "maiden-name", serialize = "maiden")]
    MaidenName,
    #[serde(rename = "lastName")]
    #[strum(serialize = "lastName", serialize = "last-name", serialize = "last")]
    LastName,
    #[serde(rename = "age")]
    #[strum(serialize = "age")]
    Age,
    #[serde(rename = "gender")]
    #[strum(serialize = "gender")]
    Gender,
    #[serde(rename = "phone")]
    #[strum(serialize = "phone")]
    Phone,
    #[serde(rename = "email")]
    #[strum(serialize = "email")]
    Email,
    #[serde(rename = "address.country")]
    #[strum(serialize = "address.country", serialize = "country")]
    Country,
    #[serde(rename = "address.city")]
    #[strum(serialize = "address.city", serialize = "city")]
    City,
}

impl ColumnKey {
    /// Field name as sent in `sortBy` and the filter `key` parameter.
    pub fn api_name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::MaidenName => "maidenName",
            Self::LastName => "lastName",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Country => "address.country",
            Self::City => "address.city",
        }
    }

    /// Header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::MaidenName => "Maiden Name",
            Self::LastName => "Last Name",
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::Phone => "Phone Number",
            Self::Email => "Email",
            Self::Country => "Country",
            Self::City => "City",
        }
    }

    /// Position in display order.
    pub fn index(self) -> usize {
        Self::iter().position(|k| k == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Next key in display order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::COUNT).unwrap_or_default()
    }

    /// Previous key in display order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::from_index((self.index() + Self::COUNT - 1) % Self::COUNT).unwrap_or_default()
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}
