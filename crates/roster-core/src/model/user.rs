// ── User domain types ──

use serde::{Deserialize, Serialize};

/// Postal address of a [`User`]. Every part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// `address, city, state, country`. Absent parts render as empty segments.
    pub fn one_line(&self) -> String {
        [&self.address, &self.city, &self.state, &self.country]
            .iter()
            .map(|part| part.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One record from the listing endpoint. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub first_name: Option<String>,
    pub maiden_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    /// Centimetres.
    pub height: Option<f64>,
    /// Kilograms.
    pub weight: Option<f64>,
    pub address: Option<Address>,
}

impl User {
    /// A record with only the id set.
    pub fn with_id(id: u64) -> Self {
        Self {
            id,
            first_name: None,
            maiden_name: None,
            last_name: None,
            age: None,
            gender: None,
            phone: None,
            email: None,
            image: None,
            height: None,
            weight: None,
            address: None,
        }
    }

    /// `first last`, trimmed when either half is missing.
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{first} {last}").trim().to_owned()
    }

    pub fn address_line(&self) -> String {
        self.address
            .as_ref()
            .map(Address::one_line)
            .unwrap_or_default()
    }

    pub fn height_label(&self) -> String {
        self.height.map(|h| format!("{h} cm")).unwrap_or_default()
    }

    pub fn weight_label(&self) -> String {
        self.weight.map(|w| format!("{w} kg")).unwrap_or_default()
    }
}

/// One page of results. Replaced wholesale on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub users: Vec<User>,
    /// Matching records across all pages.
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }
}
