// ── Column accessor table ──
//
// One entry per displayed column, in display order. Cell text comes from a
// typed extraction function; nothing looks fields up by string path.

use crate::model::{Address, ColumnKey, User};

/// A displayed column: key, header label, and cell extractor.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub key: ColumnKey,
    pub label: &'static str,
    extract: fn(&User) -> String,
}

impl Column {
    /// Cell text for `user`. Missing values (at any nesting level) are `""`.
    pub fn value(&self, user: &User) -> String {
        (self.extract)(user)
    }
}

/// Columns in display order.
pub static COLUMNS: [Column; 9] = [
    Column {
        key: ColumnKey::FirstName,
        label: "First Name",
        extract: first_name,
    },
    Column {
        key: ColumnKey::MaidenName,
        label: "Maiden Name",
        extract: maiden_name,
    },
    Column {
        key: ColumnKey::LastName,
        label: "Last Name",
        extract: last_name,
    },
    Column {
        key: ColumnKey::Age,
        label: "Age",
        extract: age,
    },
    Column {
        key: ColumnKey::Gender,
        label: "Gender",
        extract: gender,
    },
    Column {
        key: ColumnKey::Phone,
        label: "Phone Number",
        extract: phone,
    },
    Column {
        key: ColumnKey::Email,
        label: "Email",
        extract: email,
    },
    Column {
        key: ColumnKey::Country,
        label: "Country",
        extract: country,
    },
    Column {
        key: ColumnKey::City,
        label: "City",
        extract: city,
    },
];

/// Look up the column for `key`.
pub fn column(key: ColumnKey) -> &'static Column {
    &COLUMNS[key.index()]
}

/// Every cell of `user`, in display order.
pub fn row(user: &User) -> Vec<String> {
    COLUMNS.iter().map(|c| c.value(user)).collect()
}

// ── Extractors ───────────────────────────────────────────────────────

fn text(field: Option<&String>) -> String {
    field.cloned().unwrap_or_default()
}

fn address_part(user: &User, part: fn(&Address) -> Option<&String>) -> String {
    text(user.address.as_ref().and_then(part))
}

fn first_name(user: &User) -> String {
    text(user.first_name.as_ref())
}

fn maiden_name(user: &User) -> String {
    text(user.maiden_name.as_ref())
}

fn last_name(user: &User) -> String {
    text(user.last_name.as_ref())
}

fn age(user: &User) -> String {
    user.age.map(|a| a.to_string()).unwrap_or_default()
}

fn gender(user: &User) -> String {
    text(user.gender.as_ref())
}

fn phone(user: &User) -> String {
    text(user.phone.as_ref())
}

fn email(user: &User) -> String {
    text(user.email.as_ref())
}

fn country(user: &User) -> String {
    address_part(user, |a| a.country.as_ref())
}

fn city(user: &User) -> String {
    address_part(user, |a| a.city.as_ref())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    fn emily() -> User {
        User {
            first_name: Some("Emily".into()),
            last_name: Some("Johnson".into()),
            age: Some(28),
            address: Some(Address {
                city: Some("Phoenix".into()),
                country: Some("United States".into()),
                ..Address::default()
            }),
            ..User::with_id(1)
        }
    }

    #[test]
    fn table_matches_key_order() {
        let keys: Vec<_> = COLUMNS.iter().map(|c| c.key).collect();
        let expected: Vec<_> = ColumnKey::iter().collect();
        assert_eq!(keys, expected);
        for c in &COLUMNS {
            assert_eq!(c.label, c.key.label());
        }
    }

    #[test]
    fn extracts_present_values() {
        let user = emily();
        assert_eq!(column(ColumnKey::FirstName).value(&user), "Emily");
        assert_eq!(column(ColumnKey::Age).value(&user), "28");
        assert_eq!(column(ColumnKey::Country).value(&user), "United States");
        assert_eq!(column(ColumnKey::City).value(&user), "Phoenix");
    }

    #[test]
    fn missing_values_are_empty() {
        let user = emily();
        assert_eq!(column(ColumnKey::MaidenName).value(&user), "");
        assert_eq!(column(ColumnKey::Phone).value(&user), "");

        let homeless = User::with_id(2);
        assert_eq!(column(ColumnKey::Country).value(&homeless), "");
        assert_eq!(column(ColumnKey::City).value(&homeless), "");
    }

    #[test]
    fn row_has_one_cell_per_column() {
        let cells = row(&emily());
        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[2], "Johnson");
    }
}
