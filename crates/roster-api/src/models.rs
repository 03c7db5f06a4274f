// Wire types for the user-listing endpoint
//
// Every field except `id` uses `#[serde(default)]`: the `select` parameter
// trims the payload server-side, and mirrors of the API are not consistent
// about which fields they return.

use serde::{Deserialize, Serialize};

/// Response envelope for `GET /users` and `GET /users/filter`.
///
/// ```json
/// { "users": [...], "total": 208, "skip": 0, "limit": 10 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// One user as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub maiden_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub address: Option<AddressRecord>,
}

/// Postal address nested inside a [`UserRecord`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressRecord {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_user_deserializes() {
        let json = r#"{"users":[{"id":7,"firstName":"Emily","address":{"city":"Phoenix"}}],"total":1}"#;
        let resp: UsersResponse = serde_json::from_str(json).expect("valid payload");

        assert_eq!(resp.total, 1);
        assert_eq!(resp.skip, 0);
        let user = &resp.users[0];
        assert_eq!(user.id, 7);
        assert_eq!(user.first_name.as_deref(), Some("Emily"));
        assert!(user.last_name.is_none());
        let address = user.address.as_ref().expect("address present");
        assert_eq!(address.city.as_deref(), Some("Phoenix"));
        assert!(address.country.is_none());
    }
}
