// ── API-to-domain type conversions ──
//
// Bridges raw `roster_api` response types into the domain model. The shapes
// are close; the conversion exists so front ends never depend on the wire
// crate.

use roster_api::{AddressRecord, UserRecord, UsersResponse};

use crate::model::{Address, Page, User};

impl From<AddressRecord> for Address {
    fn from(raw: AddressRecord) -> Self {
        Self {
            address: raw.address,
            city: raw.city,
            state: raw.state,
            country: raw.country,
        }
    }
}

impl From<UserRecord> for User {
    fn from(raw: UserRecord) -> Self {
        Self {
            id: raw.id,
            first_name: raw.first_name,
            maiden_name: raw.maiden_name,
            last_name: raw.last_name,
            age: raw.age,
            gender: raw.gender,
            phone: raw.phone,
            email: raw.email,
            image: raw.image,
            height: raw.height,
            weight: raw.weight,
            address: raw.address.map(Address::from),
        }
    }
}

impl From<UsersResponse> for Page {
    fn from(raw: UsersResponse) -> Self {
        Self {
            users: raw.users.into_iter().map(User::from).collect(),
            total: raw.total,
            skip: raw.skip,
            limit: raw.limit,
        }
    }
}
