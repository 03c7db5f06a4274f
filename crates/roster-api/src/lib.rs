// roster-api: Async Rust client for the paginated user-listing endpoint

pub mod client;
pub mod error;
pub mod models;
pub mod query;
pub mod transport;

pub use client::UsersClient;
pub use error::Error;
pub use models::{AddressRecord, UserRecord, UsersResponse};
pub use query::{SELECT_FIELDS, SortOrder, UserQuery};
pub use transport::{TlsMode, TransportConfig};
