// ── Domain model ──

pub mod column;
pub mod filter;
pub mod sort;
pub mod user;

pub use column::ColumnKey;
pub use filter::{FilterPatch, FilterSpec};
pub use sort::SortSpec;
pub use user::{Address, Page, User};
