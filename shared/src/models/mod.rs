//! Data models
//!
//! Mirrors of the backend's JSON bodies. Field names follow the backend's
//! camelCase keys; nested associations (`Role`, `Chamber`, `Customer`) keep
//! their capitalized keys.

pub mod chamber;
pub mod checklist;
pub mod customer;
pub mod dashboard;
pub mod issue;
pub mod profile;
pub mod role;
pub mod user;

// Re-exports
pub use chamber::*;
pub use checklist::*;
pub use customer::*;
pub use dashboard::*;
pub use issue::*;
pub use profile::*;
pub use role::*;
pub use user::*;
