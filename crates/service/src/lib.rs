//! CRM record services.
//! - In-memory lead, deal and activity stores behind async traits.
//! - A latency decorator that simulates a remote backend.
//! - Pure report functions over store snapshots.

pub mod errors;
pub mod latency;
pub mod storage;
pub mod stores;
pub mod memory;
pub mod reports;
pub mod runtime;

pub use runtime::Services;
