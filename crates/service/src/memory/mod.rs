//! In-memory store implementations backed by `RecordTable`.

pub mod leads;
pub mod deals;
pub mod activities;

pub use activities::InMemoryActivityStore;
pub use deals::InMemoryDealStore;
pub use leads::InMemoryLeadStore;
