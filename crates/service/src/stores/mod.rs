//! Store traits: the async facade each record service exposes.
//!
//! Implementations live in `memory`; `latency::Delayed` wraps any of them.

pub mod lead_store;
pub mod deal_store;
pub mod activity_store;

pub use activity_store::ActivityStore;
pub use deal_store::DealStore;
pub use lead_store::LeadStore;
