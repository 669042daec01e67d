//! Record types for the CRM services: leads, deals, activities and the
//! pipeline vocabularies they share.

pub mod errors;
pub mod lenient;
pub mod vocab;
pub mod lead;
pub mod deal;
pub mod activity;

pub use activity::{Activity, ActivityPatch, NewActivity};
pub use deal::{Deal, DealPatch, NewDeal};
pub use lead::{Lead, LeadPatch};
pub use vocab::{LeadStatus, Stage};
