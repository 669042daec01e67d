//! Shared plumbing for the CRM workspace: logging setup and small wire types.

pub mod types;
pub mod utils;
