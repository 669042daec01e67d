//! Storage primitives for the record services
//!
//! `RecordTable` holds records in memory for the process lifetime; `seed`
//! loads the initial contents from JSON.

pub mod record_table;
pub mod seed;
