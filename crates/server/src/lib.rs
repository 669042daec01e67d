pub mod routes;
pub mod startup;
pub mod errors;

pub use startup::{build_app, run, serve};
