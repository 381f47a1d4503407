//! Dataset Module
//!
//! Owns the interaction with the upstream country service: fetching the
//! reference dataset, normalizing it into the flat model, and the filter
//! predicates the handlers apply to it.

mod fetch;
mod filter;

pub use fetch::fetch_countries;
pub use filter::{by_code, by_region, search};
