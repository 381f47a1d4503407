//! Country Facade - an HTTP facade over a remote country dataset
//!
//! Fetches the reference dataset from an upstream service, serves filtered
//! views of it, and memoizes response payloads in a bounded LRU cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_refresh_task;
