//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Dataset refresh: re-fetches the upstream country dataset at
//!   configured intervals and drops memoized responses derived from the
//!   replaced data

mod refresh;

pub use refresh::spawn_refresh_task;
