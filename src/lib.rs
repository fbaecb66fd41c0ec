// Core infrastructure modules
pub mod core;

// Collaborator-facing modules
pub mod config;
pub mod log;

// Re-export the library surface consumed by host applications
pub use crate::core::db::{
    CompareOp, ConnectionProfile, Database, Filter, QueryOutcome, Row, SqliteDriver, Value,
    DEFAULT_TZ_OFFSET,
};
pub use crate::core::{DaliteError, Result};
pub use log::{QueryLog, TracingLog};
