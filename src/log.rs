//! Logging collaborator for the access layer.
//!
//! The core reports query failures and successful-query timing through this
//! trait and has no opinion on how the messages are persisted or formatted
//! downstream.
use tracing::{debug, error};

pub trait QueryLog: Send {
    /// Reports a connection or query failure.
    fn log_db_error(&self, message: &str);

    /// Reports timing telemetry for a successful query.
    fn log_query_stats(&self, message: &str);
}

/// Default sink emitting through `tracing`.
#[derive(Debug, Default)]
pub struct TracingLog;

impl QueryLog for TracingLog {
    fn log_db_error(&self, message: &str) {
        error!(target: "dalite::db", "{message}");
    }

    fn log_query_stats(&self, message: &str) {
        debug!(target: "dalite::db", "{message}");
    }
}
