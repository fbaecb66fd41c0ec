/// Scripted driver and capturing log sink shared by the unit tests.
use super::connection::ConnectionProfile;
use super::driver::{Driver, DriverConnection, DriverFailure, DriverResult, Executed};
use super::value::Value;
use crate::log::QueryLog;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Call record shared between a scripted driver and the test body.
#[derive(Default)]
pub(crate) struct DriverTrace {
    pub calls: Mutex<Vec<(String, Vec<Value>)>>,
    pub session_offsets: Mutex<Vec<String>>,
    pub responses: Mutex<VecDeque<DriverResult<Executed>>>,
}

impl DriverTrace {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues the response for the next executed statement. Statements with
    /// no queued response succeed with an empty outcome.
    pub fn push_response(&self, response: DriverResult<Executed>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

pub(crate) struct ScriptedDriver {
    trace: Arc<DriverTrace>,
    fail_connect: bool,
}

impl ScriptedDriver {
    pub fn new(trace: Arc<DriverTrace>) -> Self {
        ScriptedDriver {
            trace,
            fail_connect: false,
        }
    }

    pub fn failing(trace: Arc<DriverTrace>) -> Self {
        ScriptedDriver {
            trace,
            fail_connect: true,
        }
    }
}

impl Driver for ScriptedDriver {
    fn connect(&self, _profile: &ConnectionProfile) -> DriverResult<Box<dyn DriverConnection>> {
        if self.fail_connect {
            return Err(DriverFailure::message("scripted connect failure"));
        }
        Ok(Box::new(ScriptedConnection {
            trace: self.trace.clone(),
        }))
    }
}

struct ScriptedConnection {
    trace: Arc<DriverTrace>,
}

impl DriverConnection for ScriptedConnection {
    fn configure_session(&mut self, tz_offset: &str) -> DriverResult<()> {
        self.trace
            .session_offsets
            .lock()
            .unwrap()
            .push(tz_offset.to_string());
        Ok(())
    }

    fn execute(&mut self, sql: &str, params: &[Value]) -> DriverResult<Executed> {
        self.trace
            .calls
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));
        self.trace
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Executed::default()))
    }
}

/// Log sink recording every message for assertions.
#[derive(Default)]
pub(crate) struct CapturingLog {
    pub errors: Arc<Mutex<Vec<String>>>,
    pub stats: Arc<Mutex<Vec<String>>>,
}

impl QueryLog for CapturingLog {
    fn log_db_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn log_query_stats(&self, message: &str) {
        self.stats.lock().unwrap().push(message.to_string());
    }
}

/// Builds a successful row-returning response.
pub(crate) fn rows_response(columns: &[&str], rows: Vec<Vec<Value>>) -> DriverResult<Executed> {
    let row_count = rows.len();
    Ok(Executed {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows,
        row_count,
    })
}
