/// Driver Collaborator Interface
///
/// The access layer delegates all actual SQL execution to an external
/// relational-database client behind these traits. A driver knows how to
/// connect from a `ConnectionProfile`, run the engine's session-configuration
/// step, and execute a prepared parameterized statement, returning column
/// names, decoded rows, and the affected/returned row count. Failures are
/// reported as an ordered sequence of detail strings so the executor can
/// join them into a single log message.
use super::connection::ConnectionProfile;
use super::value::Value;
use std::fmt;

/// Ordered error details reported by a driver.
#[derive(Debug, Clone)]
pub struct DriverFailure {
    details: Vec<String>,
}

impl DriverFailure {
    pub fn new(details: Vec<String>) -> Self {
        DriverFailure { details }
    }

    /// Convenience constructor for a single-detail failure.
    pub fn message(detail: impl Into<String>) -> Self {
        DriverFailure {
            details: vec![detail.into()],
        }
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Joins every detail field into one space-separated message.
    pub fn joined(&self) -> String {
        self.details.join(" ")
    }
}

impl fmt::Display for DriverFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined())
    }
}

pub type DriverResult<T> = std::result::Result<T, DriverFailure>;

/// The outcome of one executed statement.
///
/// For row-returning statements `rows` holds the decoded result set and
/// `row_count` equals `rows.len()`; for data-modifying statements `rows` is
/// empty and `row_count` is the number of affected rows.
#[derive(Debug, Default)]
pub struct Executed {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    pub row_count: usize,
}

/// A live connection to the database engine.
pub trait DriverConnection: Send {
    /// Runs the engine's session-configuration step immediately after
    /// connecting. `tz_offset` is the fixed session time-zone offset from
    /// the connection profile; engines without a session time zone apply
    /// their own standard session settings instead.
    fn configure_session(&mut self, tz_offset: &str) -> DriverResult<()>;

    /// Prepares `sql`, binds `params` positionally (1-indexed, in the order
    /// given), executes, and returns the captured outcome. Preparation and
    /// execution failures both surface as `DriverFailure`.
    fn execute(&mut self, sql: &str, params: &[Value]) -> DriverResult<Executed>;
}

/// Factory for driver connections.
pub trait Driver {
    fn connect(&self, profile: &ConnectionProfile) -> DriverResult<Box<dyn DriverConnection>>;
}
