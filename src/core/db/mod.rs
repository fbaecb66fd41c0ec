/// Database Module
///
/// The access layer proper, organized into focused submodules:
/// - **Connection Management** (`connection.rs`): the connection profile,
///   the component handle, and the process-wide singleton accessor
/// - **Query Execution** (`query.rs`): the `run_query` choke point and the
///   per-handle execution state
/// - **Query Building** (`builder.rs`): the `get`/`insert`/`update`/`delete`
///   sugar over a restricted single-condition filter
/// - **Driver Seam** (`driver.rs`, `sqlite.rs`): the collaborator interface
///   all SQL execution is delegated to, plus the default SQLite driver
/// - **Values** (`value.rs`): the tagged scalar exchanged with drivers
pub mod builder;
pub mod connection;
pub mod driver;
pub mod query;
pub mod sqlite;
pub mod value;

#[cfg(test)]
pub(crate) mod test_support;

pub use builder::{CompareOp, Filter};
pub use connection::{ConnectionProfile, Database, DEFAULT_TZ_OFFSET};
pub use query::{QueryOutcome, Row};
pub use sqlite::SqliteDriver;
pub use value::Value;
