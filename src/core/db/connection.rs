/// Connection Management Module
///
/// Owns the single live database connection and the component handle built
/// around it. The connection is created once, configured with the session
/// time-zone offset, and reused for the process lifetime; it is never
/// explicitly closed.
use super::driver::{Driver, DriverConnection};
use super::query::ExecState;
use super::sqlite::SqliteDriver;
use crate::log::{QueryLog, TracingLog};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::sync::Mutex;

/// Session time-zone offset applied right after connecting, unless the
/// profile overrides it.
pub const DEFAULT_TZ_OFFSET: &str = "+05:30";

fn default_tz_offset() -> String {
    DEFAULT_TZ_OFFSET.to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

/// Everything a driver needs to open a connection.
///
/// For file-backed engines such as the default SQLite driver, `database` is
/// the database path (or `:memory:`) and the network credentials are unused.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConnectionProfile {
    #[serde(default = "default_host")]
    pub host: String,
    pub user: String,
    #[serde(default)]
    pub password: String,
    pub database: String,
    #[serde(default = "default_tz_offset")]
    pub tz_offset: String,
}

impl ConnectionProfile {
    pub fn new(host: &str, user: &str, password: &str, database: &str) -> Self {
        ConnectionProfile {
            host: host.to_string(),
            user: user.to_string(),
            password: password.to_string(),
            database: database.to_string(),
            tz_offset: DEFAULT_TZ_OFFSET.to_string(),
        }
    }
}

/// Process-wide component instance, lazily created by `Database::instance`.
pub(crate) static DB_STATE: OnceCell<Mutex<Database>> = OnceCell::new();

/// The database access component.
///
/// One handle owns one live connection plus the execution state of the most
/// recent query (error flag, rows, count). The handle is intentionally not
/// `Clone`: the live connection cannot be duplicated.
///
/// The execution state is overwritten by every query, so a handle shared by
/// several logical callers is not safe for concurrent use without external
/// serialization. The singleton accessor hands out `&Mutex<Database>` for
/// exactly that reason: hold the guard across the full query → read-results
/// sequence. Callers that interleave locking observe last-writer-wins on
/// `results()`, `count()`, and `error()`.
pub struct Database {
    pub(crate) conn: Option<Box<dyn DriverConnection>>,
    pub(crate) profile: ConnectionProfile,
    pub(crate) logger: Box<dyn QueryLog>,
    pub(crate) state: ExecState,
}

impl Database {
    /// Opens a connection through `driver` and runs the session-configuration
    /// step with the profile's time-zone offset.
    ///
    /// Connection establishment never panics and never returns an error: a
    /// failure is reported through `logger` and the returned handle simply
    /// carries no connection, so every later query on it degrades to a
    /// reported query failure.
    pub fn connect(
        driver: &dyn Driver,
        profile: ConnectionProfile,
        logger: Box<dyn QueryLog>,
    ) -> Database {
        let attempt = driver.connect(&profile).and_then(|mut conn| {
            conn.configure_session(&profile.tz_offset)?;
            Ok(conn)
        });

        let conn = match attempt {
            Ok(conn) => Some(conn),
            Err(failure) => {
                logger.log_db_error(&format!(
                    "Failed to connect to {}: {}",
                    profile.database,
                    failure.joined()
                ));
                None
            }
        };

        Database {
            conn,
            profile,
            logger,
            state: ExecState::default(),
        }
    }

    /// Returns the process-wide instance over the default SQLite driver and
    /// tracing log sink, connecting on first access.
    ///
    /// First-call arguments win: later calls return the same instance and
    /// ignore their `profile` entirely — no reconnect is attempted.
    pub fn instance(profile: ConnectionProfile) -> &'static Mutex<Database> {
        DB_STATE.get_or_init(|| {
            Mutex::new(Database::connect(
                &SqliteDriver,
                profile,
                Box::new(TracingLog),
            ))
        })
    }

    /// Whether the handle carries a usable connection.
    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// The profile this handle was built with.
    pub fn profile(&self) -> &ConnectionProfile {
        &self.profile
    }
}
