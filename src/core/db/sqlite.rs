/// SQLite Driver
///
/// Default `Driver` implementation backed by rusqlite. The connection
/// profile's `database` field is the database path (or `:memory:`); the
/// host/user/password fields are carried for engines that need them and are
/// not used by this file-backed engine.
use super::connection::ConnectionProfile;
use super::driver::{Driver, DriverConnection, DriverFailure, DriverResult, Executed};
use super::value::Value;
use rusqlite::types::{ToSqlOutput, ValueRef};
use rusqlite::{Connection, ToSql};

pub struct SqliteDriver;

impl Driver for SqliteDriver {
    fn connect(&self, profile: &ConnectionProfile) -> DriverResult<Box<dyn DriverConnection>> {
        let conn = Connection::open(&profile.database).map_err(map_failure)?;
        Ok(Box::new(SqliteConnection { conn }))
    }
}

pub struct SqliteConnection {
    conn: Connection,
}

impl DriverConnection for SqliteConnection {
    /// SQLite has no session time-zone variable, so the offset is accepted
    /// and the engine's standard session pragma is applied instead.
    fn configure_session(&mut self, _tz_offset: &str) -> DriverResult<()> {
        self.conn
            .pragma_update(None, "foreign_keys", &true)
            .map_err(map_failure)
    }

    fn execute(&mut self, sql: &str, params: &[Value]) -> DriverResult<Executed> {
        let mut stmt = self.conn.prepare(sql).map_err(map_failure)?;

        for (i, param) in params.iter().enumerate() {
            stmt.raw_bind_parameter(i + 1, param).map_err(map_failure)?;
        }

        if stmt.column_count() == 0 {
            // Data-modifying statement: report the affected-row count.
            let affected = stmt.raw_execute().map_err(map_failure)?;
            return Ok(Executed {
                columns: Vec::new(),
                rows: Vec::new(),
                row_count: affected,
            });
        }

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let column_count = stmt.column_count();

        let mut rows = Vec::new();
        let mut raw = stmt.raw_query();
        while let Some(row) = raw.next().map_err(map_failure)? {
            let mut values = Vec::with_capacity(column_count);
            for i in 0..column_count {
                values.push(decode_value(row.get_ref(i).map_err(map_failure)?));
            }
            rows.push(values);
        }

        let row_count = rows.len();
        Ok(Executed {
            columns,
            rows,
            row_count,
        })
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(rusqlite::types::Value::Null),
            Value::Integer(i) => ToSqlOutput::Owned(rusqlite::types::Value::Integer(*i)),
            Value::Real(f) => ToSqlOutput::Owned(rusqlite::types::Value::Real(*f)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Boolean(b) => ToSqlOutput::Owned(rusqlite::types::Value::Integer(*b as i64)),
        })
    }
}

/// Decodes a SQLite value into the driver-neutral scalar. BLOB columns
/// decode as lossy UTF-8 text.
fn decode_value(value: ValueRef) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(f) => Value::Real(f),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).to_string()),
        ValueRef::Blob(b) => Value::Text(String::from_utf8_lossy(b).to_string()),
    }
}

/// Maps a rusqlite error into the ordered detail sequence the executor
/// joins into log messages: code, extended code, then the engine message.
fn map_failure(err: rusqlite::Error) -> DriverFailure {
    match err {
        rusqlite::Error::SqliteFailure(code, message) => {
            let detail = message.unwrap_or_else(|| code.to_string());
            DriverFailure::new(vec![
                format!("{:?}", code.code),
                code.extended_code.to_string(),
                detail,
            ])
        }
        other => DriverFailure::message(other.to_string()),
    }
}
