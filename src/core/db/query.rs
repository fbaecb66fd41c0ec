/// Query Execution Module
///
/// The single choke point every query runs through. Each call resets the
/// error flag, hands the prepared SQL and positional parameters to the
/// driver, measures wall-clock execution time, and captures the outcome on
/// the handle: rows and count on success, the error flag on failure. Failed
/// calls leave the previous successful call's rows and count in place.
use super::connection::Database;
use super::driver::Executed;
use super::value::Value;
use std::time::Instant;

/// One returned record: an ordered mapping of column name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pairs: Vec<(String, Value)>,
}

impl Row {
    pub(crate) fn from_parts(columns: &[String], values: Vec<Value>) -> Row {
        Row {
            pairs: columns.iter().cloned().zip(values).collect(),
        }
    }

    /// Looks up a value by column name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.pairs
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column name / value pairs in result order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.pairs.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Normalized result of a builder verb.
///
/// `detail` distinguishes the two failure shapes: a verb rejected before any
/// SQL was generated carries the rejection reason, a failed execution
/// carries the driver's joined error details.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    success: bool,
    rows_affected: usize,
    detail: Option<String>,
}

impl QueryOutcome {
    pub(crate) fn succeeded(rows_affected: usize) -> Self {
        QueryOutcome {
            success: true,
            rows_affected,
            detail: None,
        }
    }

    pub(crate) fn failed(detail: impl Into<String>) -> Self {
        QueryOutcome {
            success: false,
            rows_affected: 0,
            detail: Some(detail.into()),
        }
    }

    pub fn ok(&self) -> bool {
        self.success
    }

    pub fn rows_affected(&self) -> usize {
        self.rows_affected
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

/// Execution state of the most recent query, mutated only by `run_query`.
#[derive(Default)]
pub(crate) struct ExecState {
    pub(crate) error: bool,
    pub(crate) results: Vec<Row>,
    pub(crate) count: usize,
    pub(crate) failure_detail: Option<String>,
}

impl Database {
    /// Executes `sql` with `params` bound positionally (1-indexed, in the
    /// order given) and captures the outcome on the handle.
    ///
    /// Always returns `self` so the call chains into the state accessors:
    ///
    /// ```ignore
    /// if !db.run_query("SELECT * FROM users WHERE id = ?", &[1.into()]).error() {
    ///     let rows = db.results();
    /// }
    /// ```
    ///
    /// On success the full result set and the affected/returned row count
    /// replace the previous state and a stats message (SQL text plus elapsed
    /// time) goes to the log sink. On failure the error flag is set, the
    /// driver's joined error details plus SQL text and elapsed time are
    /// logged, and rows/count keep the values from the last successful call.
    /// A handle without a live connection reports a failure without touching
    /// any driver.
    pub fn run_query(&mut self, sql: &str, params: &[Value]) -> &mut Self {
        self.state.error = false;
        self.state.failure_detail = None;

        let Some(conn) = self.conn.as_mut() else {
            self.state.error = true;
            self.state.failure_detail = Some("no live connection".to_string());
            self.logger
                .log_db_error(&format!("no live connection\nSQL Query: {sql}"));
            return self;
        };

        let start = Instant::now();
        match conn.execute(sql, params) {
            Ok(executed) => {
                let elapsed = start.elapsed();
                let Executed {
                    columns,
                    rows,
                    row_count,
                } = executed;
                self.state.results = rows
                    .into_iter()
                    .map(|values| Row::from_parts(&columns, values))
                    .collect();
                self.state.count = row_count;
                self.logger
                    .log_query_stats(&format!("SQL Query: {sql}\nExecution Time: {elapsed:?}"));
            }
            Err(failure) => {
                let elapsed = start.elapsed();
                self.state.error = true;
                let detail = failure.joined();
                self.logger.log_db_error(&format!(
                    "{detail}\nSQL Query: {sql}\nExecution Time: {elapsed:?}"
                ));
                self.state.failure_detail = Some(detail);
            }
        }
        self
    }

    /// Whether the most recent query failed.
    pub fn error(&self) -> bool {
        self.state.error
    }

    /// The result set captured by the last successful query.
    pub fn results(&self) -> &[Row] {
        &self.state.results
    }

    /// The affected/returned row count of the last successful query.
    pub fn count(&self) -> usize {
        self.state.count
    }

    /// The first row of the last captured result set, or an empty row.
    pub fn first(&self) -> Row {
        self.state.results.first().cloned().unwrap_or_default()
    }
}
