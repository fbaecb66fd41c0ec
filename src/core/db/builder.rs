/// Query Builder Module
///
/// Sugar layer translating the four high-level verbs plus a restricted
/// single-condition filter into SQL text and positional parameters. All
/// verbs funnel through one internal `action`-style path into `run_query`;
/// nothing else touches the connection.
use super::connection::Database;
use super::query::QueryOutcome;
use super::value::Value;

/// A single-condition filter: field, operator token, comparison value.
pub type Filter<'a> = (&'a str, &'a str, Value);

/// Comparison operators a filter may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Gt,
    Lt,
    Le,
    Ge,
}

impl CompareOp {
    /// Parses an operator token; anything outside the allowed set is `None`.
    pub fn parse(token: &str) -> Option<CompareOp> {
        match token {
            "=" => Some(CompareOp::Eq),
            ">" => Some(CompareOp::Gt),
            "<" => Some(CompareOp::Lt),
            "<=" => Some(CompareOp::Le),
            ">=" => Some(CompareOp::Ge),
            _ => None,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Ge => ">=",
        }
    }
}

impl Database {
    /// Selects every column of the rows matching `filter`.
    pub fn get(&mut self, table: &str, filter: Filter) -> QueryOutcome {
        self.action("SELECT *", table, filter)
    }

    /// Deletes the rows matching `filter`.
    pub fn delete(&mut self, table: &str, filter: Filter) -> QueryOutcome {
        self.action("DELETE", table, filter)
    }

    /// Builds `{verb} FROM {table} WHERE field op ?` and executes it with
    /// the filter value as the single bound parameter. A filter whose
    /// operator is outside the allowed set is rejected without generating
    /// SQL or touching the executor; the rejection is silent (not logged).
    fn action(&mut self, verb: &str, table: &str, filter: Filter) -> QueryOutcome {
        let (field, token, value) = filter;
        let Some(op) = CompareOp::parse(token) else {
            return QueryOutcome::failed(format!("operator {token:?} is not allowed"));
        };

        let sql = format!("{verb} FROM {table} WHERE {field} {} ?", op.as_sql());
        self.run_query(&sql, &[value]);
        self.verb_outcome()
    }

    /// Inserts one record, one placeholder per field in the given order.
    pub fn insert(&mut self, table: &str, fields: &[(&str, Value)]) -> QueryOutcome {
        if fields.is_empty() {
            return QueryOutcome::failed("no fields to insert");
        }

        let columns = fields
            .iter()
            .map(|(name, _)| format!("`{name}`"))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = vec!["?"; fields.len()].join(", ");
        let sql = format!("INSERT INTO {table} ({columns}) VALUES ({placeholders})");

        let params: Vec<Value> = fields.iter().map(|(_, value)| value.clone()).collect();
        self.run_query(&sql, &params);
        self.verb_outcome()
    }

    /// Updates the fields of the rows matching `filter`. The filter value
    /// binds as the final placeholder, exactly as in `get`/`delete`.
    pub fn update(&mut self, table: &str, filter: Filter, fields: &[(&str, Value)]) -> QueryOutcome {
        let (field, token, value) = filter;
        let Some(op) = CompareOp::parse(token) else {
            return QueryOutcome::failed(format!("operator {token:?} is not allowed"));
        };
        if fields.is_empty() {
            return QueryOutcome::failed("no fields to update");
        }

        let set = fields
            .iter()
            .map(|(name, _)| format!("{name} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {table} SET {set} WHERE {field} {} ?", op.as_sql());

        let mut params: Vec<Value> = fields.iter().map(|(_, value)| value.clone()).collect();
        params.push(value);
        self.run_query(&sql, &params);
        self.verb_outcome()
    }

    fn verb_outcome(&self) -> QueryOutcome {
        if self.error() {
            QueryOutcome::failed(
                self.state
                    .failure_detail
                    .clone()
                    .unwrap_or_else(|| "query failed".to_string()),
            )
        } else {
            QueryOutcome::succeeded(self.count())
        }
    }
}
