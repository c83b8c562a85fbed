//! Helpers for running raw SQL under the configured query timeout.

use std::{future::Future, time::Duration};

use sea_orm::{
    prelude::Decimal, ConnectionTrait, DatabaseConnection, DbErr, QueryResult, Statement, Value,
};

use crate::server::error::query::QueryError;

/// Awaits a database future, failing with `QueryError::Timeout` once `timeout` elapses.
///
/// The query is not retried; the dropped future cancels it client-side.
pub async fn with_timeout<T, F>(timeout: Duration, query: F) -> Result<T, QueryError>
where
    F: Future<Output = Result<T, DbErr>>,
{
    match tokio::time::timeout(timeout, query).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(QueryError::Timeout(timeout)),
    }
}

/// Builds a statement with positional `?` placeholders for the connection's backend.
pub fn statement(db: &DatabaseConnection, sql: impl Into<String>, values: Vec<Value>) -> Statement {
    Statement::from_sql_and_values(db.get_database_backend(), sql, values)
}

pub async fn query_all(
    db: &DatabaseConnection,
    timeout: Duration,
    sql: impl Into<String>,
    values: Vec<Value>,
) -> Result<Vec<QueryResult>, QueryError> {
    with_timeout(timeout, db.query_all_raw(statement(db, sql, values))).await
}

pub async fn query_one(
    db: &DatabaseConnection,
    timeout: Duration,
    sql: impl Into<String>,
    values: Vec<Value>,
) -> Result<Option<QueryResult>, QueryError> {
    with_timeout(timeout, db.query_one_raw(statement(db, sql, values))).await
}

/// Reads a positional cell as JSON, whatever its SQL type.
///
/// Integers and decimals come back as numbers, text as strings, NULL as `Value::Null`.
/// A column of any other type is logged and read as `Value::Null`.
pub fn cell(row: &QueryResult, index: usize) -> serde_json::Value {
    if let Ok(value) = row.try_get_by_index::<Option<i64>>(index) {
        return value.map(serde_json::Value::from).unwrap_or_default();
    }
    if let Ok(value) = row.try_get_by_index::<Option<u64>>(index) {
        return value.map(serde_json::Value::from).unwrap_or_default();
    }
    if let Ok(value) = row.try_get_by_index::<Option<f64>>(index) {
        return value.map(serde_json::Value::from).unwrap_or_default();
    }
    if let Ok(value) = row.try_get_by_index::<Option<Decimal>>(index) {
        return value.map(decimal).unwrap_or_default();
    }
    if let Ok(value) = row.try_get_by_index::<Option<String>>(index) {
        return value.map(serde_json::Value::from).unwrap_or_default();
    }
    if let Ok(value) = row.try_get_by_index::<Option<bool>>(index) {
        return value.map(serde_json::Value::from).unwrap_or_default();
    }
    if let Ok(value) = row.try_get_by_index::<Option<Vec<u8>>>(index) {
        return value
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned().into())
            .unwrap_or_default();
    }

    tracing::debug!("Column {} has no JSON representation, reading it as null", index);
    serde_json::Value::Null
}

/// Decimal as a JSON number, or as its text when it does not fit a float.
fn decimal(value: Decimal) -> serde_json::Value {
    let text = value.to_string();
    match serde_json::from_str::<serde_json::Number>(&text) {
        Ok(number) => serde_json::Value::Number(number),
        Err(_) => serde_json::Value::String(text),
    }
}
