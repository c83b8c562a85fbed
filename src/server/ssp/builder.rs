//! Server-side processing of data grid requests.
//!
//! A grid request is answered with three read queries sharing one FROM/JOIN section:
//! the total count under the static predicates only, the filtered count under the search
//! clause and the static predicates, and the page of rows with ordering and limit.

use std::time::Duration;

use sea_orm::{DatabaseConnection, Value};

use crate::{
    model::grid::PagedResult,
    server::{
        error::ssp::SspError,
        ssp::{
            column::{ColumnSpec, JoinSpec},
            request::SspRequest,
        },
        util::query::{cell, query_all, query_one},
    },
};

/// SQL text with its positional bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlQuery {
    pub sql: String,
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SspQueries {
    pub total_count: SqlQuery,
    pub filtered_count: SqlQuery,
    pub page: SqlQuery,
}

#[derive(Debug, Clone)]
pub struct ServerSideProcessor {
    table: String,
    primary_key: String,
    columns: Vec<ColumnSpec>,
    joins: Vec<JoinSpec>,
    extra_columns: Vec<String>,
    wheres: Vec<String>,
    where_values: Vec<Value>,
}

impl ServerSideProcessor {
    /// Creates a grid over `table`, ordered by `primary_key` when sort keys tie.
    pub fn new(
        table: impl Into<String>,
        primary_key: impl Into<String>,
        columns: Vec<ColumnSpec>,
    ) -> Self {
        Self {
            table: table.into(),
            primary_key: primary_key.into(),
            columns,
            joins: Vec::new(),
            extra_columns: Vec::new(),
            wheres: Vec::new(),
            where_values: Vec::new(),
        }
    }

    /// Appends a join; joins are emitted in the order they are added.
    pub fn join(mut self, join: JoinSpec) -> Self {
        self.joins.push(join);
        self
    }

    /// Selects an extra SQL expression after the grid columns.
    ///
    /// Extra columns are returned with every row and visible to formatters but are not
    /// searchable or orderable.
    pub fn extra_data_column(mut self, sql: impl Into<String>) -> Self {
        self.extra_columns.push(sql.into());
        self
    }

    /// Adds a static predicate applied to every query, including the total count.
    pub fn and_where(mut self, sql: impl Into<String>) -> Self {
        self.wheres.push(sql.into());
        self
    }

    /// Adds a static predicate with one positional binding.
    pub fn and_where_bound(mut self, sql: impl Into<String>, value: impl Into<Value>) -> Self {
        self.wheres.push(sql.into());
        self.where_values.push(value.into());
        self
    }

    fn column(&self, index: usize) -> Result<&ColumnSpec, SspError> {
        self.columns.get(index).ok_or(SspError::ColumnOutOfRange {
            index,
            available: self.columns.len(),
        })
    }

    fn primary_key_sql(&self) -> String {
        format!("`{}`.`{}`", self.table, self.primary_key)
    }

    fn limit_sql(&self, request: &SspRequest) -> Option<String> {
        request
            .length
            .map(|length| format!("LIMIT {length} OFFSET {}", request.start))
    }

    fn order_sql(&self, request: &SspRequest) -> Result<String, SspError> {
        let mut order_by = Vec::new();
        for sort in &request.order {
            let requested = request
                .columns
                .get(sort.column)
                .ok_or(SspError::UnknownOrderColumn(sort.column))?;
            if !requested.orderable {
                continue;
            }

            let column = self.column(requested.data)?;
            order_by.push(format!(
                "{} {}",
                column.to_sql(&self.table),
                sort.dir.as_sql()
            ));
        }
        order_by.push(format!("{} ASC", self.primary_key_sql()));

        Ok(format!("ORDER BY {}", order_by.join(", ")))
    }

    fn join_sql(&self) -> String {
        self.joins
            .iter()
            .map(JoinSpec::to_sql)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Search clause and its bindings, one `%term%` per searchable column.
    fn filter_sql(&self, request: &SspRequest) -> Result<(String, Vec<Value>), SspError> {
        if request.search.is_empty() {
            return Ok(("1".to_string(), Vec::new()));
        }

        let mut filters = Vec::new();
        let mut values = Vec::new();
        for requested in request.columns.iter().filter(|column| column.searchable) {
            let column = self.column(requested.data)?;
            let collate = column
                .collation
                .as_ref()
                .map(|collation| format!(" COLLATE {collation}"))
                .unwrap_or_default();

            filters.push(format!("({}{collate} LIKE ?)", column.to_sql(&self.table)));
            values.push(Value::from(format!("%{}%", request.search)));
        }

        if filters.is_empty() {
            return Ok(("1".to_string(), Vec::new()));
        }

        Ok((format!("({})", filters.join(" OR ")), values))
    }

    fn static_sql(&self) -> String {
        if self.wheres.is_empty() {
            return "1".to_string();
        }

        self.wheres
            .iter()
            .map(|condition| format!("({condition})"))
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    /// Builds the three grid queries without touching the database.
    ///
    /// # Returns
    /// - `Ok(SspQueries)` - Total count, filtered count and page queries
    /// - `Err(SspError)` - The request references columns the grid does not define
    pub fn build(&self, request: &SspRequest) -> Result<SspQueries, SspError> {
        let from = [format!("FROM `{}`", self.table), self.join_sql()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let static_where = self.static_sql();
        let (filter_where, filter_values) = self.filter_sql(request)?;
        let count = format!("SELECT COUNT({}) AS `count`", self.primary_key_sql());

        let mut bindings = filter_values;
        bindings.extend(self.where_values.iter().cloned());

        let total_count = SqlQuery {
            sql: format!("{count} {from} WHERE {static_where}"),
            values: self.where_values.clone(),
        };

        let filtered_count = SqlQuery {
            sql: format!("{count} {from} WHERE {filter_where} AND {static_where}"),
            values: bindings.clone(),
        };

        let selected = self
            .columns
            .iter()
            .map(|column| column.to_sql(&self.table))
            .chain(self.extra_columns.iter().cloned())
            .collect::<Vec<_>>()
            .join(", ");
        let mut page_sql = format!(
            "SELECT {selected} {from} WHERE {filter_where} AND {static_where} {}",
            self.order_sql(request)?
        );
        if let Some(limit) = self.limit_sql(request) {
            page_sql.push(' ');
            page_sql.push_str(&limit);
        }

        Ok(SspQueries {
            total_count,
            filtered_count,
            page: SqlQuery {
                sql: page_sql,
                values: bindings,
            },
        })
    }

    /// Runs the grid request against `db`, each query under `timeout`.
    ///
    /// # Arguments
    /// - `db` - Connection to the database holding the grid's tables
    /// - `request` - Parsed grid request
    /// - `timeout` - Per-query timeout
    ///
    /// # Returns
    /// - `Ok(PagedResult)` - Counts, echoed draw token and formatted rows
    /// - `Err(SspError::Query)` - A query failed or timed out
    /// - `Err(SspError)` - The request references columns the grid does not define
    pub async fn run(
        &self,
        db: &DatabaseConnection,
        request: &SspRequest,
        timeout: Duration,
    ) -> Result<PagedResult, SspError> {
        let queries = self.build(request)?;

        let records_total = count(db, timeout, queries.total_count).await?;
        let records_filtered = count(db, timeout, queries.filtered_count).await?;

        let width = self.columns.len() + self.extra_columns.len();
        let rows = query_all(db, timeout, queries.page.sql, queries.page.values).await?;
        let data = rows
            .iter()
            .map(|row| {
                let raw: Vec<serde_json::Value> = (0..width).map(|index| cell(row, index)).collect();
                self.format_row(raw)
            })
            .collect();

        Ok(PagedResult {
            records_total,
            records_filtered,
            draw: request.draw,
            data,
        })
    }

    /// Applies column formatters against the untouched raw row.
    fn format_row(&self, raw: Vec<serde_json::Value>) -> Vec<serde_json::Value> {
        let mut formatted = raw.clone();
        for (index, column) in self.columns.iter().enumerate() {
            if let Some(formatter) = &column.formatter {
                formatted[index] = formatter(&raw[index], &raw);
            }
        }
        formatted
    }
}

async fn count(
    db: &DatabaseConnection,
    timeout: Duration,
    query: SqlQuery,
) -> Result<i64, SspError> {
    let row = query_one(db, timeout, query.sql, query.values).await?;
    match row {
        Some(row) => Ok(row.try_get::<i64>("", "count")?),
        None => Ok(0),
    }
}
