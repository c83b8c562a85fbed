//! Column and join definitions supplied by the endpoint, never by the client.

use std::{fmt, sync::Arc};

use serde_json::Value;

/// Display transformation of a raw cell, given the whole raw row for context.
pub type Formatter = Arc<dyn Fn(&Value, &[Value]) -> Value + Send + Sync>;

#[derive(Clone)]
pub struct ColumnSpec {
    pub name: String,
    /// Source table; the grid's primary table when unset.
    pub table: Option<String>,
    /// Schema qualifier for columns living in another database.
    pub database: Option<String>,
    /// Collation applied when the column is searched.
    pub collation: Option<String>,
    pub formatter: Option<Formatter>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            database: None,
            collation: None,
            formatter: None,
        }
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn collation(mut self, collation: Option<String>) -> Self {
        self.collation = collation;
        self
    }

    pub fn formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Fully qualified column reference, e.g. `` `auth`.`account_access`.`id` ``.
    pub fn to_sql(&self, primary_table: &str) -> String {
        let database = self
            .database
            .as_ref()
            .map(|database| format!("`{database}`."))
            .unwrap_or_default();
        let table = self.table.as_deref().unwrap_or(primary_table);

        format!("{database}`{table}`.`{}`", self.name)
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("name", &self.name)
            .field("table", &self.table)
            .field("database", &self.database)
            .field("collation", &self.collation)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    FullOuter,
}

impl JoinKind {
    pub fn as_sql(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::FullOuter => "FULL OUTER",
        }
    }
}

/// `{kind} JOIN table2 ON table2.column2 = table1.column1 [AND (on)]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSpec {
    pub kind: JoinKind,
    pub table1: String,
    pub column1: String,
    pub table2: String,
    pub column2: String,
    pub database2: Option<String>,
    /// Extra predicate scoped to this join's ON clause.
    pub on: Option<String>,
}

impl JoinSpec {
    pub fn new(
        kind: JoinKind,
        table1: impl Into<String>,
        column1: impl Into<String>,
        table2: impl Into<String>,
        column2: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            table1: table1.into(),
            column1: column1.into(),
            table2: table2.into(),
            column2: column2.into(),
            database2: None,
            on: None,
        }
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database2 = Some(database.into());
        self
    }

    pub fn on(mut self, predicate: impl Into<String>) -> Self {
        self.on = Some(predicate.into());
        self
    }

    pub fn to_sql(&self) -> String {
        let database = self
            .database2
            .as_ref()
            .map(|database| format!("`{database}`."))
            .unwrap_or_default();
        let extra = self
            .on
            .as_ref()
            .map(|predicate| format!(" AND ({predicate})"))
            .unwrap_or_default();

        format!(
            "{kind} JOIN {database}`{table2}` ON {database}`{table2}`.`{column2}` = `{table1}`.`{column1}`{extra}",
            kind = self.kind.as_sql(),
            table2 = self.table2,
            column2 = self.column2,
            table1 = self.table1,
            column1 = self.column1,
        )
    }
}
