use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Paged response envelope consumed by the grid widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult {
    /// Row count under the static predicates, ignoring the search term.
    pub records_total: i64,
    /// Row count under the static predicates and the search term.
    pub records_filtered: i64,
    /// Echo of the request's draw token.
    pub draw: i64,
    /// Rows as positional arrays in column order, extra data columns last.
    #[schema(value_type = Vec<Vec<Object>>)]
    pub data: Vec<Vec<serde_json::Value>>,
}
