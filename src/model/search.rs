use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::grid::PagedResult;

/// Character search grid page.
///
/// Row columns: name, level, class name, gendered race name, guild name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchDto {
    #[serde(flatten)]
    pub grid: PagedResult,
    pub realm: String,
}
