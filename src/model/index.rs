use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Data shared by every page of the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteDto {
    pub website_name: String,
    pub website_url: String,
    /// Base URL of the database site item and spell tooltips link to.
    pub aowow_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndexDto {
    pub title: String,
    #[serde(flatten)]
    pub site: SiteDto,
    /// Realm names in configuration order.
    pub realms: Vec<String>,
}
