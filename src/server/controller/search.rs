use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, search::SearchDto},
    server::{
        controller::GridQuery, error::AppError, service::search::SearchService,
        state::AppState,
    },
};

/// Tag for grouping search endpoints in OpenAPI documentation
pub static SEARCH_TAG: &str = "search";

/// Search the characters of a realm.
///
/// Besides the data grid parameters the query string may name the `realm`; the first
/// configured realm is searched otherwise. Rows hold name, level, class, race and guild
/// name, followed by the raw gender.
///
/// # Returns
/// - `200 OK` - Grid page echoing the realm
/// - `400 Bad Request` - Unknown realm or malformed grid parameters
/// - `500 Internal Server Error` - Query failed or timed out
#[utoipa::path(
    get,
    path = "/search",
    tag = SEARCH_TAG,
    params(
        ("realm" = Option<String>, Query, description = "Realm name (default: first realm)")
    ),
    responses(
        (status = 200, description = "Character search grid page", body = SearchDto),
        (status = 400, description = "Invalid realm or grid parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_characters(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let query = GridQuery::parse(query.as_deref());
    let request = query.request()?;

    let result = SearchService::new(&state)
        .search_characters(query.param("realm"), &request)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
