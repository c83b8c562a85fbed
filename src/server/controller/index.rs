use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::index::IndexDto,
    server::{service::index::IndexService, state::AppState},
};

/// Tag for grouping landing page endpoints in OpenAPI documentation
pub static INDEX_TAG: &str = "index";

/// Get the landing page.
///
/// # Returns
/// - `200 OK` - Site settings and realm names
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "Landing page", body = IndexDto)
    ),
)]
pub async fn get_index(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(IndexService::new(&state).get_index()))
}
