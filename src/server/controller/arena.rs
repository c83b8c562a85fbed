use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        arena::{ArenaIndexDto, ArenaTeamDto, LadderDto},
    },
    server::{
        controller::{find_realm, GridQuery},
        error::AppError,
        service::arena::ArenaService,
        state::AppState,
    },
};

/// Tag for grouping arena endpoints in OpenAPI documentation
pub static ARENA_TAG: &str = "arena";

/// Get the arena ladder landing page.
///
/// # Returns
/// - `200 OK` - Realm names to pick a ladder from
#[utoipa::path(
    get,
    path = "/arena",
    tag = ARENA_TAG,
    responses(
        (status = 200, description = "Ladder landing page", body = ArenaIndexDto)
    ),
)]
pub async fn get_index(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(ArenaService::new(&state).get_index()))
}

/// Get one page of an arena ladder.
///
/// Besides the data grid parameters the query string selects the ladder: `realm`
/// (first configured realm when absent) and `teamsize` (2, 3 or 5). Rows hold team name,
/// rating, season wins and season games.
///
/// # Arguments
/// - `state` - Application state with realm connections
/// - `query` - Raw query string with ladder and grid parameters
///
/// # Returns
/// - `200 OK` - Grid page echoing the realm and team size
/// - `400 Bad Request` - Unknown realm, invalid team size or malformed grid parameters
/// - `500 Internal Server Error` - Query failed or timed out
#[utoipa::path(
    get,
    path = "/arena/ladder",
    tag = ARENA_TAG,
    params(
        ("realm" = Option<String>, Query, description = "Realm name (default: first realm)"),
        ("teamsize" = u8, Query, description = "Team size: 2, 3 or 5")
    ),
    responses(
        (status = 200, description = "Ladder grid page", body = LadderDto),
        (status = 400, description = "Invalid realm, team size or grid parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ladder(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let query = GridQuery::parse(query.as_deref());
    let request = query.request()?;

    let ladder = ArenaService::new(&state)
        .get_ladder(query.param("realm"), query.param("teamsize"), &request)
        .await?;

    Ok((StatusCode::OK, Json(ladder)))
}

/// Get an arena team page.
///
/// # Arguments
/// - `state` - Application state with realm connections
/// - `realm` - Realm name, matched case-insensitively
/// - `team` - Exact team name
///
/// # Returns
/// - `200 OK` - Team stats, emblem and members
/// - `404 Not Found` - Unknown realm or team
/// - `500 Internal Server Error` - Query failed or timed out
#[utoipa::path(
    get,
    path = "/arena-team/{realm}/{team}",
    tag = ARENA_TAG,
    params(
        ("realm" = String, Path, description = "Realm name"),
        ("team" = String, Path, description = "Arena team name")
    ),
    responses(
        (status = 200, description = "Arena team page", body = ArenaTeamDto),
        (status = 404, description = "Realm or team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path((realm, team)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let realm = find_realm(&state, &realm)?;

    let page = ArenaService::new(&state).get_team(realm, &team).await?;

    Ok((StatusCode::OK, Json(page)))
}
