use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        guild::{GuildDto, GuildMembersDto},
    },
    server::{
        controller::{find_realm, GridQuery},
        error::AppError,
        service::guild::GuildService,
        state::AppState,
    },
};

/// Tag for grouping guild endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

/// Get a guild page.
///
/// # Arguments
/// - `state` - Application state with realm connections
/// - `realm` - Realm name, matched case-insensitively
/// - `guild` - Exact guild name
///
/// # Returns
/// - `200 OK` - Guild with leader, faction, emblem and member count
/// - `404 Not Found` - Unknown realm or guild
/// - `500 Internal Server Error` - Query failed or timed out
#[utoipa::path(
    get,
    path = "/guild/{realm}/{guild}",
    tag = GUILD_TAG,
    params(
        ("realm" = String, Path, description = "Realm name"),
        ("guild" = String, Path, description = "Guild name")
    ),
    responses(
        (status = 200, description = "Guild page", body = GuildDto),
        (status = 404, description = "Realm or guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild(
    State(state): State<AppState>,
    Path((realm, guild)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let realm = find_realm(&state, &realm)?;

    let page = GuildService::new(&state, realm).get_guild(&guild).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get one page of a guild's member grid.
///
/// The query string carries the data grid state (`draw`, `start`, `length`,
/// `search[value]`, `order[i][...]`, `columns[i][...]`). Rows hold name, rank, level,
/// class, race and online status, followed by the raw gender.
///
/// # Arguments
/// - `state` - Application state with realm connections
/// - `realm` - Realm name, matched case-insensitively
/// - `guild` - Guild id
/// - `query` - Raw grid query string
///
/// # Returns
/// - `200 OK` - Grid page with the guild's rank names
/// - `400 Bad Request` - Non-numeric guild id or malformed grid parameters
/// - `404 Not Found` - Unknown realm or guild
/// - `500 Internal Server Error` - Query failed or timed out
#[utoipa::path(
    get,
    path = "/guild/{realm}/{guild}/members",
    tag = GUILD_TAG,
    params(
        ("realm" = String, Path, description = "Realm name"),
        ("guild" = u32, Path, description = "Guild id")
    ),
    responses(
        (status = 200, description = "Guild member grid page", body = GuildMembersDto),
        (status = 400, description = "Invalid guild id or grid parameters", body = ErrorDto),
        (status = 404, description = "Realm or guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    Path((realm, guild)): Path<(String, String)>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let realm = find_realm(&state, &realm)?;
    let guild_id = guild
        .parse::<u32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid guild id {}", guild)))?;
    let request = GridQuery::parse(query.as_deref()).request()?;

    let members = GuildService::new(&state, realm)
        .get_members(guild_id, &request)
        .await?;

    Ok((StatusCode::OK, Json(members)))
}
