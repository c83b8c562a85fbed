use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        character::{
            AchievementsDataDto, CharacterDto, CharacterPvpDto, CharacterSheetDto,
            CharacterTalentsDto,
        },
    },
    server::{
        controller::find_realm, error::AppError, service::character::CharacterService,
        state::AppState,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

/// Get a character's profile page.
///
/// Returns the shared character sheet together with the equipped items, the items drawn
/// by the model viewer, the resolved customization choices and the learned mounts.
/// Deleted characters and, when configured, game masters are not found.
///
/// # Arguments
/// - `state` - Application state with realm connections and reference data
/// - `realm` - Realm name, matched case-insensitively
/// - `character` - Character name, matched case-insensitively
///
/// # Returns
/// - `200 OK` - Character profile
/// - `404 Not Found` - Unknown realm or character
/// - `500 Internal Server Error` - Query failed or timed out
#[utoipa::path(
    get,
    path = "/character/{realm}/{character}",
    tag = CHARACTER_TAG,
    params(
        ("realm" = String, Path, description = "Realm name"),
        ("character" = String, Path, description = "Character name")
    ),
    responses(
        (status = 200, description = "Character profile", body = CharacterDto),
        (status = 404, description = "Realm or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path((realm, character)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let realm = find_realm(&state, &realm)?;

    let page = CharacterService::new(&state, realm)
        .get_character(&character)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a character's talents page.
///
/// # Returns
/// - `200 OK` - Talents of both specs, the class's talent trees and glyphs
/// - `404 Not Found` - Unknown realm or character
/// - `500 Internal Server Error` - Query failed or reference data unreadable
#[utoipa::path(
    get,
    path = "/character/{realm}/{character}/talents",
    tag = CHARACTER_TAG,
    params(
        ("realm" = String, Path, description = "Realm name"),
        ("character" = String, Path, description = "Character name")
    ),
    responses(
        (status = 200, description = "Character talents", body = CharacterTalentsDto),
        (status = 404, description = "Realm or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_talents(
    State(state): State<AppState>,
    Path((realm, character)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let realm = find_realm(&state, &realm)?;

    let page = CharacterService::new(&state, realm)
        .get_talents(&character)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get the sheet of a character's achievements page.
///
/// The achievement listing itself is fetched by guid from the `achievements/data`
/// endpoint.
///
/// # Returns
/// - `200 OK` - Character sheet
/// - `404 Not Found` - Unknown realm or character
/// - `500 Internal Server Error` - Query failed or timed out
#[utoipa::path(
    get,
    path = "/character/{realm}/{character}/achievements",
    tag = CHARACTER_TAG,
    params(
        ("realm" = String, Path, description = "Realm name"),
        ("character" = String, Path, description = "Character name")
    ),
    responses(
        (status = 200, description = "Character sheet", body = CharacterSheetDto),
        (status = 404, description = "Realm or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_achievements(
    State(state): State<AppState>,
    Path((realm, character)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let realm = find_realm(&state, &realm)?;

    let sheet = CharacterService::new(&state, realm)
        .get_achievements_sheet(&character)
        .await?;

    Ok((StatusCode::OK, Json(sheet)))
}

/// Get the achievement listing of a character.
///
/// # Arguments
/// - `state` - Application state with realm connections and reference data
/// - `realm` - Realm name, matched case-insensitively
/// - `character` - Character guid
///
/// # Returns
/// - `200 OK` - Achievement categories, the achievements of the character's faction and
///   the earned dates
/// - `400 Bad Request` - The guid is not a number
/// - `404 Not Found` - Unknown realm or character
/// - `500 Internal Server Error` - Query failed or reference data unreadable
#[utoipa::path(
    get,
    path = "/character/{realm}/{character}/achievements/data",
    tag = CHARACTER_TAG,
    params(
        ("realm" = String, Path, description = "Realm name"),
        ("character" = u32, Path, description = "Character guid")
    ),
    responses(
        (status = 200, description = "Achievement listing", body = AchievementsDataDto),
        (status = 400, description = "Invalid guid", body = ErrorDto),
        (status = 404, description = "Realm or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_achievements_data(
    State(state): State<AppState>,
    Path((realm, character)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let realm = find_realm(&state, &realm)?;
    let guid = character
        .parse::<u32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid character guid {}", character)))?;

    let data = CharacterService::new(&state, realm)
        .get_achievements_data(guid)
        .await?;

    Ok((StatusCode::OK, Json(data)))
}

/// Get a character's PvP page.
///
/// # Returns
/// - `200 OK` - Faction, honorable kills and arena teams
/// - `404 Not Found` - Unknown realm or character
/// - `500 Internal Server Error` - Query failed or timed out
#[utoipa::path(
    get,
    path = "/character/{realm}/{character}/pvp",
    tag = CHARACTER_TAG,
    params(
        ("realm" = String, Path, description = "Realm name"),
        ("character" = String, Path, description = "Character name")
    ),
    responses(
        (status = 200, description = "Character PvP page", body = CharacterPvpDto),
        (status = 404, description = "Realm or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pvp(
    State(state): State<AppState>,
    Path((realm, character)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let realm = find_realm(&state, &realm)?;

    let page = CharacterService::new(&state, realm).get_pvp(&character).await?;

    Ok((StatusCode::OK, Json(page)))
}
