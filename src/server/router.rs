use axum::{
    http::{HeaderName, Request, StatusCode},
    response::Response,
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        arena::{self, ARENA_TAG},
        character::{self, CHARACTER_TAG},
        guild::{self, GUILD_TAG},
        index::{self, INDEX_TAG},
        search::{self, SEARCH_TAG},
    },
    error::error_response,
    state::AppState,
};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Model viewer data directories served below `/data`.
const MODEL_VIEWER_DIRS: [&str; 4] = ["mo3", "meta", "bone", "textures"];

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Armory",
        description = "Read-only character, guild and arena team profiles of a game server"
    ),
    tags(
        (name = INDEX_TAG, description = "Landing page"),
        (name = CHARACTER_TAG, description = "Character profile pages"),
        (name = GUILD_TAG, description = "Guild pages and member grids"),
        (name = ARENA_TAG, description = "Arena ladders and team pages"),
        (name = SEARCH_TAG, description = "Character search grid")
    )
)]
struct ApiDoc;

/// Builds the application router with documentation, static files and the 404 fallback.
///
/// # Arguments
/// - `config` - Static file locations
///
/// # Returns
/// - `Router<AppState>` - Router still waiting for its state
pub fn router(config: &Config) -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(index::get_index))
        .routes(routes!(character::get_character))
        .routes(routes!(character::get_talents))
        .routes(routes!(character::get_achievements))
        .routes(routes!(character::get_achievements_data))
        .routes(routes!(character::get_pvp))
        .routes(routes!(guild::get_guild))
        .routes(routes!(guild::get_members))
        .routes(routes!(arena::get_index))
        .routes(routes!(arena::get_ladder))
        .routes(routes!(arena::get_team))
        .routes(routes!(search::search_characters))
        .split_for_parts();

    let mut router = router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .nest_service("/js", ServeDir::new(config.static_dir.join("js")))
        .nest_service("/css", ServeDir::new(config.static_dir.join("css")))
        .nest_service("/img", ServeDir::new(config.static_dir.join("img")))
        .route_service(
            "/data/background.png",
            ServeFile::new(config.data_dir.join("background.png")),
        );

    for dir in MODEL_VIEWER_DIRS {
        router = router.nest_service(
            &format!("/data/{dir}"),
            ServeDir::new(config.data_dir.join(dir)),
        );
    }

    router.fallback(not_found)
}

/// Wraps the router with request ids and access logging and attaches the state.
///
/// Every request gets an `x-request-id` (kept when the client sent one) that is recorded
/// on the request span and echoed on the response.
pub fn app(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    router(&state.config)
        .with_state(state)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|id| id.to_str().ok())
                .unwrap_or_default();

            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        }))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use tower::ServiceExt;

    use super::*;
    use crate::{model::api::ErrorDto, server::service::test::armory};
    use test_utils::{builder::TestBuilder, factory};

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn error_body(response: Response) -> ErrorDto {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn unknown_route_renders_not_found_body() {
        let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
        let armory = armory(test.db.as_ref().unwrap(), false).await;

        let response = get(app(armory.state.clone()), "/no/such/page").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        assert_eq!(error_body(response).await, ErrorDto::from_status(404));
    }

    #[tokio::test]
    async fn keeps_client_request_id() {
        let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
        let armory = armory(test.db.as_ref().unwrap(), false).await;

        let response = app(armory.state.clone())
            .oneshot(
                Request::get("/")
                    .header(REQUEST_ID_HEADER, "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");
    }

    #[tokio::test]
    async fn unknown_realm_on_page_route_is_not_found() {
        let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let armory = armory(db, false).await;
        factory::create_character_named(db, "Bolvar").await.unwrap();

        let found = get(app(armory.state.clone()), "/character/ICECROWN/bolvar").await;
        let missing = get(app(armory.state.clone()), "/character/Lordaeron/Bolvar").await;

        assert_eq!(found.status(), StatusCode::OK);
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_numeric_parameters_are_bad_requests() {
        let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
        let armory = armory(test.db.as_ref().unwrap(), false).await;

        let guild = get(app(armory.state.clone()), "/guild/Icecrown/abc/members").await;
        let guid = get(
            app(armory.state.clone()),
            "/character/Icecrown/Bolvar/achievements/data",
        )
        .await;
        let team_size = get(app(armory.state.clone()), "/arena/ladder?teamsize=4").await;
        let grid = get(app(armory.state.clone()), "/search?start=minus").await;

        assert_eq!(guild.status(), StatusCode::BAD_REQUEST);
        assert_eq!(guid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(team_size.status(), StatusCode::BAD_REQUEST);
        assert_eq!(grid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_body(grid).await, ErrorDto::from_status(400));
    }

    #[tokio::test]
    async fn serves_openapi_document() {
        let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
        let armory = armory(test.db.as_ref().unwrap(), false).await;

        let response = get(app(armory.state.clone()), "/api/docs/openapi.json").await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let document: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(document["paths"]["/arena/ladder"].is_object());
        assert!(document["paths"]["/character/{realm}/{character}/pvp"].is_object());
    }
}
