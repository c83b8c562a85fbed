mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::load().await?;
    let listen_address = config.listen_address.clone();

    let state = startup::build_state(config).await?;
    let app = router::app(state);

    let listener = tokio::net::TcpListener::bind(&listen_address)
        .await
        .map_err(|err| AppError::InternalError(format!("Failed to bind {listen_address}: {err}")))?;

    tracing::info!("Armory listening on {}", listen_address);

    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::InternalError(format!("Server error: {err}")))
}
