//! Konfetka store API entry point

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use konfetka_auth_core::AuthService;
use konfetka_db::PgUserRepository;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use store_api::config::{AppEnv, Config};
use store_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting konfetka store API");

    let config = Config::from_env()?;

    // Database
    let pool = konfetka_db::create_pool(&config.database_url).await?;
    konfetka_db::MIGRATOR.run(&pool).await?;

    let users = Arc::new(PgUserRepository::new(pool));
    let auth = AuthService::new(config.auth.clone(), users);
    let state = AppState::new(auth);

    // Only the store frontend may call us in production
    let cors = match config.env {
        AppEnv::Production => {
            CorsLayer::new().allow_origin("https://konfetka-shop.kz".parse::<HeaderValue>()?)
        }
        AppEnv::Development => CorsLayer::permissive(),
    };

    let app = store_api::app(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CompressionLayer::new());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
