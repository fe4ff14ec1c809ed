mod config;

use axum::http::{
    HeaderValue, Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use bookmart_api::AppStateInner;
use bookmart_api::password::Argon2Hasher;
use bookmart_api::uploads::DiskImageStore;

use crate::config::{Config, UPLOADS_PREFIX};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookmart=debug,bookmart_api=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Init database and upload storage
    let db = bookmart_db::Database::open(&config.db_path)?;
    let images = DiskImageStore::new(config.upload_dir.clone(), UPLOADS_PREFIX).await?;

    let state = AppStateInner::new(db, Argon2Hasher::new(), images);

    let cors = CorsLayer::new()
        .allow_origin(config.client_url.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true);

    let app = bookmart_api::router(state)
        .nest_service(
            &format!("/{UPLOADS_PREFIX}"),
            ServeDir::new(&config.upload_dir),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = config.addr()?;
    info!("Bookmart server listening on {}", addr);
    info!("Accepting browser requests from {}", config.client_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
