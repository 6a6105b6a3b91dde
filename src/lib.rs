//! Movie-discovery backend: onboarding picks and watch-room playback sync.

use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::Cache;
use routes::AppState;
use services::{
    catalog::PostgresCandidateSource, watch_rooms::PostgresWatchRooms, OnboardingService,
    WatchRoomService,
};

/// Connects to storage, builds the router and serves until Ctrl-C
pub async fn run(config: Config) -> anyhow::Result<()> {
    let db_pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&db_pool).await?;

    let mut onboarding = OnboardingService::new(
        Arc::new(PostgresCandidateSource::new(db_pool.clone())),
        config.onboarding_candidate_limit,
    );

    let cache_writer = match &config.redis_url {
        Some(redis_url) => {
            let client = db::create_redis_client(redis_url)?;
            let (cache, handle) = Cache::new(client).await;
            onboarding = onboarding.with_cache(cache, config.onboarding_cache_ttl_secs);
            tracing::info!(ttl = config.onboarding_cache_ttl_secs, "Onboarding cache enabled");
            Some(handle)
        }
        None => {
            tracing::info!("REDIS_URL not set, onboarding cache disabled");
            None
        }
    };

    let state = Arc::new(AppState {
        onboarding,
        watch_rooms: WatchRoomService::new(Arc::new(PostgresWatchRooms::new(db_pool))),
    });

    let app = routes::create_router(state).layer(cors_layer(&config)?);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = cache_writer {
        handle.shutdown().await;
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// CORS for the web client; permissive unless an origin is configured
pub fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    match &config.cors_allow_origin {
        Some(origin) => Ok(CorsLayer::new()
            .allow_origin(HeaderValue::from_str(origin)?)
            .allow_methods([Method::GET, Method::POST, Method::PUT])
            .allow_headers([
                header::CONTENT_TYPE,
                HeaderName::from_static(middleware::caller::USER_ID_HEADER),
                HeaderName::from_static(middleware::request_id::REQUEST_ID_HEADER),
            ])),
        None => Ok(CorsLayer::permissive()),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
