pub mod handlers;
pub mod types;

use crate::{Result, config::Config, forwarder::HttpForwarder};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState, cors: bool) -> Router {
    let app = Router::new()
        .route("/api/prompts", post(handlers::prompts))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

pub async fn run(config: Config) -> Result<()> {
    let forwarder = HttpForwarder::new(&config.downstream)?;
    info!(
        "Forwarding prompts to {} (timeout {}ms)",
        forwarder.url(),
        config.downstream.timeout_ms
    );

    let app_state = AppState {
        forwarder: Arc::new(forwarder),
        reject_missing_input: config.server.reject_missing_input,
    };

    let app = router(app_state, config.server.cors);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
