pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::{ErrorResponse, GenerateResponse, RenderResponse};

use crate::config::Config;
use crate::llm::OpenAiHttpClient;
use crate::relay::Relay;
use crate::Result;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Inbound payload cap. Form submissions are tiny; anything larger is abuse.
const BODY_LIMIT: usize = 1024 * 1024;

/// Builds the application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/openai", post(handlers::generate))
        .route("/api/sesion", post(handlers::render_local))
        .route("/api/competencias/:grado", get(handlers::competencias))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Wire the real upstream client into the relay
    let client = Arc::new(OpenAiHttpClient::new(&config.llm));
    let relay = Relay::new(config.llm.clone(), client);

    let state = AppState {
        relay: Arc::new(relay),
    };

    let app = app(state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
