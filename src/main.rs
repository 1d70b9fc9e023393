//! moral-graph server binary.
//!
//! Loads configuration, connects to the judgement store, and serves the
//! reporting endpoints.

use std::sync::Arc;

use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use moral_graph::adapters::http::{reporting_routes, ReportingAppState};
use moral_graph::adapters::PostgresMoralGraphReader;
use moral_graph::application::ScopeResolver;
use moral_graph::config::{AppConfig, LogFormat, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let cohorts = config.cohorts.load_registry()?;
    info!(runs = cohorts.len(), "Loaded cohort registry");

    let pool = config.database.connect().await?;
    let reader = Arc::new(PostgresMoralGraphReader::new(pool));

    let state = ReportingAppState {
        judgement_reader: reader.clone(),
        demographic_reader: reader.clone(),
        vote_reader: reader,
        scopes: ScopeResolver::new(Arc::new(cohorts)),
        edge_policy: config.graph.edge_policy(),
        min_political_samples: config.graph.min_political_samples,
    };

    let app = reporting_routes(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Moral graph server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    match server.log_format() {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .init(),
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([http::Method::GET])
        .allow_origin(AllowOrigin::list(origins))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
