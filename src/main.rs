// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Router,
    routing::{get, post},
};
use tokio::sync::mpsc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::panel_service::PanelService;
use crate::infrastructure::backend::HttpFitnessService;
use crate::infrastructure::config::load_panel_config;
use crate::infrastructure::scheduler::spawn_update_schedule;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_panel, health_check, ingest_event};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_panel_config()?;

    // Initialize tracing; debug mode surfaces intermediate aggregation output
    let default_filter = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    // Inbound event channel from the fitness backend
    let (events_tx, events_rx) = mpsc::channel(64);

    // Outbound collaborator (infrastructure layer)
    let backend = Arc::new(HttpFitnessService::new(config.backend_url.clone()));

    // Panel event loop (application layer)
    let (panel, render_rx) = PanelService::new(config.clone());
    tokio::spawn(panel.run(events_rx));

    // Periodic refresh trigger, independent of the event loop
    spawn_update_schedule(
        backend.clone(),
        Duration::from_secs(config.update_interval_minutes * 60),
    );

    // Application state
    let state = Arc::new(AppState {
        events: events_tx,
        render: render_rx,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/panel", get(get_panel))
        .route("/events", post(ingest_event))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8130".parse().unwrap();
    println!("Starting fitness-panel service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
