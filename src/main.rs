// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::application::dashboard_service::DashboardService;
use crate::application::plot_backend::PlotBackend;
use crate::application::render_service::TerminalRenderService;
use crate::application::term_env::EnvProbe;
use crate::infrastructure::config::load_server_config;
use crate::infrastructure::env::ProcessEnv;
use crate::infrastructure::textplots_backend::TextplotsBackend;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{call_tool, health_check, list_tools};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let server_config = load_server_config()?;

    // Create rendering seams (infrastructure layer)
    let backend: Arc<dyn PlotBackend> = Arc::new(TextplotsBackend);
    let env: Arc<dyn EnvProbe> = Arc::new(ProcessEnv);

    // Create services (application layer)
    let render_service = TerminalRenderService::new(backend, env);
    let dashboard_service = DashboardService::new(render_service.clone());

    // Create application state
    let state = Arc::new(AppState {
        render_service,
        dashboard_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/tools", get(list_tools))
        .route("/tools/:name", post(call_tool))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = server_config.server.listen.parse()?;
    println!("Starting term-charts service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
