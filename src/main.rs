// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::{broadcast, Mutex};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::controller::DashboardController;
use crate::application::notifications::NotificationCenter;
use crate::application::scheduler::spawn_realtime_updates;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::memory_surface::InMemorySurface;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    application_options, create_innovation, get_chart, get_dashboard, health_check, kpi_details,
    list_applications, navigate, refresh, set_chart_period, set_kpi_period, set_view,
    stream_events,
};

// Animation supersession relies on a single-threaded scheduler.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Rendering surface and event fan-out (infrastructure layer)
    let (events, _) = broadcast::channel(1024);
    let surface = Arc::new(InMemorySurface::patent_dashboard(
        &config.navigation.sections,
        Some(events.clone()),
    ));

    // Controller and timers (application layer)
    let notifications = NotificationCenter::new(config.notifications.ttl(), events.clone());
    let controller = Arc::new(Mutex::new(DashboardController::new(
        surface,
        notifications,
        events.clone(),
        &config,
    )));
    spawn_realtime_updates(controller.clone(), config.updates.interval());

    // Create application state
    let state = Arc::new(AppState {
        controller,
        events,
        refresh_latency: config.updates.refresh_latency(),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/events", get(stream_events))
        .route("/view/:view", post(set_view))
        .route("/chart-period/:period", post(set_chart_period))
        .route("/charts/:id", get(get_chart))
        .route("/kpi-period/:period", post(set_kpi_period))
        .route("/kpis/:kpi/details", post(kpi_details))
        .route("/nav/:section", post(navigate))
        .route("/refresh", post(refresh))
        .route("/innovations", post(create_innovation))
        .route("/applications", get(list_applications))
        .route("/applications/:id/options", post(application_options))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!("Starting patent-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
