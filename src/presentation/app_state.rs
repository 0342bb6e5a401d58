// Application state for HTTP handlers
use crate::application::scheduler::SharedController;
use crate::domain::event::DashboardEvent;
use std::time::Duration;
use tokio::sync::broadcast;

#[derive(Clone)]
pub struct AppState {
    pub controller: SharedController,
    pub events: broadcast::Sender<DashboardEvent>,
    pub refresh_latency: Duration,
}
