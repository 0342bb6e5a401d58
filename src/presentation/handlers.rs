// HTTP request handlers
use crate::application::controller::{ApplicationOptions, ChartDetails};
use crate::application::scheduler::spawn_refresh;
use crate::domain::application::PatentApplication;
use crate::domain::dashboard::{DashboardState, ViewMode};
use crate::domain::dataset::KpiSnapshot;
use crate::domain::error::DashboardError;
use crate::domain::event::Notification;
use crate::domain::metric::KpiId;
use crate::domain::period::{ChartPeriod, KpiPeriod};
use crate::infrastructure::event_stream::ndjson_response;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = match self {
            DashboardError::UnknownApplication(_) | DashboardError::ChartNotBound(_) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::BAD_REQUEST,
        };
        tracing::debug!(%status, error = %self, "Rejected dashboard request");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full dashboard snapshot
pub async fn get_dashboard(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let compress = accepts_brotli(&headers);
    let snapshot = state.controller.lock().await.snapshot();

    match json_response(&snapshot, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Live feed of surface, chart and notification changes
pub async fn stream_events(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ndjson_response(state.events.subscribe())
}

pub async fn set_view(
    Path(view): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardState>, DashboardError> {
    let view: ViewMode = view.parse()?;
    let mut controller = state.controller.lock().await;
    controller.set_view(view)?;
    Ok(Json(controller.state().clone()))
}

pub async fn set_chart_period(
    Path(period): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardState>, DashboardError> {
    let period: ChartPeriod = period.parse()?;
    let mut controller = state.controller.lock().await;
    controller.set_chart_period(period)?;
    Ok(Json(controller.state().clone()))
}

pub async fn set_kpi_period(
    Path(period): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<KpiSnapshot>, DashboardError> {
    let period: KpiPeriod = period.parse()?;
    Ok(Json(state.controller.lock().await.set_kpis_for_period(period)))
}

pub async fn navigate(
    Path(section): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardState>, DashboardError> {
    let mut controller = state.controller.lock().await;
    controller.navigate_to(&section)?;
    Ok(Json(controller.state().clone()))
}

/// Manual refresh; completes in the background after the simulated latency
pub async fn refresh(State(state): State<Arc<AppState>>) -> StatusCode {
    spawn_refresh(state.controller.clone(), state.refresh_latency);
    StatusCode::ACCEPTED
}

pub async fn create_innovation(State(state): State<Arc<AppState>>) -> StatusCode {
    state.controller.lock().await.create_innovation();
    StatusCode::ACCEPTED
}

pub async fn list_applications(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<PatentApplication>> {
    Json(state.controller.lock().await.show_all_applications().to_vec())
}

pub async fn application_options(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApplicationOptions>, DashboardError> {
    Ok(Json(state.controller.lock().await.show_application_options(&id)?))
}

pub async fn kpi_details(
    Path(kpi): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Notification>, DashboardError> {
    let kpi: KpiId = kpi.parse()?;
    Ok(Json(state.controller.lock().await.show_kpi_details(kpi)))
}

/// Bound chart with its slice tooltips
pub async fn get_chart(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChartDetails>, DashboardError> {
    Ok(Json(state.controller.lock().await.chart_details(&id)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::controller::DashboardController;
    use crate::application::notifications::NotificationCenter;
    use crate::application::render_surface::{CHART_PERIODS, NAV_ITEMS, VIEW_TOGGLES};
    use crate::infrastructure::config::DashboardConfig;
    use crate::infrastructure::memory_surface::InMemorySurface;
    use std::time::Duration;
    use tokio::sync::{broadcast, Mutex};

    fn app_state() -> Arc<AppState> {
        let mut config = DashboardConfig::default();
        config.animation.duration_ms = 20;
        config.updates.seed = Some(1);

        let (events, _) = broadcast::channel(64);
        let surface = Arc::new(InMemorySurface::patent_dashboard(
            &config.navigation.sections,
            Some(events.clone()),
        ));
        let notifications = NotificationCenter::new(config.notifications.ttl(), events.clone());
        let controller = DashboardController::new(surface, notifications, events.clone(), &config);

        Arc::new(AppState {
            controller: Arc::new(Mutex::new(controller)),
            events,
            refresh_latency: Duration::from_millis(10),
        })
    }

    #[tokio::test]
    async fn test_set_view_round_trip() {
        let state = app_state();
        let Json(dashboard) = set_view(Path("list".to_string()), State(state.clone()))
            .await
            .unwrap();
        assert_eq!(dashboard.view, ViewMode::List);
    }

    #[tokio::test]
    async fn test_unknown_tokens_are_bad_requests() {
        let state = app_state();

        let err = set_view(Path("table".to_string()), State(state.clone())).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = set_chart_period(Path("week".to_string()), State(state.clone()))
            .await
            .unwrap_err();
        assert_eq!(err, DashboardError::UnknownChartPeriod("week".to_string()));

        let err = set_kpi_period(Path("2y".to_string()), State(state.clone())).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = navigate(Path("Billing".to_string()), State(state)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_application_is_not_found() {
        let state = app_state();
        let err = application_options(Path("PA-0".to_string()), State(state.clone()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let Json(options) = application_options(Path("PA-2024-001".to_string()), State(state))
            .await
            .unwrap();
        assert_eq!(options.id, "PA-2024-001");
    }

    #[tokio::test]
    async fn test_chart_period_scenario() {
        let state = app_state();
        let Json(dashboard) = set_chart_period(Path("month".to_string()), State(state.clone()))
            .await
            .unwrap();
        assert_eq!(dashboard.chart_period, ChartPeriod::Month);

        let Json(chart) = get_chart(Path("timelineChart".to_string()), State(state))
            .await
            .unwrap();
        assert_eq!(chart.chart.data.labels, vec!["Week 1", "Week 2", "Week 3", "Week 4"]);
        assert!(chart.slices.is_empty());
    }

    #[tokio::test]
    async fn test_category_chart_exposes_slices() {
        let state = app_state();
        let Json(details) = get_chart(Path("categoryChart".to_string()), State(state.clone()))
            .await
            .unwrap();
        assert_eq!(details.slices.len(), 6);
        assert_eq!(details.slices[1], "Blockchain: 25 (22.7%)");

        let body = serde_json::to_value(&details).unwrap();
        assert_eq!(body["kind"], "doughnut");
        assert_eq!(body["slices"][0], "AI/ML: 35 (31.8%)");

        let err = get_chart(Path("heatmap".to_string()), State(state)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_control_missing_from_surface_is_rejected() {
        let (events, _) = broadcast::channel(16);
        let surface = Arc::new(
            InMemorySurface::new(None)
                .with_group(VIEW_TOGGLES, &["grid"])
                .with_group(CHART_PERIODS, &["year"])
                .with_group(NAV_ITEMS, &["Dashboard"]),
        );
        let config = DashboardConfig::default();
        let notifications = NotificationCenter::new(config.notifications.ttl(), events.clone());
        let controller = DashboardController::new(surface, notifications, events.clone(), &config);
        let state = Arc::new(AppState {
            controller: Arc::new(Mutex::new(controller)),
            events,
            refresh_latency: Duration::from_millis(10),
        });

        let err = set_view(Path("list".to_string()), State(state.clone())).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.controller.lock().await.state().view, ViewMode::Grid);
    }

    #[tokio::test]
    async fn test_kpi_period_returns_snapshot() {
        let state = app_state();
        let Json(snapshot) = set_kpi_period(Path("90d".to_string()), State(state)).await.unwrap();
        assert_eq!(snapshot, KpiSnapshot::new(312, 124, 188, 60));
    }

    #[tokio::test]
    async fn test_refresh_is_accepted() {
        let state = app_state();
        assert_eq!(refresh(State(state.clone())).await, StatusCode::ACCEPTED);
        tokio::time::sleep(Duration::from_millis(100)).await;
        let snapshot = state.controller.lock().await.snapshot();
        assert!(snapshot
            .notifications
            .iter()
            .any(|n| n.message == "Data refreshed successfully!"));
    }

    #[tokio::test]
    async fn test_dashboard_snapshot_response() {
        let state = app_state();
        let response = get_dashboard(HeaderMap::new(), State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "ok");
    }
}
