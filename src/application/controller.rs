// Dashboard controller - UI state, chart bindings and interaction dispatch
use crate::application::animator::ValueAnimator;
use crate::application::notifications::NotificationCenter;
use crate::application::render_surface::{RenderSurface, CHART_PERIODS, NAV_ITEMS, VIEW_TOGGLES};
use crate::application::selector::PeriodDataSelector;
use crate::domain::application::{recent_applications, PatentApplication, APPLICATION_ACTIONS};
use crate::domain::chart::{BoundChart, ChartKind, ChartOptions};
use crate::domain::dashboard::{DashboardState, ViewMode};
use crate::domain::dataset::KpiSnapshot;
use crate::domain::error::DashboardError;
use crate::domain::event::{DashboardEvent, Notification, Severity};
use crate::domain::metric::{parse_displayed, KpiId, MetricValue};
use crate::domain::period::{ChartPeriod, KpiPeriod};
use crate::infrastructure::config::DashboardConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

pub const TIMELINE_CHART: &str = "timelineChart";
pub const CATEGORY_CHART: &str = "categoryChart";

/// Manual refresh perturbs each primary KPI by a delta in `[-5, 4]`.
const REFRESH_DELTA: std::ops::Range<i64> = -5..5;

/// Control groups reported in the snapshot.
const CONTROL_GROUPS: [&str; 3] = [VIEW_TOGGLES, CHART_PERIODS, NAV_ITEMS];

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub state: DashboardState,
    pub elements: BTreeMap<String, String>,
    pub controls: BTreeMap<String, Option<String>>,
    pub animating: Vec<String>,
    pub charts: Vec<ChartDetails>,
    pub applications: Vec<PatentApplication>,
    pub notifications: Vec<Notification>,
}

/// A bound chart plus the tooltip text of each slice (doughnuts only).
#[derive(Debug, Clone, Serialize)]
pub struct ChartDetails {
    #[serde(flatten)]
    pub chart: BoundChart,
    pub slices: Vec<String>,
}

impl From<&BoundChart> for ChartDetails {
    fn from(chart: &BoundChart) -> Self {
        Self {
            slices: chart.slice_labels(),
            chart: chart.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationOptions {
    pub id: String,
    pub actions: Vec<&'static str>,
}

pub struct DashboardController {
    state: DashboardState,
    surface: Arc<dyn RenderSurface>,
    selector: PeriodDataSelector,
    animator: ValueAnimator,
    notifications: NotificationCenter,
    events: broadcast::Sender<DashboardEvent>,
    timeline: Option<BoundChart>,
    categories: Option<BoundChart>,
    applications: Vec<PatentApplication>,
    sections: Vec<String>,
    rng: StdRng,
    update_probability: f64,
    refresh_baseline: String,
    placeholder_delay: Duration,
}

impl DashboardController {
    pub fn new(
        surface: Arc<dyn RenderSurface>,
        notifications: NotificationCenter,
        events: broadcast::Sender<DashboardEvent>,
        config: &DashboardConfig,
    ) -> Self {
        let selector = PeriodDataSelector::new();
        let sections = config.navigation.sections.clone();
        let mut state = DashboardState::new(sections.first().cloned().unwrap_or_default());
        let (initial_period, initial_timeline) =
            selector.chart_bundle_or_default(&config.navigation.initial_chart_period);
        state.chart_period = initial_period;

        // Charts are only created when their canvas exists.
        let timeline = surface.has_element(TIMELINE_CHART).then(|| {
            BoundChart::new(
                TIMELINE_CHART,
                ChartKind::Line,
                ChartOptions::timeline(),
                initial_timeline,
            )
        });
        let categories = surface.has_element(CATEGORY_CHART).then(|| {
            BoundChart::new(
                CATEGORY_CHART,
                ChartKind::Doughnut,
                ChartOptions::categories(),
                selector.categories(),
            )
        });

        for (group, key) in [
            (VIEW_TOGGLES, state.view.as_str()),
            (CHART_PERIODS, state.chart_period.as_str()),
            (NAV_ITEMS, state.nav_section.as_str()),
        ] {
            if !surface.activate(group, key) {
                tracing::warn!(group, key, "Surface has no control for the initial state");
            }
        }

        let rng = match config.updates.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            state,
            animator: ValueAnimator::new(surface.clone(), &config.animation),
            surface,
            selector,
            notifications,
            events,
            timeline,
            categories,
            applications: recent_applications(),
            sections,
            rng,
            update_probability: config.updates.probability,
            refresh_baseline: config.updates.refresh_baseline.clone(),
            placeholder_delay: config.updates.placeholder_delay(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Make `key` the active control of `group`. When the surface has no such
    /// control nothing changes, an error notice is shown and `err` is returned.
    fn activate(
        &self,
        group: &str,
        key: &str,
        err: impl FnOnce(String) -> DashboardError,
    ) -> Result<(), DashboardError> {
        if self.surface.activate(group, key) {
            return Ok(());
        }
        tracing::warn!(group, key, "Surface rejected control activation");
        self.notifications
            .push(format!("Cannot select {}: control is not available", key), Severity::Error);
        Err(err(key.to_string()))
    }

    pub fn set_view(&mut self, view: ViewMode) -> Result<(), DashboardError> {
        self.activate(VIEW_TOGGLES, view.as_str(), DashboardError::UnknownView)?;
        self.state.view = view;
        tracing::info!(%view, "View switched");
        self.notifications
            .push(format!("Switched to {} view", view), Severity::Info);
        Ok(())
    }

    pub fn set_chart_period(&mut self, period: ChartPeriod) -> Result<(), DashboardError> {
        self.activate(CHART_PERIODS, period.as_str(), DashboardError::UnknownChartPeriod)?;
        self.state.chart_period = period;

        let bundle = self.selector.chart_bundle(period);
        if let Some(chart) = self.timeline.as_mut() {
            chart.replace_data(bundle);
            let revision = chart.update();
            let _ = self.events.send(DashboardEvent::ChartUpdated {
                chart: chart.id.clone(),
                revision,
            });
        }
        tracing::info!(%period, "Chart period switched");
        Ok(())
    }

    pub fn set_kpis_for_period(&mut self, period: KpiPeriod) -> KpiSnapshot {
        let snapshot = self.selector.kpi_snapshot(period);
        for kpi in KpiId::ALL {
            self.animator.animate(kpi.element_key(), snapshot.value(kpi));
        }
        tracing::info!(%period, ?snapshot, "KPIs updated for period");
        snapshot
    }

    pub fn navigate_to(&mut self, section: &str) -> Result<(), DashboardError> {
        if !self.sections.iter().any(|s| s == section) {
            return Err(DashboardError::UnknownSection(section.to_string()));
        }
        self.activate(NAV_ITEMS, section, DashboardError::UnknownSection)?;
        self.state.nav_section = section.to_string();
        tracing::info!(section, "Navigated");
        self.notifications
            .push(format!("Navigating to {}...", section), Severity::Info);
        Ok(())
    }

    fn displayed(&self, kpi: KpiId) -> Option<u64> {
        self.surface
            .get_text(kpi.element_key())
            .as_deref()
            .and_then(parse_displayed)
    }

    /// Background tick: with the configured probability, nudge one primary KPI.
    pub fn maybe_simulate_realtime_update(&mut self) -> Option<KpiId> {
        if self.rng.gen_bool(self.update_probability) {
            self.simulate_realtime_update()
        } else {
            None
        }
    }

    /// Nudge a uniformly chosen primary KPI by one in either direction.
    pub fn simulate_realtime_update(&mut self) -> Option<KpiId> {
        let kpi = KpiId::PRIMARY[self.rng.gen_range(0..KpiId::PRIMARY.len())];
        let current = self.displayed(kpi)?;
        let next = if self.rng.gen_bool(0.5) {
            current.saturating_add(1)
        } else {
            current.saturating_sub(1)
        };

        self.animator
            .animate(kpi.element_key(), MetricValue::new(next, kpi.format()));
        tracing::debug!(kpi = kpi.element_key(), current, next, "Simulated real-time update");
        self.notifications
            .push(format!("Updated {}", kpi.label()), Severity::Info);
        Some(kpi)
    }

    /// Completes a manual refresh once the simulated latency has passed.
    pub fn apply_refresh(&mut self) -> Vec<(KpiId, u64)> {
        let baseline = self.selector.kpi_snapshot_or_default(&self.refresh_baseline);
        let mut applied = Vec::with_capacity(KpiId::PRIMARY.len());

        for kpi in KpiId::PRIMARY {
            let base = baseline.value(kpi).magnitude as i64;
            let target = (base + self.rng.gen_range(REFRESH_DELTA)).max(0) as u64;
            self.animator
                .animate(kpi.element_key(), MetricValue::new(target, kpi.format()));
            applied.push((kpi, target));
        }

        tracing::info!(?applied, "Data refreshed");
        self.notifications
            .push("Data refreshed successfully!", Severity::Success);
        applied
    }

    pub fn create_innovation(&self) {
        self.notifications
            .push("Opening innovation creation form...", Severity::Info);
        self.notifications.push_after(
            self.placeholder_delay,
            "Innovation creation is not available yet: new patent ideas, descriptions \
             and metadata will be added here.",
            Severity::Info,
        );
    }

    pub fn show_all_applications(&self) -> &[PatentApplication] {
        self.notifications
            .push("Opening full applications list...", Severity::Info);
        self.notifications.push_after(
            self.placeholder_delay,
            "Full applications management with search and filtering is not available yet.",
            Severity::Info,
        );
        &self.applications
    }

    pub fn show_application_options(&self, id: &str) -> Result<ApplicationOptions, DashboardError> {
        let application = self
            .applications
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| DashboardError::UnknownApplication(id.to_string()))?;

        self.notifications
            .push(format!("Opening options for {}...", application.id), Severity::Info);
        Ok(ApplicationOptions {
            id: application.id.clone(),
            actions: APPLICATION_ACTIONS.to_vec(),
        })
    }

    pub fn show_kpi_details(&self, kpi: KpiId) -> Notification {
        self.notifications.push(
            format!("Detailed analytics for {} are not available yet", kpi.title()),
            Severity::Info,
        )
    }

    pub fn chart(&self, id: &str) -> Result<&BoundChart, DashboardError> {
        [self.timeline.as_ref(), self.categories.as_ref()]
            .into_iter()
            .flatten()
            .find(|chart| chart.id == id)
            .ok_or_else(|| DashboardError::ChartNotBound(id.to_string()))
    }

    pub fn chart_details(&self, id: &str) -> Result<ChartDetails, DashboardError> {
        self.chart(id).map(ChartDetails::from)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            state: self.state.clone(),
            elements: self.surface.texts(),
            controls: CONTROL_GROUPS
                .into_iter()
                .map(|group| (group.to_string(), self.surface.active(group)))
                .collect(),
            animating: self.animator.animating(),
            charts: [self.timeline.as_ref(), self.categories.as_ref()]
                .into_iter()
                .flatten()
                .map(ChartDetails::from)
                .collect(),
            applications: self.applications.clone(),
            notifications: self.notifications.active(),
        }
    }
}
