// In-process rendering surface backed by maps, publishing change events
use crate::application::controller::{CATEGORY_CHART, TIMELINE_CHART};
use crate::application::render_surface::{RenderSurface, CHART_PERIODS, NAV_ITEMS, VIEW_TOGGLES};
use crate::domain::dashboard::ViewMode;
use crate::domain::event::DashboardEvent;
use crate::domain::metric::KpiId;
use crate::domain::period::ChartPeriod;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;

#[derive(Debug, Default)]
struct ControlGroup {
    members: Vec<String>,
    active: Option<String>,
}

#[derive(Debug, Default)]
struct SurfaceState {
    elements: BTreeMap<String, String>,
    groups: BTreeMap<String, ControlGroup>,
}

pub struct InMemorySurface {
    state: Mutex<SurfaceState>,
    events: Option<broadcast::Sender<DashboardEvent>>,
}

impl InMemorySurface {
    pub fn new(events: Option<broadcast::Sender<DashboardEvent>>) -> Self {
        Self {
            state: Mutex::new(SurfaceState::default()),
            events,
        }
    }

    pub fn with_element(self, key: &str, text: &str) -> Self {
        self.lock()
            .elements
            .insert(key.to_string(), text.to_string());
        self
    }

    pub fn with_group<S: AsRef<str>>(self, name: &str, members: &[S]) -> Self {
        let group = ControlGroup {
            members: members.iter().map(|m| m.as_ref().to_string()).collect(),
            active: None,
        };
        self.lock().groups.insert(name.to_string(), group);
        self
    }

    /// Surface laid out like the patent dashboard page: four KPI cards, two
    /// chart canvases and the three control groups.
    pub fn patent_dashboard(
        sections: &[String],
        events: Option<broadcast::Sender<DashboardEvent>>,
    ) -> Self {
        let views: Vec<&str> = ViewMode::ALL.iter().map(|v| v.as_str()).collect();
        let periods: Vec<&str> = ChartPeriod::ALL.iter().map(|p| p.as_str()).collect();

        Self::new(events)
            .with_element(KpiId::TotalPatents.element_key(), "247")
            .with_element(KpiId::PendingApplications.element_key(), "89")
            .with_element(KpiId::GrantedPatents.element_key(), "158")
            .with_element(KpiId::SuccessRate.element_key(), "64%")
            .with_element(TIMELINE_CHART, "")
            .with_element(CATEGORY_CHART, "")
            .with_group(VIEW_TOGGLES, &views)
            .with_group(CHART_PERIODS, &periods)
            .with_group(NAV_ITEMS, sections)
    }

    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, event: DashboardEvent) {
        if let Some(events) = &self.events {
            let _ = events.send(event);
        }
    }
}

impl RenderSurface for InMemorySurface {
    fn has_element(&self, key: &str) -> bool {
        self.lock().elements.contains_key(key)
    }

    fn get_text(&self, key: &str) -> Option<String> {
        self.lock().elements.get(key).cloned()
    }

    fn set_text(&self, key: &str, text: &str) -> bool {
        {
            let mut state = self.lock();
            match state.elements.get_mut(key) {
                Some(current) if current.as_str() == text => return true,
                Some(current) => *current = text.to_string(),
                None => return false,
            }
        }
        self.publish(DashboardEvent::TextChanged {
            key: key.to_string(),
            text: text.to_string(),
        });
        true
    }

    fn activate(&self, group: &str, key: &str) -> bool {
        {
            let mut state = self.lock();
            let Some(controls) = state.groups.get_mut(group) else {
                return false;
            };
            if !controls.members.iter().any(|m| m == key) {
                return false;
            }
            controls.active = Some(key.to_string());
        }
        self.publish(DashboardEvent::ControlActivated {
            group: group.to_string(),
            key: key.to_string(),
        });
        true
    }

    fn active(&self, group: &str) -> Option<String> {
        self.lock().groups.get(group).and_then(|g| g.active.clone())
    }

    fn texts(&self) -> BTreeMap<String, String> {
        self.lock().elements.clone()
    }
}
