// Dashboard UI state domain model
use crate::domain::error::DashboardError;
use crate::domain::period::ChartPeriod;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Grid,
    List,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Grid, ViewMode::List];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewMode::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownView(s.to_string()))
    }
}

/// Exactly one active value per axis; the axes are independent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    pub view: ViewMode,
    pub chart_period: ChartPeriod,
    pub nav_section: String,
}

impl DashboardState {
    pub fn new(nav_section: String) -> Self {
        Self {
            view: ViewMode::Grid,
            chart_period: ChartPeriod::Year,
            nav_section,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = DashboardState::new("Dashboard".to_string());
        assert_eq!(state.view, ViewMode::Grid);
        assert_eq!(state.chart_period, ChartPeriod::Year);
        assert_eq!(state.nav_section, "Dashboard");
    }

    #[test]
    fn test_view_tokens() {
        assert_eq!("list".parse::<ViewMode>().unwrap(), ViewMode::List);
        assert_eq!(
            "table".parse::<ViewMode>(),
            Err(DashboardError::UnknownView("table".to_string()))
        );
    }
}
