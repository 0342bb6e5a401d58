// Period keys for chart and KPI lookups
use crate::domain::error::DashboardError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Range shown by the timeline chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPeriod {
    Month,
    Quarter,
    Year,
}

impl ChartPeriod {
    pub const ALL: [ChartPeriod; 3] = [ChartPeriod::Month, ChartPeriod::Quarter, ChartPeriod::Year];

    /// Fallback for unrecognized tokens: the medium-range period.
    pub const DEFAULT: ChartPeriod = ChartPeriod::Quarter;

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartPeriod::Month => "month",
            ChartPeriod::Quarter => "quarter",
            ChartPeriod::Year => "year",
        }
    }
}

impl fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartPeriod {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartPeriod::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownChartPeriod(s.to_string()))
    }
}

/// Range summarized by the KPI cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KpiPeriod {
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl KpiPeriod {
    pub const ALL: [KpiPeriod; 4] = [
        KpiPeriod::Week,
        KpiPeriod::Month,
        KpiPeriod::Quarter,
        KpiPeriod::Year,
    ];

    pub const DEFAULT: KpiPeriod = KpiPeriod::Month;

    pub fn as_str(&self) -> &'static str {
        match self {
            KpiPeriod::Week => "7d",
            KpiPeriod::Month => "30d",
            KpiPeriod::Quarter => "90d",
            KpiPeriod::Year => "1y",
        }
    }
}

impl fmt::Display for KpiPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KpiPeriod {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KpiPeriod::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownKpiPeriod(s.to_string()))
    }
}
