// Dashboard error taxonomy
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("unknown view '{0}' (expected 'grid' or 'list')")]
    UnknownView(String),

    #[error("unknown chart period '{0}' (expected 'month', 'quarter' or 'year')")]
    UnknownChartPeriod(String),

    #[error("unknown KPI period '{0}' (expected '7d', '30d', '90d' or '1y')")]
    UnknownKpiPeriod(String),

    #[error("unknown navigation section '{0}'")]
    UnknownSection(String),

    #[error("unknown KPI '{0}'")]
    UnknownKpi(String),

    #[error("unknown application '{0}'")]
    UnknownApplication(String),

    #[error("chart '{0}' is not bound")]
    ChartNotBound(String),
}
