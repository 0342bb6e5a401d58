// Period data selector - fixed lookup of chart bundles and KPI snapshots
use crate::domain::dataset::{DatasetBundle, KpiSnapshot, SeriesData, SeriesStyle};
use crate::domain::period::{ChartPeriod, KpiPeriod};
use std::sync::Arc;

const FILED_COLOR: (&str, &str) = ("#667eea", "rgba(102, 126, 234, 0.1)");
const GRANTED_COLOR: (&str, &str) = ("#38a169", "rgba(56, 161, 105, 0.1)");
const CATEGORY_COLORS: [&str; 6] =
    ["#667eea", "#764ba2", "#38a169", "#ed8936", "#e53e3e", "#3182ce"];

fn timeline_bundle(labels: &[&str], filed: &[u32], granted: &[u32]) -> Arc<DatasetBundle> {
    Arc::new(DatasetBundle::new(
        labels.iter().map(|l| l.to_string()).collect(),
        vec![
            SeriesData::new(
                Some("Applications Filed".to_string()),
                filed.to_vec(),
                SeriesStyle::line(FILED_COLOR.0, FILED_COLOR.1),
            ),
            SeriesData::new(
                Some("Patents Granted".to_string()),
                granted.to_vec(),
                SeriesStyle::line(GRANTED_COLOR.0, GRANTED_COLOR.1),
            ),
        ],
    ))
}

/// Precomputed, immutable dashboard data keyed by period.
///
/// Every lookup of a period hands out the same `Arc`, so the `year` timeline
/// the dashboard opens with is the object a later `year` selection rebinds.
#[derive(Debug, Clone)]
pub struct PeriodDataSelector {
    year: Arc<DatasetBundle>,
    month: Arc<DatasetBundle>,
    quarter: Arc<DatasetBundle>,
    categories: Arc<DatasetBundle>,
}

impl PeriodDataSelector {
    pub fn new() -> Self {
        let year = timeline_bundle(
            &[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            &[12, 19, 15, 25, 22, 18, 28, 32, 24, 30, 26, 35],
            &[8, 12, 10, 18, 15, 12, 20, 22, 16, 24, 18, 28],
        );
        let month = timeline_bundle(
            &["Week 1", "Week 2", "Week 3", "Week 4"],
            &[8, 12, 10, 15],
            &[5, 8, 6, 12],
        );
        let quarter = timeline_bundle(
            &["Q1", "Q2", "Q3", "Q4"],
            &[46, 52, 48, 61],
            &[30, 35, 32, 40],
        );
        let categories = Arc::new(DatasetBundle::new(
            ["AI/ML", "Blockchain", "IoT", "Quantum", "Biotech", "Clean Energy"]
                .iter()
                .map(|l| l.to_string())
                .collect(),
            vec![SeriesData::new(
                None,
                vec![35, 25, 20, 15, 10, 5],
                SeriesStyle::slices(&CATEGORY_COLORS),
            )],
        ));

        Self {
            year,
            month,
            quarter,
            categories,
        }
    }

    pub fn categories(&self) -> Arc<DatasetBundle> {
        self.categories.clone()
    }

    pub fn chart_bundle(&self, period: ChartPeriod) -> Arc<DatasetBundle> {
        match period {
            ChartPeriod::Month => self.month.clone(),
            ChartPeriod::Quarter => self.quarter.clone(),
            ChartPeriod::Year => self.year.clone(),
        }
    }

    /// Lenient lookup: unrecognized tokens resolve to the default period,
    /// which is returned alongside its bundle.
    pub fn chart_bundle_or_default(&self, token: &str) -> (ChartPeriod, Arc<DatasetBundle>) {
        let period = token.parse().unwrap_or_else(|_| {
            tracing::warn!(
                token,
                fallback = %ChartPeriod::DEFAULT,
                "Unknown chart period, using default"
            );
            ChartPeriod::DEFAULT
        });
        (period, self.chart_bundle(period))
    }

    pub fn kpi_snapshot(&self, period: KpiPeriod) -> KpiSnapshot {
        match period {
            KpiPeriod::Week | KpiPeriod::Month => KpiSnapshot::new(247, 89, 158, 64),
            KpiPeriod::Quarter => KpiSnapshot::new(312, 124, 188, 60),
            KpiPeriod::Year => KpiSnapshot::new(1247, 389, 858, 69),
        }
    }

    pub fn kpi_snapshot_or_default(&self, token: &str) -> KpiSnapshot {
        let period = token.parse().unwrap_or_else(|_| {
            tracing::warn!(
                token,
                fallback = %KpiPeriod::DEFAULT,
                "Unknown KPI period, using default"
            );
            KpiPeriod::DEFAULT
        });
        self.kpi_snapshot(period)
    }
}

impl Default for PeriodDataSelector {
    fn default() -> Self {
        Self::new()
    }
}
