// Chart dataset and KPI snapshot domain models
use crate::domain::metric::{KpiId, MetricValue};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesStyle {
    pub border_color: Option<String>,
    pub background_colors: Vec<String>,
    pub border_width: u32,
    pub fill: bool,
    pub tension: f64,
}

impl SeriesStyle {
    /// Filled, smoothed line in one colour.
    pub fn line(border_color: &str, background_color: &str) -> Self {
        Self {
            border_color: Some(border_color.to_string()),
            background_colors: vec![background_color.to_string()],
            border_width: 3,
            fill: true,
            tension: 0.4,
        }
    }

    /// One background colour per slice, no borders.
    pub fn slices(colors: &[&str]) -> Self {
        Self {
            border_color: None,
            background_colors: colors.iter().map(|c| c.to_string()).collect(),
            border_width: 0,
            fill: false,
            tension: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub label: Option<String>,
    pub data: Vec<u32>,
    pub style: SeriesStyle,
}

impl SeriesData {
    pub fn new(label: Option<String>, data: Vec<u32>, style: SeriesStyle) -> Self {
        Self { label, data, style }
    }

    pub fn total(&self) -> u64 {
        self.data.iter().map(|&v| u64::from(v)).sum()
    }
}

/// One chart's labels and series for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetBundle {
    pub labels: Vec<String>,
    pub series: Vec<SeriesData>,
}

impl DatasetBundle {
    pub fn new(labels: Vec<String>, series: Vec<SeriesData>) -> Self {
        Self { labels, series }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KpiSnapshot {
    pub total: u64,
    pub pending: u64,
    pub granted: u64,
    pub success_rate: u64,
}

impl KpiSnapshot {
    pub const fn new(total: u64, pending: u64, granted: u64, success_rate: u64) -> Self {
        Self {
            total,
            pending,
            granted,
            success_rate,
        }
    }

    pub fn value(&self, kpi: KpiId) -> MetricValue {
        let magnitude = match kpi {
            KpiId::TotalPatents => self.total,
            KpiId::PendingApplications => self.pending,
            KpiId::GrantedPatents => self.granted,
            KpiId::SuccessRate => self.success_rate,
        };
        MetricValue::new(magnitude, kpi.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_values_carry_format() {
        let snapshot = KpiSnapshot::new(1247, 389, 858, 69);
        assert_eq!(snapshot.value(KpiId::TotalPatents).render(), "1,247");
        assert_eq!(snapshot.value(KpiId::SuccessRate).render(), "69%");
    }
}
