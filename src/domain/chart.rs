// Chart binding and rendering options
use crate::domain::dataset::DatasetBundle;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontSpec {
    pub family: String,
    pub size: u32,
    pub weight: u32,
}

impl FontSpec {
    fn inter(size: u32) -> Self {
        Self {
            family: "Inter".to_string(),
            size,
            weight: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendOptions {
    pub position: LegendPosition,
    pub use_point_style: bool,
    pub padding: u32,
    pub font: FontSpec,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipStyle {
    pub background_color: String,
    pub title_color: String,
    pub body_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub corner_radius: u32,
    pub padding: u32,
    pub display_colors: bool,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            background_color: "rgba(255, 255, 255, 0.95)".to_string(),
            title_color: "#2d3748".to_string(),
            body_color: "#4a5568".to_string(),
            border_color: "#e2e8f0".to_string(),
            border_width: 1,
            corner_radius: 12,
            padding: 16,
            display_colors: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisOptions {
    pub begin_at_zero: bool,
    pub grid_color: Option<String>,
    pub draw_border: bool,
    pub tick_font: FontSpec,
    pub tick_color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    Index,
}

/// Hover behaviour: which points a tooltip picks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InteractionOptions {
    pub intersect: bool,
    pub mode: InteractionMode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointStyle {
    pub radius: u32,
    pub hover_radius: u32,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}

/// Recognized chart options; purely decorative for the dashboard core.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub legend: LegendOptions,
    pub tooltip: TooltipStyle,
    pub x_axis: Option<AxisOptions>,
    pub y_axis: Option<AxisOptions>,
    pub interaction: Option<InteractionOptions>,
    pub point: Option<PointStyle>,
    pub cutout_percent: Option<u8>,
}

impl ChartOptions {
    pub fn timeline() -> Self {
        let axis = |grid_color: Option<&str>, begin_at_zero: bool| AxisOptions {
            begin_at_zero,
            grid_color: grid_color.map(str::to_string),
            draw_border: false,
            tick_font: FontSpec::inter(11),
            tick_color: "#718096".to_string(),
        };

        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            legend: LegendOptions {
                position: LegendPosition::Top,
                use_point_style: true,
                padding: 20,
                font: FontSpec::inter(12),
                color: None,
            },
            tooltip: TooltipStyle::default(),
            x_axis: Some(axis(None, false)),
            y_axis: Some(axis(Some("rgba(226, 232, 240, 0.5)"), true)),
            interaction: Some(InteractionOptions {
                intersect: false,
                mode: InteractionMode::Index,
            }),
            point: Some(PointStyle {
                radius: 6,
                hover_radius: 8,
                background_color: "#667eea".to_string(),
                border_color: "#ffffff".to_string(),
                border_width: 3,
            }),
            cutout_percent: None,
        }
    }

    pub fn categories() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            legend: LegendOptions {
                position: LegendPosition::Bottom,
                use_point_style: true,
                padding: 20,
                font: FontSpec::inter(12),
                color: Some("#4a5568".to_string()),
            },
            tooltip: TooltipStyle {
                display_colors: false,
                ..TooltipStyle::default()
            },
            x_axis: None,
            y_axis: None,
            interaction: None,
            point: None,
            cutout_percent: Some(60),
        }
    }
}

/// A chart instance with its currently bound data.
#[derive(Debug, Clone, Serialize)]
pub struct BoundChart {
    pub id: String,
    pub kind: ChartKind,
    pub options: ChartOptions,
    pub data: Arc<DatasetBundle>,
    pub revision: u64,
}

impl BoundChart {
    pub fn new(id: &str, kind: ChartKind, options: ChartOptions, data: Arc<DatasetBundle>) -> Self {
        Self {
            id: id.to_string(),
            kind,
            options,
            data,
            revision: 0,
        }
    }

    pub fn replace_data(&mut self, data: Arc<DatasetBundle>) {
        self.data = data;
    }

    /// Redraw against the bound data; returns the new revision.
    pub fn update(&mut self) -> u64 {
        self.revision += 1;
        tracing::debug!(chart = %self.id, revision = self.revision, "Chart redrawn");
        self.revision
    }

    /// Slice tooltip text for doughnut charts: "AI/ML: 35 (31.8%)".
    pub fn slice_label(&self, index: usize) -> Option<String> {
        let series = self.data.series.first()?;
        let value = *series.data.get(index)?;
        let label = self.data.labels.get(index).map(String::as_str).unwrap_or("");
        let total = series.total();
        let share = if total == 0 {
            0.0
        } else {
            f64::from(value) / total as f64 * 100.0
        };
        Some(format!("{}: {} ({:.1}%)", label, value, share))
    }

    /// Tooltip text for every slice; empty for line charts.
    pub fn slice_labels(&self) -> Vec<String> {
        if self.kind != ChartKind::Doughnut {
            return Vec::new();
        }
        (0..self.data.labels.len())
            .filter_map(|index| self.slice_label(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::{SeriesData, SeriesStyle};

    fn categories() -> Arc<DatasetBundle> {
        Arc::new(DatasetBundle::new(
            vec!["AI/ML".into(), "Blockchain".into(), "".into()],
            vec![SeriesData::new(None, vec![35, 25, 0], SeriesStyle::slices(&["#000"]))],
        ))
    }

    fn doughnut() -> BoundChart {
        BoundChart::new("categories", ChartKind::Doughnut, ChartOptions::categories(), categories())
    }

    #[test]
    fn test_slice_label() {
        let chart = doughnut();
        assert_eq!(chart.slice_label(0).as_deref(), Some("AI/ML: 35 (58.3%)"));
        assert_eq!(chart.slice_label(2).as_deref(), Some(": 0 (0.0%)"));
        assert_eq!(chart.slice_label(3), None);
    }

    #[test]
    fn test_slice_labels_only_for_doughnuts() {
        assert_eq!(
            doughnut().slice_labels(),
            vec!["AI/ML: 35 (58.3%)", "Blockchain: 25 (41.7%)", ": 0 (0.0%)"]
        );
        let line =
            BoundChart::new("timeline", ChartKind::Line, ChartOptions::timeline(), categories());
        assert!(line.slice_labels().is_empty());
    }

    #[test]
    fn test_update_bumps_revision() {
        let mut chart = doughnut();
        assert_eq!(chart.update(), 1);
        assert_eq!(chart.update(), 2);
    }

    #[test]
    fn test_option_presets() {
        assert_eq!(ChartOptions::timeline().legend.position, LegendPosition::Top);
        assert_eq!(ChartOptions::categories().legend.position, LegendPosition::Bottom);
        assert_eq!(ChartOptions::categories().cutout_percent, Some(60));
        assert!(ChartOptions::timeline().y_axis.unwrap().begin_at_zero);
        assert_eq!(
            ChartOptions::timeline().interaction,
            Some(InteractionOptions {
                intersect: false,
                mode: InteractionMode::Index
            })
        );
        assert_eq!(ChartOptions::categories().interaction, None);
    }
}
