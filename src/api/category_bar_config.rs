use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::theme::{THEME_COLOR_RANGE, ThemeColor};

use super::validation::{
    validate_percentage_value, validate_size_px, validate_spacing_px, validate_viewport,
};

/// Pixel metrics for category bar frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryBarMetrics {
    pub margin_top_px: f64,
    pub bar_height_px: f64,
    pub segment_gap_px: f64,
    pub label_font_size_px: f64,
    pub label_row_height_px: f64,
    pub label_gap_px: f64,
    pub marker_size_px: f64,
    pub marker_border_px: f64,
}

impl Default for CategoryBarMetrics {
    fn default() -> Self {
        Self {
            margin_top_px: 0.0,
            bar_height_px: 8.0,
            segment_gap_px: 4.0,
            label_font_size_px: 14.0,
            label_row_height_px: 20.0,
            label_gap_px: 8.0,
            marker_size_px: 16.0,
            marker_border_px: 4.0,
        }
    }
}

impl CategoryBarMetrics {
    pub fn validate(self) -> ChartResult<Self> {
        validate_size_px(self.bar_height_px, "bar_height_px")?;
        validate_size_px(self.label_font_size_px, "label_font_size_px")?;
        validate_size_px(self.marker_size_px, "marker_size_px")?;
        for (value, name) in [
            (self.margin_top_px, "margin_top_px"),
            (self.segment_gap_px, "segment_gap_px"),
            (self.label_row_height_px, "label_row_height_px"),
            (self.label_gap_px, "label_gap_px"),
            (self.marker_border_px, "marker_border_px"),
        ] {
            validate_spacing_px(value, name)?;
        }
        Ok(self)
    }
}

fn default_colors() -> Vec<ThemeColor> {
    THEME_COLOR_RANGE.to_vec()
}

fn default_show_labels() -> bool {
    true
}

fn default_narrow_label_threshold_percent() -> f64 {
    10.0
}

/// Category bar setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBarConfig {
    pub viewport: Viewport,
    #[serde(default = "default_colors")]
    pub colors: Vec<ThemeColor>,
    #[serde(default)]
    pub percentage_value: Option<f64>,
    #[serde(default = "default_show_labels")]
    pub show_labels: bool,
    #[serde(default)]
    pub tooltip: Option<String>,
    /// A leading label at or below this width is only shown on wide screens.
    #[serde(default = "default_narrow_label_threshold_percent")]
    pub narrow_label_threshold_percent: f64,
    #[serde(default)]
    pub metrics: CategoryBarMetrics,
}

impl CategoryBarConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            colors: default_colors(),
            percentage_value: None,
            show_labels: default_show_labels(),
            tooltip: None,
            narrow_label_threshold_percent: default_narrow_label_threshold_percent(),
            metrics: CategoryBarMetrics::default(),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<ThemeColor>) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_percentage_value(mut self, percentage_value: Option<f64>) -> Self {
        self.percentage_value = percentage_value;
        self
    }

    #[must_use]
    pub fn with_show_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    #[must_use]
    pub fn with_narrow_label_threshold_percent(mut self, threshold: f64) -> Self {
        self.narrow_label_threshold_percent = threshold;
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: CategoryBarMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_viewport(self.viewport)?;
        validate_percentage_value(self.percentage_value)?;
        validate_spacing_px(
            self.narrow_label_threshold_percent,
            "narrow_label_threshold_percent",
        )?;
        self.metrics.validate()?;
        Ok(())
    }
}
