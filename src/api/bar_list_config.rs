use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::theme::ThemeColor;

use super::validation::{validate_size_px, validate_spacing_px, validate_viewport};

/// Where a bar's label is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPosition {
    /// Inside the bar, with values in a right-hand column.
    #[default]
    Default,
    /// On its own line above the bar, with the value beside the bar.
    Top,
}

/// Pixel metrics for bar list frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarListMetrics {
    pub row_height_px: f64,
    pub row_gap_px: f64,
    pub value_column_gap_px: f64,
    pub label_inset_px: f64,
    pub icon_size_px: f64,
    pub icon_gap_px: f64,
    pub font_size_px: f64,
    pub label_char_width_px: f64,
    pub top_label_height_px: f64,
    pub corner_radius_px: f64,
}

impl Default for BarListMetrics {
    fn default() -> Self {
        Self {
            row_height_px: 36.0,
            row_gap_px: 8.0,
            value_column_gap_px: 24.0,
            label_inset_px: 8.0,
            icon_size_px: 20.0,
            icon_gap_px: 10.0,
            font_size_px: 14.0,
            label_char_width_px: 7.0,
            top_label_height_px: 20.0,
            corner_radius_px: 4.0,
        }
    }
}

impl BarListMetrics {
    pub fn validate(self) -> ChartResult<Self> {
        validate_size_px(self.row_height_px, "row_height_px")?;
        validate_size_px(self.font_size_px, "font_size_px")?;
        validate_size_px(self.label_char_width_px, "label_char_width_px")?;
        for (value, name) in [
            (self.row_gap_px, "row_gap_px"),
            (self.value_column_gap_px, "value_column_gap_px"),
            (self.label_inset_px, "label_inset_px"),
            (self.icon_size_px, "icon_size_px"),
            (self.icon_gap_px, "icon_gap_px"),
            (self.top_label_height_px, "top_label_height_px"),
            (self.corner_radius_px, "corner_radius_px"),
        ] {
            validate_spacing_px(value, name)?;
        }
        Ok(self)
    }
}

/// Bar list setup.
///
/// Serializable so hosts can persist component setup next to their data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarListConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub color: Option<ThemeColor>,
    #[serde(default)]
    pub show_animation: bool,
    #[serde(default)]
    pub label_position: LabelPosition,
    #[serde(default)]
    pub metrics: BarListMetrics,
}

impl BarListConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            color: None,
            show_animation: false,
            label_position: LabelPosition::Default,
            metrics: BarListMetrics::default(),
        }
    }

    /// Sets the color used by bars without their own color.
    #[must_use]
    pub fn with_color(mut self, color: ThemeColor) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_show_animation(mut self, show_animation: bool) -> Self {
        self.show_animation = show_animation;
        self
    }

    #[must_use]
    pub fn with_label_position(mut self, label_position: LabelPosition) -> Self {
        self.label_position = label_position;
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: BarListMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        validate_viewport(self.viewport)?;
        self.metrics.validate()?;
        Ok(self)
    }
}
