use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{category_prefix_sums, category_segments, locate_marker_segment};
use crate::theme::{THEME_COLOR_RANGE, ThemeColor};

use super::{CategoryBarConfig, default_value_formatter};

const FULL_BAR_PERCENT: f64 = 100.0;
const TOTAL_TOLERANCE: f64 = 1e-9;

/// Which screens a label appears on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelVisibility {
    Always,
    WideOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategorySegmentLayout {
    pub index: usize,
    pub start_percent: f64,
    pub width_percent: f64,
    pub color: ThemeColor,
}

/// Cumulative total shown at the right edge of a segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLabelLayout {
    pub index: usize,
    pub text: String,
    pub anchor_percent: f64,
    pub visibility: LabelVisibility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryLabelsLayout {
    pub origin: String,
    pub cumulative: Vec<CategoryLabelLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMarkerLayout {
    pub left_percent: f64,
    /// Segment containing the marker, if the categories reach it.
    pub segment_index: Option<usize>,
    pub border_color: Option<ThemeColor>,
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBarLayout {
    pub segments: Vec<CategorySegmentLayout>,
    pub labels: Option<CategoryLabelsLayout>,
    pub marker: Option<CategoryMarkerLayout>,
}

impl CategoryBarLayout {
    #[must_use]
    pub fn total_percent(&self) -> f64 {
        self.segments.iter().map(|segment| segment.width_percent).sum()
    }
}

/// Color for the segment at `index`.
///
/// Short color lists cycle; an empty list falls back to the default range.
#[must_use]
pub fn segment_color(colors: &[ThemeColor], index: usize) -> ThemeColor {
    if colors.is_empty() {
        THEME_COLOR_RANGE[index % THEME_COLOR_RANGE.len()]
    } else {
        colors[index % colors.len()]
    }
}

/// Lays out segments, cumulative labels and the marker for `categories`.
pub fn build_category_bar_layout(
    categories: &[f64],
    config: &CategoryBarConfig,
) -> CategoryBarLayout {
    if !config.colors.is_empty() && config.colors.len() < categories.len() {
        warn!(
            colors = config.colors.len(),
            categories = categories.len(),
            "category colors are shorter than categories, cycling"
        );
    }

    let segments: Vec<CategorySegmentLayout> = category_segments(categories)
        .into_iter()
        .map(|segment| CategorySegmentLayout {
            index: segment.index,
            start_percent: segment.start_percent,
            width_percent: segment.width_percent,
            color: segment_color(&config.colors, segment.index),
        })
        .collect();

    let total = segments.last().map_or(0.0, |segment| {
        segment.start_percent + segment.width_percent
    });
    if total > FULL_BAR_PERCENT + TOTAL_TOLERANCE {
        warn!(total, "category bar total exceeds 100 percent");
    }

    let labels = config
        .show_labels
        .then(|| build_labels(categories, config.narrow_label_threshold_percent));

    let marker = config.percentage_value.map(|left_percent| {
        let segment_index = locate_marker_segment(categories, Some(left_percent));
        CategoryMarkerLayout {
            left_percent,
            segment_index,
            border_color: segment_index.map(|index| segment_color(&config.colors, index)),
            tooltip: config.tooltip.clone(),
        }
    });

    debug!(
        segments = segments.len(),
        labels = labels.is_some(),
        marker_segment = ?marker.as_ref().and_then(|marker| marker.segment_index),
        "built category bar layout"
    );

    CategoryBarLayout {
        segments,
        labels,
        marker,
    }
}

fn build_labels(categories: &[f64], narrow_threshold: f64) -> CategoryLabelsLayout {
    let cumulative = category_prefix_sums(categories)
        .into_iter()
        .zip(categories)
        .enumerate()
        .map(|(index, (prefix_sum, &width))| CategoryLabelLayout {
            index,
            text: default_value_formatter(prefix_sum),
            anchor_percent: prefix_sum,
            visibility: if index == 0 && width <= narrow_threshold {
                LabelVisibility::WideOnly
            } else {
                LabelVisibility::Always
            },
        })
        .collect();

    CategoryLabelsLayout {
        origin: default_value_formatter(0.0),
        cumulative,
    }
}
