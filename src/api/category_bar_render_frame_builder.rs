use tracing::trace;

use crate::error::ChartResult;
use crate::render::{RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};
use crate::theme::Theme;

use super::{CategoryBarConfig, CategoryBarLayout, CategoryBarMetrics, LabelVisibility};

impl CategoryBarLayout {
    /// Height of the label band plus the bar band.
    #[must_use]
    pub fn content_height_px(&self, metrics: &CategoryBarMetrics) -> f64 {
        bar_top_px(self, metrics) + metrics.bar_height_px.max(marker_extent_px(self, metrics))
    }

    /// Projects the layout into pixel space.
    ///
    /// `include_narrow_labels` selects the wide-screen variant; when false,
    /// `LabelVisibility::WideOnly` labels are dropped.
    pub fn to_render_frame(
        &self,
        config: &CategoryBarConfig,
        theme: &dyn Theme,
        include_narrow_labels: bool,
    ) -> ChartResult<RenderFrame> {
        config.validate()?;
        let metrics = &config.metrics;
        let width = config.viewport.width_px();
        let to_px = |percent: f64| percent / 100.0 * width;
        let mut frame = RenderFrame::new(config.viewport);

        if let Some(labels) = &self.labels {
            let label_center = metrics.margin_top_px + 0.5 * metrics.label_row_height_px;
            frame.texts.push(TextPrimitive::new(
                labels.origin.clone(),
                0.0,
                label_center,
                metrics.label_font_size_px,
                theme.content(),
                TextHAlign::Left,
            ));
            frame.texts.extend(
                labels
                    .cumulative
                    .iter()
                    .filter(|label| {
                        include_narrow_labels || label.visibility == LabelVisibility::Always
                    })
                    .map(|label| {
                        TextPrimitive::new(
                            label.text.clone(),
                            to_px(label.anchor_percent),
                            label_center,
                            metrics.label_font_size_px,
                            theme.content(),
                            TextHAlign::Right,
                        )
                    }),
            );
        }

        let bar_top = bar_top_px(self, metrics);
        let last_index = self.segments.len().saturating_sub(1);
        for segment in &self.segments {
            let gap = if segment.index == last_index {
                0.0
            } else {
                metrics.segment_gap_px
            };
            frame.rects.push(
                RectPrimitive::new(
                    to_px(segment.start_percent),
                    bar_top,
                    (to_px(segment.width_percent) - gap).max(0.0),
                    metrics.bar_height_px,
                    theme.background(segment.color),
                )
                .with_corner_radius(0.5 * metrics.bar_height_px),
            );
        }

        if let Some(marker) = &self.marker {
            let size = metrics.marker_size_px;
            let border_color = marker
                .border_color
                .map_or_else(|| theme.neutral_border(), |color| theme.background(color));
            frame.rects.push(
                RectPrimitive::new(
                    to_px(marker.left_percent) - 0.5 * size,
                    bar_top + 0.5 * metrics.bar_height_px - 0.5 * size,
                    size,
                    size,
                    theme.marker_fill(),
                )
                .with_border(metrics.marker_border_px, border_color)
                .with_corner_radius(0.5 * size),
            );
        }

        trace!(
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            include_narrow_labels,
            "built category bar render frame"
        );
        frame.validate()?;
        Ok(frame)
    }
}

fn bar_top_px(layout: &CategoryBarLayout, metrics: &CategoryBarMetrics) -> f64 {
    if layout.labels.is_some() {
        metrics.margin_top_px + metrics.label_row_height_px + metrics.label_gap_px
    } else {
        metrics.margin_top_px
    }
}

fn marker_extent_px(layout: &CategoryBarLayout, metrics: &CategoryBarMetrics) -> f64 {
    if layout.marker.is_some() {
        0.5 * (metrics.bar_height_px + metrics.marker_size_px)
    } else {
        0.0
    }
}
