use smallvec::SmallVec;
use tracing::trace;

use crate::error::ChartResult;
use crate::render::{Color, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};
use crate::theme::Theme;

use super::{BarFill, BarListConfig, BarListLayout, BarListMetrics, BarRowLayout, LabelPosition};

/// Opacity applied to bar fills so labels stay readable on top of them.
pub const BAR_FILL_OPACITY: f64 = 0.3;

impl BarListLayout {
    /// Total height the rows occupy, without a trailing gap.
    #[must_use]
    pub fn content_height_px(&self, metrics: &BarListMetrics) -> f64 {
        let count = self.rows.len() as f64;
        if count == 0.0 {
            return 0.0;
        }
        let block_height = row_block_height(self.label_position, metrics);
        count * block_height + (count - 1.0) * metrics.row_gap_px
    }

    /// Width reserved on the right for formatted values.
    #[must_use]
    pub fn value_column_width_px(&self, metrics: &BarListMetrics) -> f64 {
        self.rows
            .iter()
            .map(|row| text_width_px(&row.value_text, metrics))
            .fold(0.0, f64::max)
    }

    /// Projects the layout into pixel space.
    pub fn to_render_frame(
        &self,
        config: &BarListConfig,
        theme: &dyn Theme,
    ) -> ChartResult<RenderFrame> {
        let config = config.validate()?;
        let metrics = &config.metrics;
        let viewport_width = config.viewport.width_px();
        let value_column_width = self.value_column_width_px(metrics);
        let track_width = if value_column_width > 0.0 {
            (viewport_width - value_column_width - metrics.value_column_gap_px).max(0.0)
        } else {
            viewport_width
        };

        let block_height = row_block_height(self.label_position, metrics);
        let mut frame = RenderFrame::new(config.viewport);
        for row in &self.rows {
            let top = row.index as f64 * (block_height + metrics.row_gap_px);
            let bar_top = match self.label_position {
                LabelPosition::Default => top,
                LabelPosition::Top => top + metrics.top_label_height_px,
            };
            let bar_center = bar_top + 0.5 * metrics.row_height_px;

            frame.rects.push(
                RectPrimitive::new(
                    0.0,
                    bar_top,
                    track_width * row.width_percent / 100.0,
                    metrics.row_height_px,
                    bar_fill_color(row.fill, theme),
                )
                .with_corner_radius(metrics.corner_radius_px),
            );

            let (label_x, label_center) = match self.label_position {
                LabelPosition::Default => (metrics.label_inset_px, bar_center),
                LabelPosition::Top => (0.0, top + 0.5 * metrics.top_label_height_px),
            };
            let mut texts = row_texts(row, label_x, label_center, metrics, theme);
            if row.icon.is_some() && metrics.icon_size_px > 0.0 {
                frame.rects.push(RectPrimitive::new(
                    label_x,
                    label_center - 0.5 * metrics.icon_size_px,
                    metrics.icon_size_px,
                    metrics.icon_size_px,
                    theme.content(),
                ));
            }
            if !row.value_text.is_empty() {
                texts.push(TextPrimitive::new(
                    row.value_text.clone(),
                    viewport_width,
                    bar_center,
                    metrics.font_size_px,
                    theme.content_emphasis(),
                    TextHAlign::Right,
                ));
            }
            frame.texts.extend(texts);
        }

        trace!(
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            track_width,
            "built bar list render frame"
        );
        frame.validate()?;
        Ok(frame)
    }
}

/// Resolves a bar fill against the theme.
#[must_use]
pub fn bar_fill_color(fill: BarFill, theme: &dyn Theme) -> Color {
    let base = match fill {
        BarFill::Palette(name) => theme.background(name),
        BarFill::BrandSubtle => theme.brand_subtle(),
    };
    base.with_alpha(base.alpha * BAR_FILL_OPACITY)
}

fn row_texts(
    row: &BarRowLayout,
    label_x: f64,
    label_center: f64,
    metrics: &BarListMetrics,
    theme: &dyn Theme,
) -> SmallVec<[TextPrimitive; 2]> {
    let mut texts = SmallVec::new();
    if row.name.is_empty() {
        return texts;
    }
    let text_x = if row.icon.is_some() {
        label_x + metrics.icon_size_px + metrics.icon_gap_px
    } else {
        label_x
    };
    texts.push(TextPrimitive::new(
        row.name.clone(),
        text_x,
        label_center,
        metrics.font_size_px,
        theme.content_emphasis(),
        TextHAlign::Left,
    ));
    texts
}

fn row_block_height(label_position: LabelPosition, metrics: &BarListMetrics) -> f64 {
    match label_position {
        LabelPosition::Default => metrics.row_height_px,
        LabelPosition::Top => metrics.top_label_height_px + metrics.row_height_px,
    }
}

fn text_width_px(text: &str, metrics: &BarListMetrics) -> f64 {
    text.chars().count() as f64 * metrics.label_char_width_px
}
