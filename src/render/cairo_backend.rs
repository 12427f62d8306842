use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;
use std::path::Path;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub rects_skipped: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into an external Cairo context, such as a widget
/// draw callback or a PDF surface.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango renderer backend for bar components.
///
/// `Renderer::render` draws offscreen into an owned image surface that can be
/// exported with `write_png`. `CairoContextRenderer` draws in place on a
/// caller-owned context.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            font_family: "Sans".to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) -> ChartResult<()> {
        let family = family.into();
        if family.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "font family must not be empty".to_owned(),
            ));
        }
        self.font_family = family;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let mut file = File::create(path.as_ref())
            .map_err(|err| ChartError::Backend(format!("failed to create png file: {err}")))?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Backend(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for rect in &frame.rects {
            if rect.width <= 0.0 || rect.height <= 0.0 {
                stats.rects_skipped += 1;
                continue;
            }
            draw_rect(context, rect)?;
            stats.rects_drawn += 1;
        }

        for text in &frame.texts {
            self.draw_text(context, text);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }

    fn draw_text(&self, context: &Context, text: &TextPrimitive) {
        let layout = pangocairo::functions::create_layout(context);
        let font_description =
            FontDescription::from_string(&format!("{} {}px", self.font_family, text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };
        // Text primitives anchor on their vertical center.
        let y = text.y - f64::from(text_height) / 2.0;

        apply_color(context, text.color);
        context.move_to(x, y);
        pangocairo::functions::show_layout(context, &layout);
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn draw_rect(context: &Context, rect: &RectPrimitive) -> ChartResult<()> {
    append_rect_path(context, rect);
    apply_color(context, rect.fill_color);
    if rect.border_width <= 0.0 {
        return context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err));
    }

    context
        .fill_preserve()
        .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
    apply_color(context, rect.border_color);
    context.set_line_width(rect.border_width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
}

fn append_rect_path(context: &Context, rect: &RectPrimitive) {
    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    if radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
