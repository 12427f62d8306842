use std::sync::Arc;

use tracing::debug;

use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};
use crate::theme::PaletteTheme;

use super::validation::{validate_categories, validate_percentage_value};
use super::{CategoryBarConfig, CategoryBarLayout, ThemeHandle, build_category_bar_layout};

/// Category bar component: owns its props, a theme and a rendering backend.
pub struct CategoryBarChart<R: Renderer> {
    renderer: R,
    config: CategoryBarConfig,
    theme: ThemeHandle,
    categories: Vec<f64>,
    wide_screen: bool,
}

impl<R: Renderer> CategoryBarChart<R> {
    pub fn new(renderer: R, config: CategoryBarConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            theme: Arc::new(PaletteTheme::default()),
            categories: Vec::new(),
            wide_screen: true,
        })
    }

    #[must_use]
    pub fn config(&self) -> &CategoryBarConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CategoryBarConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn categories(&self) -> &[f64] {
        &self.categories
    }

    /// Replaces the category percentages.
    ///
    /// Entries must be finite and non-negative; their sum is not checked.
    pub fn set_categories(&mut self, categories: Vec<f64>) -> ChartResult<()> {
        validate_categories(&categories)?;
        debug!(count = categories.len(), "set category bar categories");
        self.categories = categories;
        Ok(())
    }

    /// Moves the marker, or removes it with `None`.
    pub fn set_percentage_value(&mut self, percentage_value: Option<f64>) -> ChartResult<()> {
        self.config.percentage_value = validate_percentage_value(percentage_value)?;
        Ok(())
    }

    pub fn set_theme(&mut self, theme: ThemeHandle) {
        self.theme = theme;
    }

    /// Selects whether labels reserved for wide screens are drawn.
    pub fn set_wide_screen(&mut self, wide_screen: bool) {
        self.wide_screen = wide_screen;
    }

    #[must_use]
    pub fn layout(&self) -> CategoryBarLayout {
        build_category_bar_layout(&self.categories, &self.config)
    }

    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        self.layout()
            .to_render_frame(&self.config, self.theme.as_ref(), self.wide_screen)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
