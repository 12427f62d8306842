use std::sync::Arc;

use tracing::debug;

use crate::core::Bar;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};
use crate::theme::{PaletteTheme, Theme};

use super::{
    BarListConfig, BarListLayout, ValueFormatterFn, build_bar_list_layout, default_value_formatter,
};

/// Shared theme handle used by components.
pub type ThemeHandle = Arc<dyn Theme + Send + Sync + 'static>;

/// Bar list component: owns its props, a theme and a rendering backend.
pub struct BarListChart<R: Renderer> {
    renderer: R,
    config: BarListConfig,
    theme: ThemeHandle,
    value_formatter: Option<ValueFormatterFn>,
    data: Vec<Bar>,
}

impl<R: Renderer> BarListChart<R> {
    pub fn new(renderer: R, config: BarListConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            config,
            theme: Arc::new(PaletteTheme::default()),
            value_formatter: None,
            data: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &BarListConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BarListConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn data(&self) -> &[Bar] {
        &self.data
    }

    /// Replaces the bars shown by the list.
    pub fn set_data(&mut self, data: Vec<Bar>) {
        debug!(count = data.len(), "set bar list data");
        self.data = data;
    }

    pub fn set_theme(&mut self, theme: ThemeHandle) {
        self.theme = theme;
    }

    /// Sets a custom formatter for the value column.
    pub fn set_value_formatter(&mut self, formatter: ValueFormatterFn) {
        self.value_formatter = Some(formatter);
    }

    /// Restores the default value formatter.
    pub fn clear_value_formatter(&mut self) {
        self.value_formatter = None;
    }

    #[must_use]
    pub fn layout(&self) -> BarListLayout {
        match &self.value_formatter {
            Some(formatter) => build_bar_list_layout(&self.data, &self.config, formatter.as_ref()),
            None => build_bar_list_layout(&self.data, &self.config, &default_value_formatter),
        }
    }

    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        self.layout()
            .to_render_frame(&self.config, self.theme.as_ref())
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
