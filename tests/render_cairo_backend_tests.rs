#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use chart_bars::ChartError;
use chart_bars::api::{BarListChart, BarListConfig, CategoryBarChart, CategoryBarConfig};
use chart_bars::core::{Bar, Viewport};
use chart_bars::render::{CairoContextRenderer, CairoRenderer, NullRenderer};

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_skips_collapsed_bars() {
    let renderer = CairoRenderer::new(600, 200).expect("renderer");
    let config = BarListConfig::new(Viewport::new(600, 200));
    let mut chart = BarListChart::new(renderer, config).expect("chart init");
    chart.set_data(vec![
        Bar::new("Search", 120.0),
        Bar::new("Direct", 45.0),
        Bar::new("Social", 0.0),
    ]);

    chart.render().expect("render");
    let stats = chart.into_renderer().last_stats();

    assert_eq!(stats.rects_drawn, 2);
    assert_eq!(stats.rects_skipped, 1);
    assert_eq!(stats.texts_drawn, 6);
}

#[test]
fn cairo_renderer_can_draw_category_bar_on_external_context() {
    let mut renderer = CairoRenderer::new(400, 60).expect("renderer");
    let config = CategoryBarConfig::new(Viewport::new(400, 60)).with_percentage_value(Some(70.0));
    let mut chart = CategoryBarChart::new(NullRenderer::default(), config).expect("chart init");
    chart
        .set_categories(vec![40.0, 30.0, 30.0])
        .expect("categories");
    let frame = chart.build_render_frame().expect("frame");

    let surface = ImageSurface::create(Format::ARgb32, 400, 60).expect("surface");
    let context = Context::new(&surface).expect("context");
    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("render on context");

    let stats = renderer.last_stats();
    assert_eq!(stats.rects_drawn, 4);
    assert_eq!(stats.texts_drawn, 4);
}

#[test]
fn cairo_renderer_writes_png() {
    let renderer = CairoRenderer::new(300, 120).expect("renderer");
    let mut chart =
        BarListChart::new(renderer, BarListConfig::new(Viewport::new(300, 120))).expect("chart");
    chart.set_data(vec![Bar::new("Only", 1.0)]);
    chart.render().expect("render");

    let path = std::env::temp_dir().join("chart_bars_cairo_backend_test.png");
    chart.renderer().write_png(&path).expect("write png");
    let bytes = std::fs::read(&path).expect("read png");
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    let _ = std::fs::remove_file(path);
}
