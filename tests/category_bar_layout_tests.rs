use chart_bars::api::{
    CategoryBarChart, CategoryBarConfig, LabelVisibility, build_category_bar_layout,
};
use chart_bars::core::Viewport;
use chart_bars::render::NullRenderer;
use chart_bars::theme::{THEME_COLOR_RANGE, ThemeColor};

fn config() -> CategoryBarConfig {
    CategoryBarConfig::new(Viewport::new(500, 60))
}

#[test]
fn segments_are_contiguous_and_colored_in_order() {
    let layout = build_category_bar_layout(&[10.0, 20.0, 30.0, 40.0], &config());

    assert_eq!(layout.segments.len(), 4);
    let starts: Vec<f64> = layout.segments.iter().map(|s| s.start_percent).collect();
    assert_eq!(starts, vec![0.0, 10.0, 30.0, 60.0]);
    let colors: Vec<ThemeColor> = layout.segments.iter().map(|s| s.color).collect();
    assert_eq!(colors, THEME_COLOR_RANGE[..4].to_vec());
    assert_eq!(layout.total_percent(), 100.0);
}

#[test]
fn labels_show_running_totals_and_hide_a_narrow_leader() {
    let layout = build_category_bar_layout(&[10.0, 20.0, 30.0, 40.0], &config());
    let labels = layout.labels.expect("labels shown by default");

    assert_eq!(labels.origin, "0");
    let texts: Vec<&str> = labels.cumulative.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["10", "30", "60", "100"]);
    assert_eq!(labels.cumulative[0].visibility, LabelVisibility::WideOnly);
    assert!(labels.cumulative[1..]
        .iter()
        .all(|label| label.visibility == LabelVisibility::Always));
}

#[test]
fn wide_leading_segment_label_is_always_visible() {
    let layout = build_category_bar_layout(&[25.0, 75.0], &config());
    let labels = layout.labels.expect("labels");
    assert_eq!(labels.cumulative[0].visibility, LabelVisibility::Always);
}

#[test]
fn labels_can_be_disabled() {
    let layout =
        build_category_bar_layout(&[50.0, 50.0], &config().with_show_labels(false));
    assert!(layout.labels.is_none());
}

#[test]
fn marker_borrows_color_of_the_segment_holding_it() {
    let config = config()
        .with_percentage_value(Some(25.0))
        .with_tooltip("25% of quota");
    let layout = build_category_bar_layout(&[10.0, 20.0, 30.0, 40.0], &config);
    let marker = layout.marker.expect("marker");

    assert_eq!(marker.left_percent, 25.0);
    assert_eq!(marker.segment_index, Some(1));
    assert_eq!(marker.border_color, Some(THEME_COLOR_RANGE[1]));
    assert_eq!(marker.tooltip.as_deref(), Some("25% of quota"));
}

#[test]
fn marker_past_the_total_has_no_border_color() {
    let config = config().with_percentage_value(Some(150.0));
    let layout = build_category_bar_layout(&[10.0, 20.0, 30.0, 40.0], &config);
    let marker = layout.marker.expect("marker");

    assert_eq!(marker.segment_index, None);
    assert_eq!(marker.border_color, None);
    assert!(marker.tooltip.is_none());
}

#[test]
fn no_percentage_value_means_no_marker() {
    let layout = build_category_bar_layout(&[10.0, 90.0], &config());
    assert!(layout.marker.is_none());
}

#[test]
fn custom_colors_cycle_when_short() {
    let config = config().with_colors(vec![ThemeColor::Emerald, ThemeColor::Rose]);
    let layout = build_category_bar_layout(&[20.0, 20.0, 20.0, 40.0], &config);
    let colors: Vec<ThemeColor> = layout.segments.iter().map(|s| s.color).collect();
    assert_eq!(
        colors,
        vec![
            ThemeColor::Emerald,
            ThemeColor::Rose,
            ThemeColor::Emerald,
            ThemeColor::Rose
        ]
    );
}

#[test]
fn chart_validates_categories_and_marker() {
    let mut chart =
        CategoryBarChart::new(NullRenderer::default(), config()).expect("chart init");

    let err = chart
        .set_categories(vec![30.0, f64::NAN])
        .expect_err("nan category must fail");
    assert!(format!("{err}").contains("category 1"));

    let err = chart
        .set_percentage_value(Some(f64::INFINITY))
        .expect_err("infinite marker must fail");
    assert!(format!("{err}").contains("percentage value"));

    chart.set_categories(vec![30.0, 70.0]).expect("categories");
    chart.set_percentage_value(Some(80.0)).expect("marker");
    let marker = chart.layout().marker.expect("marker");
    assert_eq!(marker.segment_index, Some(1));

    chart.set_percentage_value(None).expect("clear marker");
    assert!(chart.layout().marker.is_none());
}

#[test]
fn config_json_defaults_match_builder_defaults() {
    let parsed = CategoryBarConfig::from_json_str(r#"{"viewport":{"width":500,"height":60}}"#)
        .expect("parse config");
    assert_eq!(parsed, config());
}
