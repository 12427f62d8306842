use chart_bars::api::{
    BAR_LIST_LAYOUT_JSON_SCHEMA_V1, BarListConfig, BarListLayout, BarListMetrics,
    CategoryBarConfig, CategoryBarLayout, CategoryBarMetrics, LabelPosition,
    build_bar_list_layout, build_category_bar_layout, default_value_formatter,
};
use chart_bars::core::{Bar, BarLink, Viewport};
use chart_bars::theme::ThemeColor;

fn bar_list_layout() -> BarListLayout {
    let config = BarListConfig::new(Viewport::new(400, 300)).with_color(ThemeColor::Teal);
    let bars = vec![
        Bar::new("Docs", 30.0).with_link(BarLink::new("https://example.com/docs")),
        Bar::new("Blog", 12.0).with_key("blog"),
    ];
    build_bar_list_layout(&bars, &config, &default_value_formatter)
}

#[test]
fn bar_list_layout_round_trips_through_v1_envelope() {
    let layout = bar_list_layout();
    let json = layout.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));
    assert!(json.contains("\"teal\""));

    let parsed = BarListLayout::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, layout);
}

#[test]
fn bar_list_layout_accepts_bare_payload() {
    let layout = bar_list_layout();
    let bare = serde_json::to_string(&layout).expect("bare json");
    let parsed = BarListLayout::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed, layout);
}

#[test]
fn bar_list_layout_rejects_unknown_schema_version() {
    let layout = bar_list_layout();
    let json = layout
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace(
            &format!("\"schema_version\": {BAR_LIST_LAYOUT_JSON_SCHEMA_V1}"),
            "\"schema_version\": 99",
        );
    let err = BarListLayout::from_json_compat_str(&json).expect_err("v99 must fail");
    assert!(format!("{err}").contains("unsupported bar list schema version: 99"));
}

#[test]
fn category_bar_layout_round_trips_through_v1_envelope() {
    let config = CategoryBarConfig::new(Viewport::new(400, 60))
        .with_percentage_value(Some(42.0))
        .with_tooltip("target");
    let layout = build_category_bar_layout(&[20.0, 30.0, 50.0], &config);
    let json = layout.to_json_contract_v1_pretty().expect("serialize");

    let parsed = CategoryBarLayout::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, layout);
    assert_eq!(parsed.marker.and_then(|m| m.segment_index), Some(1));
}

#[test]
fn category_bar_layout_rejects_garbage() {
    let err = CategoryBarLayout::from_json_compat_str("{\"nope\": true}")
        .expect_err("garbage must fail");
    assert!(format!("{err}").contains("failed to parse category bar json payload"));
}

#[test]
fn bar_list_config_round_trips_and_validates() {
    let config = BarListConfig::new(Viewport::new(640, 480))
        .with_label_position(LabelPosition::Top)
        .with_show_animation(true);
    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"top\""));
    assert_eq!(BarListConfig::from_json_str(&json).expect("parse"), config);

    let err = BarListConfig::from_json_str(r#"{"viewport":{"width":0,"height":10}}"#)
        .expect_err("zero viewport must fail");
    assert!(format!("{err}").contains("invalid viewport"));
}

#[test]
fn bar_list_layout_round_trips_non_finite_values() {
    let config = BarListConfig::new(Viewport::new(400, 300));
    let bars = vec![
        Bar::new("a", 10.0),
        Bar::new("b", f64::NAN),
        Bar::new("c", f64::INFINITY),
        Bar::new("d", f64::NEG_INFINITY),
    ];
    let layout = build_bar_list_layout(&bars, &config, &default_value_formatter);
    let json = layout.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"NaN\""));
    assert!(json.contains("\"Infinity\""));
    assert!(!json.contains("null"));

    let parsed = BarListLayout::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed.rows.len(), 4);
    assert_eq!(parsed.rows[0].value, 10.0);
    assert!(parsed.rows[1].value.is_nan());
    assert_eq!(parsed.rows[2].value, f64::INFINITY);
    assert_eq!(parsed.rows[3].value, f64::NEG_INFINITY);
    assert_eq!(parsed.widths(), layout.widths());
    assert_eq!(parsed.widths(), vec![100.0, 0.0, 0.0, 0.0]);
}

#[test]
fn bar_list_layout_rejects_unknown_value_label() {
    let layout = build_bar_list_layout(
        &[Bar::new("a", 1.0)],
        &BarListConfig::new(Viewport::new(400, 300)),
        &default_value_formatter,
    );
    let json = layout
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"value\": 1.0", "\"value\": \"lots\"");
    assert!(json.contains("\"lots\""));
    assert!(BarListLayout::from_json_compat_str(&json).is_err());
}

#[test]
fn configs_accept_partial_metrics() {
    let config = BarListConfig::from_json_str(
        r#"{"viewport":{"width":400,"height":300},"metrics":{"row_height_px":40.0}}"#,
    )
    .expect("partial bar list metrics");
    assert_eq!(config.metrics.row_height_px, 40.0);
    assert_eq!(config.metrics.row_gap_px, BarListMetrics::default().row_gap_px);

    let config = CategoryBarConfig::from_json_str(
        r#"{"viewport":{"width":400,"height":60},"metrics":{"bar_height_px":12.0}}"#,
    )
    .expect("partial category bar metrics");
    assert_eq!(config.metrics.bar_height_px, 12.0);
    assert_eq!(
        config.metrics.segment_gap_px,
        CategoryBarMetrics::default().segment_gap_px
    );
}
