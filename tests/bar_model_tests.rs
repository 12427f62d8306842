use chart_bars::ChartError;
use chart_bars::core::{Bar, BarIcon, BarLink, LinkTarget};
use chart_bars::theme::ThemeColor;
use rust_decimal::Decimal;

#[test]
fn identity_prefers_key_over_name() {
    let plain = Bar::new("Docs", 120.0);
    let keyed = Bar::new("Docs", 120.0).with_key("docs-page");
    assert_eq!(plain.identity(), "Docs");
    assert_eq!(keyed.identity(), "docs-page");
}

#[test]
fn optional_capabilities_start_absent() {
    let bar = Bar::new("Blog", 3.0);
    assert!(bar.key.is_none());
    assert!(bar.color.is_none());
    assert!(bar.icon.is_none());
    assert!(bar.link.is_none());
}

#[test]
fn builders_attach_optional_capabilities() {
    let bar = Bar::new("GitHub", 88.0)
        .with_color(ThemeColor::Emerald)
        .with_icon(BarIcon::new("github"))
        .with_link(BarLink::new("https://github.com").with_target(LinkTarget::SelfFrame));

    assert_eq!(bar.color, Some(ThemeColor::Emerald));
    assert_eq!(bar.icon.as_ref().map(|icon| icon.name.as_str()), Some("github"));
    let link = bar.link.expect("link");
    assert_eq!(link.href, "https://github.com");
    assert_eq!(link.target.as_str(), "_self");
    assert_eq!(link.rel(), "noreferrer");
}

#[test]
fn links_open_in_a_new_context_by_default() {
    let link = BarLink::new("https://example.com");
    assert_eq!(link.target, LinkTarget::Blank);
    assert_eq!(link.target.as_str(), "_blank");
    assert_eq!(LinkTarget::Named("preview".to_owned()).as_str(), "preview");
}

#[test]
fn decimal_values_convert_to_f64() {
    let bar = Bar::from_decimal("Revenue", Decimal::new(12_345, 2)).expect("decimal bar");
    assert!((bar.value - 123.45).abs() <= 1e-9);
}

#[test]
fn bar_deserializes_with_missing_optional_fields() {
    let bar: Bar = serde_json::from_str(r#"{"value": 4.0, "name": "Twitter", "color": "sky"}"#)
        .expect("parse bar");
    assert_eq!(bar.color, Some(ThemeColor::Sky));
    assert!(bar.key.is_none());
    assert!(bar.link.is_none());
}

#[test]
fn invalid_data_error_mentions_field() {
    let err = ChartError::InvalidData("bar value cannot be represented as f64".to_owned());
    assert!(format!("{err}").contains("bar value"));
}
