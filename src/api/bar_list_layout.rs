use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Bar, BarIcon, BarLink, widths_from_values};
use crate::theme::ThemeColor;

use super::{BarListConfig, LabelPosition};

/// Transition length applied to width changes when animation is on.
pub const BAR_TRANSITION_DURATION_MS: u32 = 1_000;

/// How a bar's width change is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarTransition {
    None,
    Ease { duration_ms: u32 },
}

/// Fill source for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarFill {
    Palette(ThemeColor),
    BrandSubtle,
}

/// Percent-space layout of one bar list row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRowLayout {
    pub index: usize,
    /// Unique per row, even when names repeat.
    pub row_key: String,
    /// The bar's key, or its name when it has none.
    pub identity: String,
    pub name: String,
    /// Non-finite values are written as `"NaN"`, `"Infinity"` or `"-Infinity"`.
    #[serde(with = "raw_value_json")]
    pub value: f64,
    pub value_text: String,
    pub width_percent: f64,
    pub fill: BarFill,
    pub icon: Option<BarIcon>,
    pub link: Option<BarLink>,
    pub is_last: bool,
    pub transition: BarTransition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarListLayout {
    pub label_position: LabelPosition,
    pub rows: Vec<BarRowLayout>,
}

impl BarListLayout {
    /// First row whose identity matches.
    #[must_use]
    pub fn row_by_identity(&self, identity: &str) -> Option<&BarRowLayout> {
        self.rows.iter().find(|row| row.identity == identity)
    }

    #[must_use]
    pub fn widths(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.width_percent).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Resolves bar data into row layouts.
///
/// Widths come from `widths_from_values`; the fill falls back from the bar's
/// own color to the list color to the brand color.
pub fn build_bar_list_layout(
    bars: &[Bar],
    config: &BarListConfig,
    formatter: &dyn Fn(f64) -> String,
) -> BarListLayout {
    let values: Vec<f64> = bars.iter().map(|bar| bar.value).collect();
    let widths = widths_from_values(&values);
    let transition = if config.show_animation {
        BarTransition::Ease {
            duration_ms: BAR_TRANSITION_DURATION_MS,
        }
    } else {
        BarTransition::None
    };

    let last_index = bars.len().saturating_sub(1);
    let rows: Vec<BarRowLayout> = bars
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(index, (bar, width_percent))| BarRowLayout {
            index,
            row_key: format!("{}-{index}", bar.name),
            identity: bar.identity().to_owned(),
            name: bar.name.clone(),
            value: bar.value,
            value_text: formatter(bar.value),
            width_percent,
            fill: resolve_fill(bar, config),
            icon: bar.icon.clone(),
            link: bar.link.clone(),
            is_last: index == last_index,
            transition,
        })
        .collect();

    debug!(
        rows = rows.len(),
        label_position = ?config.label_position,
        "built bar list layout"
    );

    BarListLayout {
        label_position: config.label_position,
        rows,
    }
}

fn resolve_fill(bar: &Bar, config: &BarListConfig) -> BarFill {
    bar.color
        .or(config.color)
        .map_or(BarFill::BrandSubtle, BarFill::Palette)
}

mod raw_value_json {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValue {
        Number(f64),
        Label(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_sign_positive() {
            serializer.serialize_str("Infinity")
        } else {
            serializer.serialize_str("-Infinity")
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match RawValue::deserialize(deserializer)? {
            RawValue::Number(value) => Ok(value),
            RawValue::Label(label) => match label.as_str() {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                other => Err(serde::de::Error::custom(format!(
                    "unsupported bar value label: {other}"
                ))),
            },
        }
    }
}
