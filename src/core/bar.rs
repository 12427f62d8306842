use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::theme::ThemeColor;

/// Browsing context a bar link opens in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinkTarget {
    #[default]
    Blank,
    SelfFrame,
    Parent,
    Top,
    Named(String),
}

impl LinkTarget {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Blank => "_blank",
            Self::SelfFrame => "_self",
            Self::Parent => "_parent",
            Self::Top => "_top",
            Self::Named(name) => name,
        }
    }
}

/// Hyperlink attached to a bar label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarLink {
    pub href: String,
    #[serde(default)]
    pub target: LinkTarget,
}

impl BarLink {
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            target: LinkTarget::default(),
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: LinkTarget) -> Self {
        self.target = target;
        self
    }

    /// Link relation emitted with every bar link.
    #[must_use]
    pub const fn rel(&self) -> &'static str {
        "noreferrer"
    }
}

/// Icon slot rendered in front of a bar label.
///
/// The icon itself is owned by the host; the component only reserves space
/// and forwards the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarIcon {
    pub name: String,
}

impl BarIcon {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One entry of a bar list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub value: f64,
    pub name: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub color: Option<ThemeColor>,
    #[serde(default)]
    pub icon: Option<BarIcon>,
    #[serde(default)]
    pub link: Option<BarLink>,
}

impl Bar {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            value,
            name: name.into(),
            key: None,
            color: None,
            icon: None,
            link: None,
        }
    }

    /// Builds a bar from an exact decimal amount.
    pub fn from_decimal(name: impl Into<String>, value: Decimal) -> ChartResult<Self> {
        let value = value.to_f64().ok_or_else(|| {
            ChartError::InvalidData("bar value cannot be represented as f64".to_owned())
        })?;
        Ok(Self::new(name, value))
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ThemeColor) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: BarIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn with_link(mut self, link: BarLink) -> Self {
        self.link = Some(link);
        self
    }

    /// Stable identity of the bar: its key, or its name when no key is set.
    #[must_use]
    pub fn identity(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.name)
    }
}
