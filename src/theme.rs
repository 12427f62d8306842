//! Named palette colors and the theme seam.
//!
//! Components never hardcode concrete colors. They carry `ThemeColor` names
//! and ask a `Theme` to resolve them when a render frame is built, so host
//! applications can plug in their own palette.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Palette color names understood by every theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl ThemeColor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slate => "slate",
            Self::Gray => "gray",
            Self::Zinc => "zinc",
            Self::Neutral => "neutral",
            Self::Stone => "stone",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Amber => "amber",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Green => "green",
            Self::Emerald => "emerald",
            Self::Teal => "teal",
            Self::Cyan => "cyan",
            Self::Sky => "sky",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::Purple => "purple",
            Self::Fuchsia => "fuchsia",
            Self::Pink => "pink",
            Self::Rose => "rose",
        }
    }
}

/// Default color rotation for multi-segment components.
pub const THEME_COLOR_RANGE: [ThemeColor; 22] = [
    ThemeColor::Cyan,
    ThemeColor::Sky,
    ThemeColor::Blue,
    ThemeColor::Indigo,
    ThemeColor::Violet,
    ThemeColor::Purple,
    ThemeColor::Fuchsia,
    ThemeColor::Slate,
    ThemeColor::Gray,
    ThemeColor::Zinc,
    ThemeColor::Neutral,
    ThemeColor::Stone,
    ThemeColor::Red,
    ThemeColor::Orange,
    ThemeColor::Amber,
    ThemeColor::Yellow,
    ThemeColor::Lime,
    ThemeColor::Green,
    ThemeColor::Emerald,
    ThemeColor::Teal,
    ThemeColor::Pink,
    ThemeColor::Rose,
];

/// Resolves palette names and semantic roles into concrete colors.
pub trait Theme {
    fn background(&self, color: ThemeColor) -> Color;
    fn brand_subtle(&self) -> Color;
    fn content(&self) -> Color;
    fn content_emphasis(&self) -> Color;
    fn marker_fill(&self) -> Color;
    fn neutral_border(&self) -> Color;
}

/// Table-driven theme.
///
/// `backgrounds` keeps insertion order so serialized palettes stay stable.
/// Names missing from the table resolve to `neutral_border`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteTheme {
    pub backgrounds: IndexMap<ThemeColor, Color>,
    pub brand_subtle: Color,
    pub content: Color,
    pub content_emphasis: Color,
    pub marker_fill: Color,
    pub neutral_border: Color,
}

impl PaletteTheme {
    /// Light palette using the 500 shade of each color.
    #[must_use]
    pub fn light() -> Self {
        let backgrounds = [
            (ThemeColor::Slate, Color::from_rgb8(0x64, 0x74, 0x8b)),
            (ThemeColor::Gray, Color::from_rgb8(0x6b, 0x72, 0x80)),
            (ThemeColor::Zinc, Color::from_rgb8(0x71, 0x71, 0x7a)),
            (ThemeColor::Neutral, Color::from_rgb8(0x73, 0x73, 0x73)),
            (ThemeColor::Stone, Color::from_rgb8(0x78, 0x71, 0x6c)),
            (ThemeColor::Red, Color::from_rgb8(0xef, 0x44, 0x44)),
            (ThemeColor::Orange, Color::from_rgb8(0xf9, 0x73, 0x16)),
            (ThemeColor::Amber, Color::from_rgb8(0xf5, 0x9e, 0x0b)),
            (ThemeColor::Yellow, Color::from_rgb8(0xea, 0xb3, 0x08)),
            (ThemeColor::Lime, Color::from_rgb8(0x84, 0xcc, 0x16)),
            (ThemeColor::Green, Color::from_rgb8(0x22, 0xc5, 0x5e)),
            (ThemeColor::Emerald, Color::from_rgb8(0x10, 0xb9, 0x81)),
            (ThemeColor::Teal, Color::from_rgb8(0x14, 0xb8, 0xa6)),
            (ThemeColor::Cyan, Color::from_rgb8(0x06, 0xb6, 0xd4)),
            (ThemeColor::Sky, Color::from_rgb8(0x0e, 0xa5, 0xe9)),
            (ThemeColor::Blue, Color::from_rgb8(0x3b, 0x82, 0xf6)),
            (ThemeColor::Indigo, Color::from_rgb8(0x63, 0x66, 0xf1)),
            (ThemeColor::Violet, Color::from_rgb8(0x8b, 0x5c, 0xf6)),
            (ThemeColor::Purple, Color::from_rgb8(0xa8, 0x55, 0xf7)),
            (ThemeColor::Fuchsia, Color::from_rgb8(0xd9, 0x46, 0xef)),
            (ThemeColor::Pink, Color::from_rgb8(0xec, 0x48, 0x99)),
            (ThemeColor::Rose, Color::from_rgb8(0xf4, 0x3f, 0x5e)),
        ]
        .into_iter()
        .collect();

        Self {
            backgrounds,
            brand_subtle: Color::from_rgb8(0x60, 0xa5, 0xfa),
            content: Color::from_rgb8(0x6b, 0x72, 0x80),
            content_emphasis: Color::from_rgb8(0x37, 0x41, 0x51),
            marker_fill: Color::rgb(1.0, 1.0, 1.0),
            neutral_border: Color::from_rgb8(0xd1, 0xd5, 0xdb),
        }
    }

    #[must_use]
    pub fn with_background(mut self, name: ThemeColor, color: Color) -> Self {
        self.backgrounds.insert(name, color);
        self
    }
}

impl Default for PaletteTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme for PaletteTheme {
    fn background(&self, color: ThemeColor) -> Color {
        self.backgrounds
            .get(&color)
            .copied()
            .unwrap_or(self.neutral_border)
    }

    fn brand_subtle(&self) -> Color {
        self.brand_subtle
    }

    fn content(&self) -> Color {
        self.content
    }

    fn content_emphasis(&self) -> Color {
        self.content_emphasis
    }

    fn marker_fill(&self) -> Color {
        self.marker_fill
    }

    fn neutral_border(&self) -> Color {
        self.neutral_border
    }
}

#[cfg(test)]
mod tests {
    use super::{PaletteTheme, THEME_COLOR_RANGE, Theme, ThemeColor};

    #[test]
    fn light_palette_covers_every_range_color() {
        let theme = PaletteTheme::light();
        for name in THEME_COLOR_RANGE {
            assert!(theme.backgrounds.contains_key(&name), "{}", name.as_str());
        }
    }

    #[test]
    fn missing_palette_entry_falls_back_to_neutral_border() {
        let mut theme = PaletteTheme::light();
        theme.backgrounds.shift_remove(&ThemeColor::Rose);
        assert_eq!(theme.background(ThemeColor::Rose), theme.neutral_border());
    }
}
