use serde::{Deserialize, Serialize};

use crate::constants::SECONDARY_OPACITY;

/// An RGB triple, one channel per byte
pub type Rgb = [u8; 3];

/// The selected palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Derived color tokens for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub primary_background: Rgb,
    pub secondary_background: Rgb,
}

const LIGHT: ThemeColors = ThemeColors {
    primary: [0, 0, 0],
    secondary: [50, 50, 50],
    primary_background: [255, 255, 255],
    secondary_background: [220, 220, 220],
};

const DARK: ThemeColors = ThemeColors {
    primary: [255, 255, 255],
    secondary: [220, 220, 220],
    primary_background: [0, 0, 0],
    secondary_background: [30, 30, 30],
};

impl Theme {
    /// Lookup-table colors for this theme
    pub fn colors(&self) -> ThemeColors {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted flag; anything other than exactly "light" is dark
    pub fn from_persisted(value: &str) -> Self {
        if value == "light" { Self::Light } else { Self::Dark }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Resolved colors for a block-container wrapper
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewColors {
    pub background: Rgb,
    /// None when an explicit background override was given
    pub foreground: Option<Rgb>,
    pub opacity: f32,
}

fn wrapper_opacity(is_primary: bool) -> f32 {
    if is_primary { 1.0 } else { SECONDARY_OPACITY }
}

/// Foreground color + opacity for a text-like wrapper.
/// Precedence: explicit override > invert-adjusted lookup > default lookup.
pub fn resolve_text_color(
    colors: &ThemeColors,
    is_primary: bool,
    invert_theme: bool,
    override_color: Option<Rgb>,
) -> (Rgb, f32) {
    let opacity = wrapper_opacity(is_primary);
    if let Some(color) = override_color {
        return (color, opacity);
    }
    let color = match (invert_theme, is_primary) {
        (true, true) => colors.primary_background,
        (true, false) => colors.secondary_background,
        (false, true) => colors.primary,
        (false, false) => colors.secondary,
    };
    (color, opacity)
}

/// Background + foreground for a block-container wrapper, same precedence.
/// An explicit background override leaves the foreground unresolved.
pub fn resolve_view_colors(
    colors: &ThemeColors,
    is_primary: bool,
    invert_theme: bool,
    override_background: Option<Rgb>,
) -> ViewColors {
    let opacity = wrapper_opacity(is_primary);
    if let Some(background) = override_background {
        return ViewColors {
            background,
            foreground: None,
            opacity,
        };
    }
    let (background, foreground) = match (invert_theme, is_primary) {
        (true, true) => (colors.primary, colors.primary_background),
        (true, false) => (colors.secondary, colors.secondary_background),
        (false, true) => (colors.primary_background, colors.primary),
        (false, false) => (colors.secondary_background, colors.secondary),
    };
    ViewColors {
        background,
        foreground: Some(foreground),
        opacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_lookup() {
        let light = Theme::Light.colors();
        assert_eq!(light.primary, [0, 0, 0]);
        assert_eq!(light.primary_background, [255, 255, 255]);

        let dark = Theme::Dark.colors();
        assert_eq!(dark.primary, [255, 255, 255]);
        assert_eq!(dark.primary_background, [0, 0, 0]);
        assert_eq!(dark.secondary_background, [30, 30, 30]);
    }

    #[test]
    fn test_persisted_fallback() {
        assert_eq!(Theme::from_persisted("light"), Theme::Light);
        assert_eq!(Theme::from_persisted("dark"), Theme::Dark);
        // Anything unrecognized means dark
        assert_eq!(Theme::from_persisted("LIGHT"), Theme::Dark);
        assert_eq!(Theme::from_persisted(""), Theme::Dark);
        assert_eq!(Theme::from_persisted("banana"), Theme::Dark);
    }

    #[test]
    fn test_text_precedence() {
        let colors = Theme::Dark.colors();

        // Explicit override wins regardless of invert/primary
        for invert in [false, true] {
            for primary in [false, true] {
                let (c, _) = resolve_text_color(&colors, primary, invert, Some([1, 2, 3]));
                assert_eq!(c, [1, 2, 3]);
            }
        }

        let (c, o) = resolve_text_color(&colors, true, false, None);
        assert_eq!(c, colors.primary);
        assert_eq!(o, 1.0);

        let (c, o) = resolve_text_color(&colors, false, true, None);
        assert_eq!(c, colors.secondary_background);
        assert_eq!(o, SECONDARY_OPACITY);
    }

    #[test]
    fn test_view_precedence() {
        let colors = Theme::Light.colors();

        let v = resolve_view_colors(&colors, true, false, Some([9, 9, 9]));
        assert_eq!(v.background, [9, 9, 9]);
        assert_eq!(v.foreground, None);

        let v = resolve_view_colors(&colors, true, false, None);
        assert_eq!(v.background, colors.primary_background);
        assert_eq!(v.foreground, Some(colors.primary));
        assert_eq!(v.opacity, 1.0);

        // Inverted: backgrounds and foregrounds swap roles
        let v = resolve_view_colors(&colors, false, true, None);
        assert_eq!(v.background, colors.secondary);
        assert_eq!(v.foreground, Some(colors.secondary_background));
        assert_eq!(v.opacity, SECONDARY_OPACITY);
    }
}
