use bevy::prelude::*;
use starfield_core::{Rgb, resolve_text_color, resolve_view_colors};

use crate::theme::ThemeStore;

/// Text-like themed wrapper: resolves its foreground from the theme store.
/// An explicit `color` always wins over the computed lookup.
#[derive(Component, Debug, Clone)]
pub struct ThemeText {
    pub is_primary: bool,
    pub invert_theme: bool,
    pub color: Option<Rgb>,
}

impl Default for ThemeText {
    fn default() -> Self {
        Self {
            is_primary: true,
            invert_theme: false,
            color: None,
        }
    }
}

/// Block-container themed wrapper: resolves background (and a matching
/// foreground for child text) from the theme store
#[derive(Component, Debug, Clone)]
pub struct ThemeView {
    pub is_primary: bool,
    pub invert_theme: bool,
    pub background_color: Option<Rgb>,
}

impl Default for ThemeView {
    fn default() -> Self {
        Self {
            is_primary: true,
            invert_theme: false,
            background_color: None,
        }
    }
}

/// Convert a palette RGB triple to a bevy color with the given alpha
pub fn rgb_color(rgb: Rgb, alpha: f32) -> Color {
    Color::srgba(
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
        alpha,
    )
}

pub fn apply_theme_text(store: Res<ThemeStore>, mut query: Query<(&ThemeText, &mut TextColor)>) {
    let colors = store.colors();
    for (wrapper, mut text_color) in &mut query {
        let (rgb, opacity) =
            resolve_text_color(&colors, wrapper.is_primary, wrapper.invert_theme, wrapper.color);
        *text_color = TextColor(rgb_color(rgb, opacity));
    }
}

/// Applies the resolved background, and propagates the resolved foreground to
/// child text that does not carry its own `ThemeText` (the context-color
/// inheritance of the original wrappers)
pub fn apply_theme_view(
    store: Res<ThemeStore>,
    mut query: Query<(&ThemeView, &mut BackgroundColor, Option<&Children>)>,
    mut child_text: Query<&mut TextColor, Without<ThemeText>>,
) {
    let colors = store.colors();
    for (wrapper, mut background, children) in &mut query {
        let view = resolve_view_colors(
            &colors,
            wrapper.is_primary,
            wrapper.invert_theme,
            wrapper.background_color,
        );
        *background = BackgroundColor(rgb_color(view.background, view.opacity));

        let (Some(foreground), Some(children)) = (view.foreground, children) else {
            continue;
        };
        for child in children {
            if let Ok(mut text_color) = child_text.get_mut(*child) {
                *text_color = TextColor(rgb_color(foreground, view.opacity));
            }
        }
    }
}
