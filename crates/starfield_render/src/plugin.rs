use bevy::prelude::*;

use super::gate;
use super::surface;
use super::ui;

/// Main render plugin: canvas setup, per-frame painting, themed wrappers,
/// and the visibility gate observer
pub struct StarfieldRenderPlugin;

impl Plugin for StarfieldRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, surface::setup_canvas).add_systems(
            Update,
            (
                surface::paint_field,
                ui::apply_theme_text,
                ui::apply_theme_view,
                gate::observe_visibility,
            ),
        );
    }
}
