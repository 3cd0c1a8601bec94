use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow, WindowResized};

use crate::state::{DisturbRng, FieldState, ResizeDebounce};

/// Bevy plugin for the starfield simulation: initial grid build, pointer
/// disturbance, and debounced resize rebuilds
pub struct StarfieldSimPlugin;

impl Plugin for StarfieldSimPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_field).add_systems(
            Update,
            (pointer_disturb, watch_resize, apply_resize.after(watch_resize)),
        );
    }
}

/// Build the star grid from the primary window size
fn init_field(
    mut state: ResMut<FieldState>,
    mut rng: ResMut<DisturbRng>,
    window: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = window.get_single() else {
        return;
    };
    state.field.rebuild(window.width(), window.height(), &mut rng.0);
    info!(
        "Built star field {}x{} ({} stars)",
        state.field.cols(),
        state.field.rows(),
        state.field.stars().len()
    );
}

/// Cursor movement perturbs nearby stars with independent per-star chance
fn pointer_disturb(
    mut events: EventReader<CursorMoved>,
    mut state: ResMut<FieldState>,
    mut rng: ResMut<DisturbRng>,
) {
    for event in events.read() {
        state.field.disturb(event.position.x, event.position.y, &mut rng.0);
    }
}

/// Each resize event restarts the quiet period instead of rebuilding directly
fn watch_resize(
    mut events: EventReader<WindowResized>,
    mut resize: ResMut<ResizeDebounce>,
    time: Res<Time>,
) {
    for _ in events.read() {
        resize.debounce.trigger(time.elapsed());
    }
}

/// Once the quiet period has elapsed, rebuild the grid for the new size
fn apply_resize(
    mut resize: ResMut<ResizeDebounce>,
    time: Res<Time>,
    mut state: ResMut<FieldState>,
    mut rng: ResMut<DisturbRng>,
    window: Query<&Window, With<PrimaryWindow>>,
) {
    if !resize.debounce.poll(time.elapsed()) {
        return;
    }
    let Ok(window) = window.get_single() else {
        return;
    };
    state.field.rebuild(window.width(), window.height(), &mut rng.0);
    info!(
        "Rebuilt star field after resize: {}x{} ({} stars)",
        state.field.cols(),
        state.field.rows(),
        state.field.stars().len()
    );
}
