use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use starfield_core::{RESIZE_DEBOUNCE_MS, StarfieldConfig};
use starfield_particles::StarField;

use crate::debounce::Debounce;

/// The star grid as a bevy resource; exclusively owns its stars
#[derive(Resource)]
pub struct FieldState {
    pub field: StarField,
}

impl FieldState {
    /// Placeholder until the first window measurement builds the grid
    pub fn empty(config: StarfieldConfig) -> Self {
        Self {
            field: StarField::empty(config),
        }
    }
}

/// Seeded RNG driving the stochastic pointer disturbance
#[derive(Resource)]
pub struct DisturbRng(pub ChaCha8Rng);

impl DisturbRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Coalesces resize bursts into a single grid rebuild
#[derive(Resource)]
pub struct ResizeDebounce {
    pub debounce: Debounce,
}

impl Default for ResizeDebounce {
    fn default() -> Self {
        Self {
            debounce: Debounce::from_millis(RESIZE_DEBOUNCE_MS),
        }
    }
}
