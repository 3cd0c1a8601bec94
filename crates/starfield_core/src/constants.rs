/// Per-star probability of an opacity reset on a pointer-move event
pub const DISTURB_CHANCE: f32 = 0.02;

/// Upper bound (exclusive) for a star's initial oscillation speed
pub const MAX_STAR_SPEED: f32 = 1.5;

/// Opacity ceiling; opacity oscillates within [0, MAX_OPACITY]
pub const MAX_OPACITY: f32 = 100.0;

/// Quiet period before a resize rebuilds the star grid (milliseconds)
pub const RESIZE_DEBOUNCE_MS: u64 = 250;

/// Opacity applied by themed wrappers when not primary
pub const SECONDARY_OPACITY: f32 = 0.8;

/// File name of the persisted theme flag
pub const THEME_FILE: &str = "theme";
