use serde::{Deserialize, Serialize};

/// Starfield configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarfieldConfig {
    /// Horizontal spacing between grid cells (pixels)
    pub gap_x: f32,
    /// Vertical spacing between grid cells (pixels)
    pub gap_y: f32,
    /// Pointer disturbance radius (pixels)
    pub mouse_radius: f32,
    /// Side length of each star square (pixels)
    pub star_size: f32,
    /// Star color as an RGB triple
    pub star_color: [u8; 3],
    /// Random seed for the disturbance RNG
    pub seed: u64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            gap_x: 20.0,
            gap_y: 20.0,
            mouse_radius: 100.0,
            star_size: 2.0,
            star_color: [50, 250, 200],
            seed: 42,
        }
    }
}
