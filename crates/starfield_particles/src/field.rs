use rand::Rng;
use starfield_core::{DISTURB_CHANCE, StarfieldConfig};

use crate::star::Star;
use crate::surface::RasterSurface;

/// The StarField owns the grid of stars covering the drawing surface and
/// animates them once per frame. The grid is discarded and rebuilt wholesale
/// on every (debounced) resize; there is no incremental update.
#[derive(Debug)]
pub struct StarField {
    config: StarfieldConfig,
    width: f32,
    height: f32,
    rows: u32,
    cols: u32,
    stars: Vec<Star>,
}

impl StarField {
    /// Placeholder with no stars (used before the first window measurement)
    pub fn empty(config: StarfieldConfig) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            rows: 0,
            cols: 0,
            stars: Vec::new(),
        }
    }

    /// Recompute the grid for a new surface size and recreate every star.
    /// `rows = round(height / gap_y) + 1`, `cols = round(width / gap_x) + 1`;
    /// stars sit at exact gap multiples and carry the configured color.
    pub fn rebuild(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        self.width = width;
        self.height = height;
        self.rows = (height / self.config.gap_y).round() as u32 + 1;
        self.cols = (width / self.config.gap_x).round() as u32 + 1;

        let [r, g, b] = self.config.star_color;
        self.stars.clear();
        self.stars.reserve((self.rows * self.cols) as usize);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let mut star = Star::new(
                    self.config.gap_x * col as f32,
                    self.config.gap_y * row as f32,
                    self.config.star_size,
                    rng,
                );
                star.set_color(r, g, b);
                self.stars.push(star);
            }
        }
    }

    /// Draw one frame: clear, then paint and advance each star, in that
    /// order. The painted frame shows opacity before this tick's update, so
    /// the very first frame after a rebuild is fully transparent (fade-in).
    pub fn render_frame<S: RasterSurface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        for star in &mut self.stars {
            star.paint(surface);
            star.advance();
        }
    }

    /// Pointer disturbance: every star within `mouse_radius` of (x, y) has an
    /// independent `DISTURB_CHANCE` of an opacity reset. Stochastic per star,
    /// not nearest-neighbor.
    pub fn disturb(&mut self, x: f32, y: f32, rng: &mut impl Rng) {
        for star in &mut self.stars {
            if star.distance_from(x, y) < self.config.mouse_radius
                && rng.gen_range(0.0..1.0f32) < DISTURB_CHANCE
            {
                star.set_opacity(0.0);
            }
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Surface size the grid was last built for
    pub fn surface_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }
}
