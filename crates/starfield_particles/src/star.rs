use rand::Rng;
use starfield_core::{MAX_OPACITY, MAX_STAR_SPEED, Rgb};

use crate::surface::RasterSurface;

/// One animated grid cell of the starfield
#[derive(Debug, Clone)]
pub struct Star {
    /// Grid position, fixed after creation
    pub x: f32,
    pub y: f32,
    /// Side length of the painted square
    pub size: f32,
    opacity: f32,
    speed: f32,
    color: Rgb,
}

impl Star {
    /// Opacity starts at 0, speed is uniform in [0, MAX_STAR_SPEED), color white
    pub fn new(x: f32, y: f32, size: f32, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y,
            size,
            opacity: 0.0,
            speed: rng.gen_range(0.0..MAX_STAR_SPEED),
            color: [255, 255, 255],
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Overwrite the color triple, no validation
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.color = [r, g, b];
    }

    /// Clamp to [0, MAX_OPACITY] before storing
    pub fn set_opacity(&mut self, value: f32) {
        self.opacity = value.clamp(0.0, MAX_OPACITY);
    }

    /// Paint a filled square at the star's position with alpha opacity/100
    pub fn paint<S: RasterSurface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.x, self.y, self.size, self.color, self.opacity / MAX_OPACITY);
    }

    /// Step the opacity oscillation; bounce off both bounds
    pub fn advance(&mut self) {
        self.opacity += self.speed;

        if self.opacity < 0.0 || self.opacity > MAX_OPACITY {
            self.opacity = if self.opacity < 0.0 { 0.0 } else { MAX_OPACITY };
            self.speed = -self.speed;
        }
    }

    /// Euclidean distance from the star's position to an arbitrary point
    pub fn distance_from(&self, px: f32, py: f32) -> f32 {
        let dx = px - self.x;
        let dy = py - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_star_state() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for i in 0..100 {
            let star = Star::new(i as f32, 0.0, 2.0, &mut rng);
            assert_eq!(star.opacity(), 0.0);
            assert!(star.speed() >= 0.0 && star.speed() < MAX_STAR_SPEED);
            assert_eq!(star.color(), [255, 255, 255]);
        }
    }

    #[test]
    fn test_opacity_clamp_and_bounce() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut star = Star::new(0.0, 0.0, 2.0, &mut rng);

        // Long advance sequence never leaves [0, 100]
        for _ in 0..10_000 {
            star.advance();
            assert!(star.opacity() >= 0.0 && star.opacity() <= MAX_OPACITY);
        }
    }

    #[test]
    fn test_bounce_flips_speed_sign() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut star = Star::new(0.0, 0.0, 2.0, &mut rng);
        if star.speed() == 0.0 {
            return;
        }

        // Ceiling: overshoot snaps to the bound and reverses direction
        star.set_opacity(MAX_OPACITY);
        star.advance();
        assert_eq!(star.opacity(), MAX_OPACITY);
        assert!(star.speed() < 0.0);

        // Floor: same on the way back down
        star.set_opacity(0.0);
        star.advance();
        assert_eq!(star.opacity(), 0.0);
        assert!(star.speed() > 0.0);
    }

    #[test]
    fn test_set_opacity_clamps() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut star = Star::new(0.0, 0.0, 2.0, &mut rng);

        star.set_opacity(150.0);
        assert_eq!(star.opacity(), 100.0);
        star.set_opacity(-5.0);
        assert_eq!(star.opacity(), 0.0);
        star.set_opacity(42.5);
        assert_eq!(star.opacity(), 42.5);
    }

    #[test]
    fn test_distance() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let star = Star::new(0.0, 0.0, 2.0, &mut rng);
        assert!((star.distance_from(3.0, 4.0) - 5.0).abs() < 1e-6);
        // Symmetric under coordinate negation
        assert!((star.distance_from(-3.0, -4.0) - 5.0).abs() < 1e-6);
        assert_eq!(star.distance_from(0.0, 0.0), 0.0);
    }
}
