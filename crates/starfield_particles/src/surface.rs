use starfield_core::Rgb;

/// Paint target for one frame of the starfield.
/// The renderer implements this over a raster pixel buffer; tests implement
/// it with a recorder. Coordinates are in surface pixels, origin top-left.
pub trait RasterSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Erase the whole surface to fully transparent
    fn clear(&mut self);

    /// Fill a `size`×`size` square at (x, y) with `color` at `alpha` in [0, 1]
    fn fill_rect(&mut self, x: f32, y: f32, size: f32, color: Rgb, alpha: f32);
}
