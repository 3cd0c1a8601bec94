use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::window::PrimaryWindow;
use starfield_core::Rgb;
use starfield_particles::RasterSurface;
use starfield_sim::FieldState;

/// Handle of the RGBA8 canvas image the starfield is painted into
#[derive(Resource)]
pub struct CanvasHandle(pub Handle<Image>);

/// One frame's borrow of the canvas pixel buffer
pub struct CanvasSurface<'a> {
    width: u32,
    height: u32,
    pixels: &'a mut [[u8; 4]],
}

impl<'a> CanvasSurface<'a> {
    pub fn new(width: u32, height: u32, data: &'a mut [u8]) -> Self {
        Self {
            width,
            height,
            pixels: bytemuck::cast_slice_mut(data),
        }
    }
}

impl RasterSurface for CanvasSurface<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.pixels.fill([0, 0, 0, 0]);
    }

    fn fill_rect(&mut self, x: f32, y: f32, size: f32, color: Rgb, alpha: f32) {
        let x0 = x.round().max(0.0) as u32;
        let y0 = y.round().max(0.0) as u32;
        let x1 = ((x + size).round().max(0.0) as u32).min(self.width);
        let y1 = ((y + size).round().max(0.0) as u32).min(self.height);

        let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
        let pixel = [color[0], color[1], color[2], a];
        for py in y0..y1 {
            let row = (py * self.width) as usize;
            for px in x0..x1 {
                self.pixels[row + px as usize] = pixel;
            }
        }
    }
}

fn make_canvas_image(width: u32, height: u32) -> Image {
    Image::new_fill(
        Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[0, 0, 0, 0],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    )
}

/// Create the canvas sized to the window and the camera + sprite showing it
pub fn setup_canvas(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    window: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = window.get_single() else {
        return;
    };
    let handle = images.add(make_canvas_image(
        window.width() as u32,
        window.height() as u32,
    ));

    commands.spawn(Camera2d);
    commands.spawn(Sprite::from_image(handle.clone()));
    commands.insert_resource(CanvasHandle(handle));
}

/// Per-frame redraw: clear-then-paint the whole field into the canvas.
/// If the canvas image is unavailable the frame is silently skipped; after a
/// debounced rebuild the image is recreated at the field's new size.
pub fn paint_field(
    mut state: ResMut<FieldState>,
    canvas: Option<Res<CanvasHandle>>,
    mut images: ResMut<Assets<Image>>,
) {
    if state.field.stars().is_empty() {
        return;
    }
    let Some(canvas) = canvas else {
        return;
    };
    let Some(image) = images.get_mut(&canvas.0) else {
        return;
    };

    let (field_w, field_h) = state.field.surface_size();
    let (width, height) = (field_w as u32, field_h as u32);
    if image.width() != width || image.height() != height {
        *image = make_canvas_image(width, height);
    }

    let mut surface = CanvasSurface::new(image.width(), image.height(), &mut image.data);
    state.field.render_frame(&mut surface);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_writes_pixels() {
        let mut data = vec![0u8; 10 * 10 * 4];
        let mut surface = CanvasSurface::new(10, 10, &mut data);

        surface.fill_rect(2.0, 3.0, 2.0, [50, 250, 200], 0.5);
        let pixels: &[[u8; 4]] = bytemuck::cast_slice(&data);
        assert_eq!(pixels[3 * 10 + 2], [50, 250, 200, 127]);
        assert_eq!(pixels[4 * 10 + 3], [50, 250, 200, 127]);
        // Outside the square stays untouched
        assert_eq!(pixels[3 * 10 + 4], [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill_rect_clips_to_bounds() {
        let mut data = vec![0u8; 4 * 4 * 4];
        let mut surface = CanvasSurface::new(4, 4, &mut data);

        // Partially and fully out of bounds must not panic
        surface.fill_rect(3.0, 3.0, 2.0, [255, 255, 255], 1.0);
        surface.fill_rect(-5.0, -5.0, 2.0, [255, 255, 255], 1.0);
        surface.fill_rect(100.0, 100.0, 2.0, [255, 255, 255], 1.0);

        let pixels: &[[u8; 4]] = bytemuck::cast_slice(&data);
        assert_eq!(pixels[3 * 4 + 3], [255, 255, 255, 255]);
        assert_eq!(pixels[0], [0, 0, 0, 0]);
    }

    #[test]
    fn test_clear_erases_everything() {
        let mut data = vec![255u8; 8 * 8 * 4];
        let mut surface = CanvasSurface::new(8, 8, &mut data);
        surface.clear();
        assert!(data.iter().all(|&b| b == 0));
    }
}
