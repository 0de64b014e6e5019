use image::{Pixel, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

use crate::{Result, Sketch};

/// A [Sketch] that draws onto an in-memory `RgbaImage`.
///
/// Images are loaded with the [image](https://docs.rs/image) crate. Which
/// formats can be decoded depends on the enabled features (`png` by default,
/// `gif`, `jpeg` and `bmp` on request).
///
/// ```
/// use spritesheet::{ImageSketch, Sketch};
/// use image::{Rgba, RgbaImage};
///
/// let mut sketch = ImageSketch::new(4, 4);
/// let red = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
/// sketch.draw_image(&red, 1.0, 1.0, None);
/// assert_eq!(sketch.surface().get_pixel(1, 1), &Rgba([255, 0, 0, 255]));
/// assert_eq!(sketch.surface().get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
/// ```
#[derive(Debug, Clone)]
pub struct ImageSketch {
    surface: RgbaImage,
    data_dir: Option<PathBuf>,
}

impl ImageSketch {
    /// Create a sketch with a fully transparent drawing surface.
    pub fn new(width: u32, height: u32) -> Self {
        ImageSketch {
            surface: RgbaImage::new(width, height),
            data_dir: None,
        }
    }

    /// Resolve relative image paths against `dir`.
    pub fn with_data_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Directory relative image paths are resolved against, if any.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Fill the whole surface with a single color.
    pub fn background(&mut self, color: Rgba<u8>) {
        for pixel in self.surface.pixels_mut() {
            *pixel = color;
        }
    }

    /// The drawing surface.
    pub fn surface(&self) -> &RgbaImage {
        &self.surface
    }

    /// Consume the sketch and return the drawing surface.
    pub fn into_surface(self) -> RgbaImage {
        self.surface
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.data_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    // Draws `image` stretched to `width` x `height` with its top-left corner
    // at `(x, y)`. Nearest neighbour; only pixels on the surface are sampled.
    fn blit(&mut self, image: &RgbaImage, x: i64, y: i64, width: u32, height: u32) {
        let (surface_width, surface_height) = self.surface.dimensions();
        let (image_width, image_height) = image.dimensions();
        if image_width == 0 || image_height == 0 || width == 0 || height == 0 {
            return;
        }

        let x_end = x.saturating_add(width as i64).min(surface_width as i64);
        let y_end = y.saturating_add(height as i64).min(surface_height as i64);
        for dst_y in y.max(0)..y_end {
            let src_y = ((dst_y - y) as u64 * image_height as u64 / height as u64) as u32;
            for dst_x in x.max(0)..x_end {
                let src_x = ((dst_x - x) as u64 * image_width as u64 / width as u64) as u32;
                let src = image.get_pixel(src_x, src_y);
                let dst = self.surface.get_pixel_mut(dst_x as u32, dst_y as u32);
                match src[3] {
                    0 => {}
                    255 => *dst = *src,
                    _ => dst.blend(src),
                }
            }
        }
    }
}

impl Sketch for ImageSketch {
    type Image = RgbaImage;

    fn load_image(&mut self, path: &Path) -> Result<RgbaImage> {
        let path = self.resolve(path);
        let image = image::open(&path)?;
        Ok(image.to_rgba8())
    }

    fn draw_image(&mut self, image: &RgbaImage, x: f32, y: f32, size: Option<(f32, f32)>) {
        let x = x.round() as i64;
        let y = y.round() as i64;
        let (width, height) = match size {
            Some((w, h)) => (w.round().max(0.0) as u32, h.round().max(0.0) as u32),
            None => image.dimensions(),
        };
        self.blit(image, x, y, width, height);
    }
}
