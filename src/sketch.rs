use image::{imageops, RgbaImage};
use std::path::Path;

use crate::Result;

/// A bitmap owned by the host graphics environment.
///
/// Sprite sheets only need to know an image's size and how to copy a
/// rectangle out of it.
pub trait Bitmap: Sized {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Copy the given rectangle into a new, independent bitmap.
    ///
    /// [SpriteSheet](crate::SpriteSheet) only calls this with rectangles that
    /// lie completely inside the bitmap, so implementations do not need to
    /// handle clipping.
    fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Self;
}

/// The host sketch: loads images from disk and draws them onto the current
/// drawing surface.
///
/// A sketch is passed explicitly to everything that needs it. See
/// [ImageSketch](crate::ImageSketch) for an implementation backed by the
/// `image` crate.
pub trait Sketch {
    /// The sketch's image type.
    type Image: Bitmap;

    /// Load an image file.
    ///
    /// Errors are passed on to the caller of
    /// [SpriteSheetLibrary::load_sprite_sheet](crate::SpriteSheetLibrary::load_sprite_sheet)
    /// unchanged.
    fn load_image(&mut self, path: &Path) -> Result<Self::Image>;

    /// Draw `image` with its top-left corner at `(x, y)`.
    ///
    /// If `size` is `Some((width, height))` the image is scaled to that size,
    /// otherwise it is drawn at its native size.
    fn draw_image(&mut self, image: &Self::Image, x: f32, y: f32, size: Option<(f32, f32)>);
}

impl Bitmap for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Self {
        imageops::crop_imm(self, x, y, width, height).to_image()
    }
}
