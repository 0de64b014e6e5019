use log::debug;
use std::path::Path;

use crate::{Result, Sketch, SpriteSheet};

/// Ties sprite sheets to the sketch that loads and draws them.
///
/// The library owns its sketch. Pass [sketch_mut](Self::sketch_mut) to
/// [SpriteAnimation::play](crate::SpriteAnimation::play) to draw frames.
#[derive(Debug)]
pub struct SpriteSheetLibrary<S> {
    sketch: S,
}

impl<S: Sketch> SpriteSheetLibrary<S> {
    /// Bind the library to `sketch`.
    pub fn new(sketch: S) -> Self {
        SpriteSheetLibrary { sketch }
    }

    /// Load an image through the sketch and slice it into sprites of
    /// `sprite_width` x `sprite_height` pixels.
    ///
    /// Errors from the sketch's image loader are returned as they are.
    pub fn load_sprite_sheet<P: AsRef<Path>>(
        &mut self,
        path: P,
        sprite_width: u32,
        sprite_height: u32,
    ) -> Result<SpriteSheet<S::Image>> {
        let path = path.as_ref();
        let image = self.sketch.load_image(path)?;
        let sheet = SpriteSheet::new(sprite_width, sprite_height, image)?;
        debug!(
            "Loaded sprite sheet {}: {}x{} sprites of {}x{}",
            path.display(),
            sheet.columns(),
            sheet.rows(),
            sprite_width,
            sprite_height
        );
        Ok(sheet)
    }

    /// The bound sketch.
    pub fn sketch(&self) -> &S {
        &self.sketch
    }

    /// The bound sketch, for drawing.
    pub fn sketch_mut(&mut self) -> &mut S {
        &mut self.sketch
    }

    /// Unbind and return the sketch.
    pub fn into_sketch(self) -> S {
        self.sketch
    }
}
