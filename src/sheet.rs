use crate::{Bitmap, Result, SpriteAnimation, SpriteSheetError};
use log::debug;
use std::fmt;

/// A single image holding a grid of equally-sized frames.
///
/// Frames are numbered row by row, starting at the top-left cell:
///
/// ```text
/// +---+---+---+
/// | 0 | 1 | 2 |
/// +---+---+---+
/// | 3 | 4 | 5 |
/// +---+---+---+
/// ```
///
/// If the sheet's width is not a multiple of the sprite width, the partial
/// column on the right is ignored. The same goes for a partial row at the
/// bottom.
#[derive(Debug, Clone)]
pub struct SpriteSheet<B> {
    pub(crate) sprite_width: u32,
    pub(crate) sprite_height: u32,
    pub(crate) columns: u32,
    pub(crate) rows: u32,
    pub(crate) image: B,
}

/// A rectangle of pixels in a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

impl<B: Bitmap> SpriteSheet<B> {
    /// Wrap a loaded grid image.
    ///
    /// Fails with [SpriteSheetError::InvalidGeometry] if either sprite
    /// dimension is zero or if the image is too small to hold a single
    /// sprite.
    pub fn new(sprite_width: u32, sprite_height: u32, image: B) -> Result<Self> {
        if sprite_width == 0 || sprite_height == 0 {
            return Err(SpriteSheetError::InvalidGeometry(format!(
                "Sprite size must be positive, got {}x{}",
                sprite_width, sprite_height
            )));
        }
        let (width, height) = (image.width(), image.height());
        let columns = width / sprite_width;
        let rows = height / sprite_height;
        if columns == 0 || rows == 0 {
            return Err(SpriteSheetError::InvalidGeometry(format!(
                "Sheet of {}x{} pixels cannot hold a {}x{} sprite",
                width, height, sprite_width, sprite_height
            )));
        }
        if width % sprite_width != 0 || height % sprite_height != 0 {
            debug!(
                "Sheet size {}x{} is not a multiple of sprite size {}x{}, ignoring partial cells",
                width, height, sprite_width, sprite_height
            );
        }
        Ok(SpriteSheet {
            sprite_width,
            sprite_height,
            columns,
            rows,
            image,
        })
    }

    /// Width of a single sprite in pixels.
    pub fn sprite_width(&self) -> u32 {
        self.sprite_width
    }

    /// Height of a single sprite in pixels.
    pub fn sprite_height(&self) -> u32 {
        self.sprite_height
    }

    /// Width and height of a single sprite in pixels.
    pub fn sprite_size(&self) -> (u32, u32) {
        (self.sprite_width, self.sprite_height)
    }

    /// Number of whole sprites per row.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of whole sprite rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of frames on the sheet.
    ///
    /// This can exceed the range of a frame index for huge sheets of tiny
    /// sprites. Only frames `0..=u32::MAX` can be addressed.
    pub fn num_frames(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    /// The full grid image.
    pub fn image(&self) -> &B {
        &self.image
    }

    /// The pixel rectangle belonging to `frame`.
    ///
    /// Fails with [SpriteSheetError::OutOfRange] if the frame would lie
    /// below the last row of the sheet.
    pub fn region(&self, frame: u32) -> Result<Region> {
        let col = frame % self.columns;
        let row = frame / self.columns;
        if row >= self.rows {
            return Err(SpriteSheetError::OutOfRange(format!(
                "Frame {} is in row {}, but the sheet only has {} rows",
                frame, row, self.rows
            )));
        }
        Ok(Region {
            x: col * self.sprite_width,
            y: row * self.sprite_height,
            width: self.sprite_width,
            height: self.sprite_height,
        })
    }

    /// Copy a single frame out of the sheet.
    ///
    /// The result is an independent image; it does not borrow the sheet.
    pub fn frame_image(&self, frame: u32) -> Result<B> {
        let Region {
            x,
            y,
            width,
            height,
        } = self.region(frame)?;
        Ok(self.image.region(x, y, width, height))
    }

    /// Copy `num_frames` consecutive frames starting at `start_frame` and
    /// play them at `frame_rate`.
    ///
    /// See [SpriteAnimation::play] for how `frame_rate` controls timing.
    /// Passing `num_frames == 0` gives an animation that is already
    /// finished.
    pub fn animation(
        &self,
        start_frame: u32,
        num_frames: u32,
        frame_rate: u32,
    ) -> Result<SpriteAnimation<B>> {
        if num_frames > 0 {
            // Check the whole run before copying anything.
            let last = start_frame.checked_add(num_frames - 1).ok_or_else(|| {
                SpriteSheetError::OutOfRange(format!(
                    "Frame {} + {} does not fit into a frame index",
                    start_frame,
                    num_frames - 1
                ))
            })?;
            self.region(last)?;
        }
        let mut frames = Vec::with_capacity(num_frames as usize);
        for offset in 0..num_frames {
            let frame = start_frame.checked_add(offset).ok_or_else(|| {
                SpriteSheetError::OutOfRange(format!(
                    "Frame {} + {} does not fit into a frame index",
                    start_frame, offset
                ))
            })?;
            frames.push(self.frame_image(frame)?);
        }
        SpriteAnimation::new(frames, frame_rate)
    }

    /// An iterator over every addressable frame on the sheet, in frame
    /// order.
    ///
    /// Stops after frame `u32::MAX`, see [num_frames](Self::num_frames).
    pub fn frames(&self) -> FramesIter<'_, B> {
        FramesIter {
            sheet: self,
            next: 0,
            end: self.num_frames().min(u32::MAX as u64 + 1),
        }
    }
}

/// An iterator over the frames of a sheet. See [SpriteSheet::frames].
#[derive(Debug)]
pub struct FramesIter<'a, B> {
    sheet: &'a SpriteSheet<B>,
    next: u64,
    end: u64,
}

impl<'a, B: Bitmap> Iterator for FramesIter<'a, B> {
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.end {
            let item = self.sheet.frame_image(self.next as u32).ok()?;
            self.next += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}
