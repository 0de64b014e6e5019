use crate::{Result, Sketch, SpriteSheetError};

/// Playback state of a [SpriteAnimation].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// There are frames left to show.
    Playing,
    /// Every frame has been shown. Only [SpriteAnimation::rewind] leaves this
    /// state.
    Finished,
}

/// Position of an animation's playback: the frame being shown and how many
/// ticks it has been shown for.
///
/// `Playhead` is a plain value. [Playhead::advance] computes the next
/// position without touching any frames, which makes the timing rule usable
/// on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Playhead {
    frame: usize,
    ticks: u32,
}

impl Playhead {
    /// The start of an animation.
    pub const START: Playhead = Playhead { frame: 0, ticks: 0 };

    /// Index of the current frame.
    #[inline]
    pub fn frame(self) -> usize {
        self.frame
    }

    /// Ticks the current frame has been shown for.
    #[inline]
    pub fn ticks(self) -> u32 {
        self.ticks
    }

    /// `true` once the playhead has moved past the last of `len` frames.
    #[inline]
    pub fn is_finished(self, len: usize) -> bool {
        self.frame >= len
    }

    /// The position after one more tick.
    ///
    /// The frame changes on the tick where the counter, before counting that
    /// tick, has already reached `frame_rate`. A frame is therefore shown for
    /// `frame_rate + 1` ticks.
    pub fn advance(self, frame_rate: u32) -> Playhead {
        if self.ticks >= frame_rate {
            Playhead {
                frame: self.frame + 1,
                ticks: 0,
            }
        } else {
            Playhead {
                frame: self.frame,
                ticks: self.ticks + 1,
            }
        }
    }
}

/// A sequence of frames played back at a fixed rate.
///
/// Usually created with [SpriteSheet::animation](crate::SpriteSheet::animation).
/// Every call to [play](SpriteAnimation::play) draws one frame and counts one
/// tick. Once the last frame has been shown the animation stays finished
/// until it is rewound; it never loops on its own.
///
/// ```
/// use spritesheet::{AnimationState, SpriteAnimation};
/// use image::RgbaImage;
///
/// let frames = vec![RgbaImage::new(8, 8), RgbaImage::new(8, 8)];
/// let mut anim = SpriteAnimation::new(frames, 1).unwrap();
/// let mut shown = 0;
/// while anim.tick().is_some() {
///     shown += 1;
/// }
/// // Two frames, each held for two ticks.
/// assert_eq!(shown, 4);
/// assert_eq!(anim.state(), AnimationState::Finished);
/// ```
#[derive(Debug, Clone)]
pub struct SpriteAnimation<B> {
    frames: Box<[B]>,
    frame_rate: u32,
    playhead: Playhead,
}

impl<B> SpriteAnimation<B> {
    /// Create an animation from already extracted frames.
    ///
    /// Fails with [SpriteSheetError::InvalidConfiguration] if `frame_rate`
    /// is zero.
    pub fn new(frames: Vec<B>, frame_rate: u32) -> Result<Self> {
        if frame_rate == 0 {
            return Err(SpriteSheetError::InvalidConfiguration(
                "Frame rate must be at least 1".into(),
            ));
        }
        let mut animation = SpriteAnimation {
            frames: frames.into_boxed_slice(),
            frame_rate,
            playhead: Playhead::START,
        };
        animation.rewind();
        Ok(animation)
    }

    /// Jump back to the first frame.
    ///
    /// Also resets the tick counter, so a rewound animation plays exactly
    /// like a new one.
    pub fn rewind(&mut self) {
        self.playhead = Playhead::START;
    }

    /// Number of ticks a frame is held before the next one is due. See
    /// [Playhead::advance].
    #[inline]
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// All frames, in playback order.
    pub fn frames(&self) -> &[B] {
        &self.frames
    }

    /// Number of frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` if the animation has no frames.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Index of the frame the next tick will show. Equal to [len](Self::len)
    /// once finished.
    #[inline]
    pub fn current_frame(&self) -> usize {
        self.playhead.frame()
    }

    /// The current playback position.
    #[inline]
    pub fn playhead(&self) -> Playhead {
        self.playhead
    }

    /// Current playback state.
    pub fn state(&self) -> AnimationState {
        if self.is_finished() {
            AnimationState::Finished
        } else {
            AnimationState::Playing
        }
    }

    /// `true` once every frame has been shown.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.playhead.is_finished(self.frames.len())
    }

    /// Count one tick without drawing anything.
    ///
    /// Returns the frame that should be shown for this tick, or `None` if the
    /// animation is finished.
    pub fn tick(&mut self) -> Option<&B> {
        if self.is_finished() {
            return None;
        }
        let current = self.playhead.frame();
        self.playhead = self.playhead.advance(self.frame_rate);
        self.frames.get(current)
    }

    /// Draw the current frame at its native size and count one tick.
    ///
    /// Returns `false` without drawing if the animation is finished.
    pub fn play<S>(&mut self, sketch: &mut S, x: f32, y: f32) -> bool
    where
        S: Sketch<Image = B>,
    {
        self.play_at(sketch, x, y, None)
    }

    /// Draw the current frame scaled to `width` x `height` and count one
    /// tick.
    ///
    /// Returns `false` without drawing if the animation is finished.
    pub fn play_scaled<S>(&mut self, sketch: &mut S, x: f32, y: f32, width: f32, height: f32) -> bool
    where
        S: Sketch<Image = B>,
    {
        self.play_at(sketch, x, y, Some((width, height)))
    }

    fn play_at<S>(&mut self, sketch: &mut S, x: f32, y: f32, size: Option<(f32, f32)>) -> bool
    where
        S: Sketch<Image = B>,
    {
        match self.tick() {
            Some(frame) => {
                sketch.draw_image(frame, x, y, size);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playhead_holds_for_rate_plus_one() {
        let mut p = Playhead::START;
        for _ in 0..10 {
            p = p.advance(10);
        }
        assert_eq!(p.frame(), 0);
        assert_eq!(p.ticks(), 10);
        p = p.advance(10);
        assert_eq!(p.frame(), 1);
        assert_eq!(p.ticks(), 0);
    }

    #[test]
    fn playhead_rate_one() {
        let p = Playhead::START.advance(1);
        assert_eq!((p.frame(), p.ticks()), (0, 1));
        let p = p.advance(1);
        assert_eq!((p.frame(), p.ticks()), (1, 0));
    }

    #[test]
    fn playhead_finished() {
        assert!(Playhead::START.is_finished(0));
        assert!(!Playhead::START.is_finished(1));
        assert!(Playhead::START.advance(0).is_finished(1));
    }

    #[test]
    fn zero_frame_rate_is_rejected() {
        let err = SpriteAnimation::<u8>::new(vec![1, 2], 0).unwrap_err();
        assert!(matches!(err, SpriteSheetError::InvalidConfiguration(_)));
    }

    #[test]
    fn tick_returns_frames_in_order() {
        let mut anim = SpriteAnimation::new(vec!['a', 'b', 'c'], 1).unwrap();
        let mut seen = Vec::new();
        while let Some(frame) = anim.tick() {
            seen.push(*frame);
        }
        assert_eq!(seen, vec!['a', 'a', 'b', 'b', 'c', 'c']);
        assert!(anim.tick().is_none());
    }
}
