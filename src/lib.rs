#![warn(clippy::all)]
#![warn(missing_docs)]
/*!

Slice sprite sheets into frames and play them back as animations.

A sprite sheet is a single image holding a grid of equally-sized frames.
This library cuts frames out of such a sheet and plays runs of them back at a
fixed rate. Loading files and drawing pixels is left to a host [Sketch]; the
bundled [ImageSketch] does both with the [image](https://docs.rs/image)
crate.

# Basic Usage

## Load a sheet

```no_run
use spritesheet::{ImageSketch, SpriteSheetLibrary};

let mut lib = SpriteSheetLibrary::new(ImageSketch::new(320, 240).with_data_dir("data"));
let sheet = lib.load_sprite_sheet("walk.png", 16, 16).unwrap();

println!("Frames: {}", sheet.num_frames());
println!("Grid: {}x{}", sheet.columns(), sheet.rows());
```

## Extract frames

Frames are numbered row by row. [SpriteSheet::frame_image] returns an
independent copy of a single frame.

```
use spritesheet::SpriteSheet;
use image::RgbaImage;

let sheet = SpriteSheet::new(10, 10, RgbaImage::new(100, 100)).unwrap();
let region = sheet.region(23).unwrap();
assert_eq!((region.x, region.y), (30, 20));

let frame = sheet.frame_image(23).unwrap();
assert_eq!(frame.dimensions(), (10, 10));
```

## Play an animation

[SpriteSheet::animation] copies a run of frames into a [SpriteAnimation].
Each call to [SpriteAnimation::play] draws one frame and counts one tick. A
frame is shown for `frame_rate + 1` ticks. Once the last frame is done `play`
returns `false` until the animation is rewound.

```
use spritesheet::{ImageSketch, SpriteSheet};
use image::RgbaImage;

let mut sketch = ImageSketch::new(64, 64);
let sheet = SpriteSheet::new(10, 10, RgbaImage::new(100, 100)).unwrap();
let mut walk = sheet.animation(0, 5, 2).unwrap();

let mut ticks = 0;
while walk.play(&mut sketch, 8.0, 8.0) {
    ticks += 1;
}
assert_eq!(ticks, 15);

walk.rewind();
assert!(walk.play_scaled(&mut sketch, 0.0, 0.0, 20.0, 20.0));
```

*/

pub(crate) mod animation;
pub(crate) mod canvas;
pub(crate) mod error;
pub(crate) mod library;
pub(crate) mod sheet;
pub(crate) mod sketch;

/// A specialized `Result` type for sprite sheet operations.
pub type Result<T> = std::result::Result<T, SpriteSheetError>;

pub use animation::{AnimationState, Playhead, SpriteAnimation};
pub use canvas::ImageSketch;
pub use error::SpriteSheetError;
pub use library::SpriteSheetLibrary;
pub use sheet::{FramesIter, Region, SpriteSheet};
pub use sketch::{Bitmap, Sketch};
