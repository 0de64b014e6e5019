use std::{error::Error, fmt, io};

/// An error occured while slicing or playing a sprite sheet.
#[derive(Debug)]
pub enum SpriteSheetError {
    /// The sprite size does not fit the sheet. String contains detailed
    /// message.
    InvalidGeometry(String),
    /// A frame index points past the last row of the sheet.
    OutOfRange(String),
    /// An animation was configured with unusable parameters, e.g., a frame
    /// rate of zero.
    InvalidConfiguration(String),
    /// The image loader could not decode the file.
    Image(image::ImageError),
    /// An IO error occured while loading an image.
    IoError(io::Error),
}

impl From<io::Error> for SpriteSheetError {
    fn from(err: io::Error) -> Self {
        SpriteSheetError::IoError(err)
    }
}

impl From<image::ImageError> for SpriteSheetError {
    fn from(err: image::ImageError) -> Self {
        SpriteSheetError::Image(err)
    }
}

impl fmt::Display for SpriteSheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteSheetError::InvalidGeometry(msg) => write!(f, "Invalid sheet geometry: {}", msg),
            SpriteSheetError::OutOfRange(msg) => write!(f, "Frame out of range: {}", msg),
            SpriteSheetError::InvalidConfiguration(msg) => {
                write!(f, "Invalid animation configuration: {}", msg)
            }
            SpriteSheetError::Image(err) => write!(f, "Image error: {}", err),
            SpriteSheetError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for SpriteSheetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SpriteSheetError::Image(err) => Some(err),
            SpriteSheetError::IoError(err) => Some(err),
            _ => None,
        }
    }
}
