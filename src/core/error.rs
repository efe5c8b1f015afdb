use thiserror::Error;

use crate::core::layout::{MAX_COLORS, MIN_COLORS};

/**
 * Everything that can go wrong between reading a color list and flushing
 * the finished palette to disk. Count and syntax violations surface before
 * any drawing starts; encoding and IO failures abort the render with no
 * partial output.
 */
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("invalid color code: {0}")]
    InvalidColor(String),

    #[error("expected between {MIN_COLORS} and {MAX_COLORS} colors, got {0}")]
    InvalidCount(usize),

    #[error("unable to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("unable to write image file: {0}")]
    Io(#[from] std::io::Error),
}
