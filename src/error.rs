use std::io;
use thiserror::Error;

/// Errors raised while loading a scene or writing frames.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error("image encode error: {0}")]
    Image(#[from] image::ImageError),

    /// Cell count does not match the declared dimensions.
    #[error("map has {found} cells, expected {width}x{height}")]
    MapSize {
        width: usize,
        height: usize,
        found: usize,
    },

    /// Anything other than `' '` or a digit.
    #[error("invalid map cell {ch:?} at ({x}, {y})")]
    MapCell { ch: char, x: usize, y: usize },

    /// Step or range that would keep a ray marching forever.
    #[error("invalid ray settings: step {step}, max distance {max_distance}")]
    RaySettings { step: f64, max_distance: f64 },

    #[error("palette index {index} out of range (palette has {len} colors)")]
    PaletteIndex { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, RenderError>;
