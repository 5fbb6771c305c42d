//! Frame backend trait and shared types.
//!
//! The [`FrameBackend`] trait defines the three operations the pipeline needs
//! from an imaging library: decode a still, resize a frame, and encode an
//! [`Animation`].
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use the recording `MockBackend` below.

use super::animation::Animation;
use image::RgbaImage;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("GIF encode failed: {0}")]
    Encode(#[source] image::ImageError),
    #[error("Canvas {canvas} is too large: GIF allows at most 65535 pixels per side")]
    CanvasTooLarge { canvas: Dimensions },
    #[error("Frame is {actual} but the canvas is {expected}")]
    FrameSizeMismatch {
        expected: Dimensions,
        actual: Dimensions,
    },
}

/// Width and height of a frame or canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of(frame: &RgbaImage) -> Self {
        Self {
            width: frame.width(),
            height: frame.height(),
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Trait for imaging backends.
///
/// Decoding, resampling and GIF encoding all live behind this seam so the
/// pipeline logic in [`operations`](super::operations) is library-agnostic.
pub trait FrameBackend {
    /// Decode a still image into an RGBA raster.
    fn decode(&self, path: &Path) -> Result<RgbaImage, BackendError>;

    /// Resample `frame` to exactly `target` (aspect ratio is not preserved).
    fn resize(&self, frame: &RgbaImage, target: Dimensions) -> Result<RgbaImage, BackendError>;

    /// Encode a finished animation as a GIF into `writer`, consuming it.
    fn encode(&self, animation: Animation, writer: &mut dyn Write) -> Result<(), BackendError>;
}
