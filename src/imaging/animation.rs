//! In-memory animation container.
//!
//! An [`Animation`] is a fixed canvas plus an ordered list of frames, each with
//! its own delay, and it always loops forever. It is built once, handed to a
//! backend for encoding, then dropped. Every frame must match the canvas
//! exactly; resizing is the caller's job (see [`resize_frames`](super::operations::resize_frames)).

use super::backend::{BackendError, Dimensions};
use super::params::FrameDelay;
use image::RgbaImage;

#[derive(Debug, Clone)]
pub struct AnimationFrame {
    pub image: RgbaImage,
    pub delay: FrameDelay,
}

#[derive(Debug, Clone)]
pub struct Animation {
    canvas: Dimensions,
    frames: Vec<AnimationFrame>,
}

impl Animation {
    /// Empty animation on a `canvas`-sized screen.
    pub fn new(canvas: Dimensions) -> Self {
        Self {
            canvas,
            frames: Vec::new(),
        }
    }

    /// Append a frame. Rejects frames that don't match the canvas.
    pub fn push_frame(&mut self, image: RgbaImage, delay: FrameDelay) -> Result<(), BackendError> {
        let actual = Dimensions::of(&image);
        if actual != self.canvas {
            return Err(BackendError::FrameSizeMismatch {
                expected: self.canvas,
                actual,
            });
        }
        self.frames.push(AnimationFrame { image, delay });
        Ok(())
    }

    pub fn canvas(&self) -> Dimensions {
        self.canvas
    }

    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<AnimationFrame> {
        self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
