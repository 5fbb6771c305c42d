//! # gifstitch
//!
//! Turns a directory of still images into a looping animated GIF. Point it at
//! a glob, pick a framerate and optionally a canvas size, and every matching
//! file becomes one frame, in filename order.
//!
//! # Architecture: Single-Pass Pipeline
//!
//! ```text
//! 1. Options    CLI flags     →  GifConfig        (framerate, scale, input, output)
//! 2. Enumerate  input glob    →  sorted paths
//! 3. Load       paths         →  RGBA frames
//! 4. Scale      W*H + frames  →  canvas size      (auto axes take the max, ≤ 65535 a side)
//! 5. Resize     frames        →  canvas-sized frames
//! 6. Assemble   frames        →  Animation        (uniform delay, loop forever)
//! 7. Write      Animation     →  output.gif
//! ```
//!
//! Each stage consumes the previous stage's full output. There is no
//! streaming and no parallelism: all frames are held in memory at once, which
//! keeps the pipeline trivial and suits the small-to-moderate frame counts a
//! GIF can sensibly hold.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `GifConfig`, `W*H` scale parsing, framerate → frame delay |
//! | [`scan`] | Splits the input into directory + pattern and lists matching files |
//! | [`imaging`] | Decode, resize and GIF encode behind the [`imaging::FrameBackend`] trait |
//! | [`process`] | Runs the stages in order and reports progress |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Nothing Written on Failure
//!
//! The GIF is encoded into a temporary file beside the output and renamed over
//! it only after the encoder finishes. A run that aborts at any stage leaves
//! the output path exactly as it found it.
//!
//! ## Framerate Checked First
//!
//! GIF timing is measured in hundredths of a second, so the frame delay is
//! `100 / framerate` and anything above 100 fps rounds down to zero. That is
//! rejected before any file is listed or decoded.
//!
//! ## Pure-Rust Imaging
//!
//! Decoding, Catmull-Rom resampling and GIF encoding (NeuQuant palettes, LZW)
//! come from the `image` crate. No system libraries, no external binaries.

pub mod config;
pub mod imaging;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
