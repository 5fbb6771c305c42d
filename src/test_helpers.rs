//! Shared test utilities for the gifstitch test suite.
//!
//! Writes real image fixtures and reads produced GIFs back, so backend and
//! pipeline tests can assert on actual encoded output.

use crate::imaging::Dimensions;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ImageDecoder, Rgba, RgbaImage};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// =========================================================================
// Fixture setup
// =========================================================================

/// Write a solid-colour PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32, color: [u8; 4]) {
    RgbaImage::from_pixel(width, height, Rgba(color))
        .save(path)
        .unwrap();
}

// =========================================================================
// GIF inspection
// =========================================================================

/// What a decoded GIF looks like from the outside.
#[derive(Debug)]
pub struct DecodedGif {
    pub canvas: Dimensions,
    /// Frame count only: the decoder composites every frame onto a
    /// canvas-sized buffer, so per-frame sizes are not observable here.
    pub frames: usize,
    pub delays_cs: Vec<u16>,
    pub loops_forever: bool,
}

/// Decode a GIF file. Panics on anything that isn't a valid GIF.
pub fn decode_gif(path: &Path) -> DecodedGif {
    let bytes = std::fs::read(path).unwrap();

    let decoder = GifDecoder::new(BufReader::new(File::open(path).unwrap())).unwrap();
    let (width, height) = decoder.dimensions();
    let frames = decoder.into_frames().collect_frames().unwrap();

    DecodedGif {
        canvas: Dimensions::new(width, height),
        frames: frames.len(),
        delays_cs: frames
            .iter()
            .map(|f| {
                let (numer, denom) = f.delay().numer_denom_ms();
                (numer / denom / 10) as u16
            })
            .collect(),
        loops_forever: has_infinite_loop(&bytes),
    }
}

/// Look for a NETSCAPE2.0 application extension with loop count 0.
fn has_infinite_loop(bytes: &[u8]) -> bool {
    const APP_ID: &[u8] = b"NETSCAPE2.0";
    bytes
        .windows(APP_ID.len())
        .position(|w| w == APP_ID)
        .and_then(|pos| bytes.get(pos + APP_ID.len()..pos + APP_ID.len() + 4))
        .is_some_and(|block| block == [3, 1, 0, 0])
}
