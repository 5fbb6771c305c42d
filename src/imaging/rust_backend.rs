//! Pure Rust frame backend on top of the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, GIF, BMP, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Resize | `image::imageops::resize` with `CatmullRom` (bicubic) |
//! | Encode → GIF | `image::codecs::gif::GifEncoder` (NeuQuant palette + LZW via `gif`) |

use super::animation::Animation;
use super::backend::{BackendError, Dimensions, FrameBackend};
use image::codecs::gif::{GifEncoder, Repeat};
use image::imageops::FilterType;
use image::{Delay, Frame, ImageError, ImageReader, RgbaImage};
use std::io::Write;
use std::path::Path;

/// Backend using the `image` crate for every operation.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend {
    filter: FilterType,
}

/// NeuQuant sampling speed (1 = best quality, 30 = fastest). 10 is the
/// `gif` crate's own default.
const ENCODE_SPEED: i32 = 10;

impl RustBackend {
    pub fn new() -> Self {
        Self {
            filter: FilterType::CatmullRom,
        }
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<RgbaImage, BackendError> {
        let decode_error = |source: ImageError| BackendError::Decode {
            path: path.to_path_buf(),
            source,
        };
        // Sniff the header first so extension-less frames still decode.
        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_error(ImageError::IoError(e)))?;
        let image = reader.decode().map_err(decode_error)?;
        Ok(image.into_rgba8())
    }

    fn resize(&self, frame: &RgbaImage, target: Dimensions) -> Result<RgbaImage, BackendError> {
        Ok(image::imageops::resize(
            frame,
            target.width,
            target.height,
            self.filter,
        ))
    }

    fn encode(&self, animation: Animation, writer: &mut dyn Write) -> Result<(), BackendError> {
        let mut encoder = GifEncoder::new_with_speed(writer, ENCODE_SPEED);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(BackendError::Encode)?;

        for frame in animation.into_frames() {
            let delay = Delay::from_numer_denom_ms(u32::from(frame.delay.centiseconds()) * 10, 1);
            encoder
                .encode_frame(Frame::from_parts(frame.image, 0, 0, delay))
                .map_err(BackendError::Encode)?;
        }
        // Dropping the encoder writes the GIF trailer.
        Ok(())
    }
}
