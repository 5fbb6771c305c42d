//! Pure calculation functions for canvas dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use super::backend::Dimensions;
use crate::config::ScaleSpec;

/// Resolve the output canvas from a scale spec and the loaded frame sizes.
///
/// Fixed axes are taken verbatim. Each auto axis becomes the largest value of
/// that axis among `frames`; the two axes are resolved independently, so the
/// result may be larger than every individual frame.
///
/// # Examples
/// ```
/// # use gifstitch::config::ScaleSpec;
/// # use gifstitch::imaging::{Dimensions, resolve_target_size};
/// let frames = [Dimensions::new(10, 20), Dimensions::new(30, 5)];
/// let target = resolve_target_size(ScaleSpec::parse("-1*-1"), frames);
/// assert_eq!(target, Dimensions::new(30, 20));
/// ```
pub fn resolve_target_size(
    spec: ScaleSpec,
    frames: impl IntoIterator<Item = Dimensions>,
) -> Dimensions {
    let (max_w, max_h) = frames
        .into_iter()
        .fold((0, 0), |(w, h), d| (w.max(d.width), h.max(d.height)));

    Dimensions {
        width: spec.width.resolve(max_w),
        height: spec.height.resolve(max_h),
    }
}

/// Whether `canvas` can be stored in a GIF logical screen (16-bit sides).
pub fn fits_gif_canvas(canvas: Dimensions) -> bool {
    let max = u32::from(u16::MAX);
    canvas.width <= max && canvas.height <= max
}

/// Whether a frame must be resampled to land on `target`.
pub fn needs_resize(frame: Dimensions, target: Dimensions) -> bool {
    frame.width != target.width || frame.height != target.height
}
