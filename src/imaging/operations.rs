//! High-level frame operations.
//!
//! These functions combine calculations with backend execution: they decide
//! which frames need work and call the backend for the pixels.

use super::animation::Animation;
use super::backend::{BackendError, Dimensions, FrameBackend};
use super::calculations::needs_resize;
use super::params::FrameDelay;
use image::RgbaImage;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Result type for frame operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Decode every file, in order. The first failure aborts the whole load.
#[tracing::instrument(skip_all, fields(count = files.len()))]
pub fn load_frames(backend: &impl FrameBackend, files: &[PathBuf]) -> Result<Vec<RgbaImage>> {
    files
        .iter()
        .map(|path| {
            let frame = backend.decode(path)?;
            debug!(path = %path.display(), size = %Dimensions::of(&frame), "decoded");
            Ok::<_, BackendError>(frame)
        })
        .collect()
}

/// Resize, in place, every frame that doesn't already match `target`.
///
/// Matching frames are left untouched (no resample). Returns how many frames
/// were replaced.
#[tracing::instrument(skip_all, fields(target = %target))]
pub fn resize_frames(
    backend: &impl FrameBackend,
    frames: &mut [RgbaImage],
    target: Dimensions,
) -> Result<usize> {
    let mut resized = 0;
    for frame in frames.iter_mut() {
        if needs_resize(Dimensions::of(frame), target) {
            *frame = backend.resize(frame, target)?;
            resized += 1;
        }
    }
    debug!(resized, total = frames.len(), "resize pass done");
    Ok(resized)
}

/// Build a looping animation from `frames`, all shown for `delay`.
pub fn assemble_animation(
    frames: Vec<RgbaImage>,
    canvas: Dimensions,
    delay: FrameDelay,
) -> Result<Animation> {
    let mut animation = Animation::new(canvas);
    for frame in frames {
        animation.push_frame(frame, delay)?;
    }
    Ok(animation)
}

/// Encode `animation` and write it to `output`.
///
/// The GIF is encoded into a temporary file next to `output` and renamed into
/// place only once encoding has fully succeeded. On any error the temporary
/// file is removed, so `output` is either the complete GIF or untouched.
#[tracing::instrument(skip_all, fields(output = %output.display(), frames = animation.len()))]
pub fn write_animation(
    backend: &impl FrameBackend,
    animation: Animation,
    output: &Path,
) -> Result<()> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        backend.encode(animation, &mut writer)?;
        writer.flush()?;
    }
    // Temp files are created owner-only; the GIF should be a normal file.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }
    tmp.persist(output).map_err(|e| BackendError::Io(e.error))?;
    debug!("gif written");
    Ok(())
}
