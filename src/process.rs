//! The stills → GIF pipeline.
//!
//! Runs the stages strictly in order, each consuming the previous one's full
//! output:
//!
//! ```text
//! Validate framerate → Enumerate → Validate non-empty → Load → Resolve scale
//!     → Resize → Assemble → Encode + write
//! ```
//!
//! Any failure ends the run with nothing written to the output path. Progress
//! is reported through a caller-supplied callback so the CLI can print it and
//! tests can record it; see [`crate::output::format_progress_event`].

use crate::config::{ConfigError, GifConfig};
use crate::imaging::{
    BackendError, Dimensions, FrameBackend, RustBackend, assemble_animation, fits_gif_canvas,
    load_frames, resize_frames, resolve_target_size, write_animation,
};
use crate::scan::{self, ScanError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("No files found matching {0}")]
    NoInput(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Imaging(#[from] BackendError),
}

impl PipelineError {
    /// True for aborts caused by bad input or options rather than a failed stage.
    pub fn is_validation(&self) -> bool {
        matches!(self, PipelineError::NoInput(_) | PipelineError::Config(_))
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            PipelineError::NoInput(_) => 3,
            PipelineError::Config(ConfigError::FramerateTooHigh { .. }) => 4,
            PipelineError::Scan(_) | PipelineError::Imaging(_) => 1,
        }
    }
}

/// Progress notifications, in the order the stages emit them.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent<'a> {
    FilesFound(&'a [PathBuf]),
    LoadingImages,
    ResizingImages,
    CanvasResolved { canvas: Dimensions, resized: usize },
    CreatingGif,
    GifCreated(&'a Path),
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifSummary {
    pub frames: usize,
    pub canvas: Dimensions,
    pub delay_cs: u16,
}

pub fn process(
    config: &GifConfig,
    on_event: impl FnMut(ProgressEvent<'_>),
) -> Result<GifSummary, PipelineError> {
    process_with_backend(&RustBackend::new(), config, on_event)
}

/// Run the pipeline with a specific backend (allows testing with mock).
pub fn process_with_backend(
    backend: &impl FrameBackend,
    config: &GifConfig,
    mut on_event: impl FnMut(ProgressEvent<'_>),
) -> Result<GifSummary, PipelineError> {
    // Checked before any decoding: a bad framerate can't be fixed by the inputs.
    let delay = config.frame_delay()?;

    let files = scan::enumerate_files(&config.input)?;
    if files.is_empty() {
        return Err(PipelineError::NoInput(config.input.clone()));
    }
    on_event(ProgressEvent::FilesFound(&files));

    on_event(ProgressEvent::LoadingImages);
    let mut frames = load_frames(backend, &files)?;
    let canvas = resolve_target_size(config.scale, frames.iter().map(Dimensions::of));
    // Reject before resampling: an oversized canvas can't be encoded anyway.
    if !fits_gif_canvas(canvas) {
        return Err(BackendError::CanvasTooLarge { canvas }.into());
    }

    on_event(ProgressEvent::ResizingImages);
    let resized = resize_frames(backend, &mut frames, canvas)?;
    on_event(ProgressEvent::CanvasResolved { canvas, resized });

    on_event(ProgressEvent::CreatingGif);
    let frame_count = frames.len();
    let animation = assemble_animation(frames, canvas, delay)?;
    write_animation(backend, animation, &config.output)?;
    on_event(ProgressEvent::GifCreated(&config.output));

    info!(frames = frame_count, %canvas, delay_cs = delay.centiseconds(), "gif created");
    Ok(GifSummary {
        frames: frame_count,
        canvas,
        delay_cs: delay.centiseconds(),
    })
}
