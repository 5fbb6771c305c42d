//! CLI output formatting.
//!
//! Console output is informational, one line per fact, in the order the
//! pipeline runs:
//!
//! ```text
//! Framerate: 30
//! Scale: -1*-1
//! Input: frames/*.png
//! Output: out.gif
//! Files found:
//! frames/a.png
//! frames/b.png
//! Loading images
//! Resizing images
//! Canvas: 30x20
//! Creating gif
//! Gif created
//! ```
//!
//! Each `format_*` function only builds lines; the matching `print_*` decides
//! the stream. Fatal errors go to stderr, everything else to stdout.

use crate::config::GifConfig;
use crate::process::{PipelineError, ProgressEvent};

/// Echo the resolved configuration.
pub fn format_config(config: &GifConfig) -> Vec<String> {
    vec![
        format!("Framerate: {}", config.framerate),
        format!("Scale: {}", config.scale_raw),
        format!("Input: {}", config.input),
        format!("Output: {}", config.output.display()),
    ]
}

/// Print the configuration echo to stdout.
pub fn print_config(config: &GifConfig) {
    for line in format_config(config) {
        println!("{}", line);
    }
}

/// Format a single pipeline progress event as display lines.
pub fn format_progress_event(event: &ProgressEvent<'_>) -> Vec<String> {
    match event {
        ProgressEvent::FilesFound(files) => {
            let mut lines = Vec::with_capacity(files.len() + 1);
            lines.push("Files found:".to_string());
            lines.extend(files.iter().map(|f| f.display().to_string()));
            lines
        }
        ProgressEvent::LoadingImages => vec!["Loading images".to_string()],
        ProgressEvent::ResizingImages => vec!["Resizing images".to_string()],
        ProgressEvent::CanvasResolved { canvas, .. } => vec![format!("Canvas: {}", canvas)],
        ProgressEvent::CreatingGif => vec!["Creating gif".to_string()],
        ProgressEvent::GifCreated(_) => vec!["Gif created".to_string()],
    }
}

/// Print a progress event to stdout.
pub fn print_progress_event(event: &ProgressEvent<'_>) {
    for line in format_progress_event(event) {
        println!("{}", line);
    }
}

/// Format a pipeline failure.
///
/// Validation aborts read as plain messages; fatal errors carry an `Error:`
/// prefix and the chain of underlying causes.
pub fn format_error(err: &PipelineError) -> String {
    if err.is_validation() {
        return err.to_string();
    }
    let mut message = format!("Error: {}", err);
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(&format!("\n  caused by: {}", text));
        }
        source = cause.source();
    }
    message
}

/// Print a pipeline failure: validation aborts on stdout, fatal errors on stderr.
pub fn print_error(err: &PipelineError) {
    let message = format_error(err);
    if err.is_validation() {
        println!("{}", message);
    } else {
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::imaging::{BackendError, Dimensions};
    use std::path::{Path, PathBuf};

    #[test]
    fn config_echo_uses_raw_scale() {
        let config = GifConfig::new(24, "64*abc", "frames/*.png", PathBuf::from("out.gif"));
        assert_eq!(
            format_config(&config),
            vec![
                "Framerate: 24",
                "Scale: 64*abc",
                "Input: frames/*.png",
                "Output: out.gif",
            ]
        );
    }

    #[test]
    fn files_found_lists_every_path() {
        let files = vec![PathBuf::from("frames/a.png"), PathBuf::from("frames/b.png")];
        let lines = format_progress_event(&ProgressEvent::FilesFound(&files));
        assert_eq!(lines, vec!["Files found:", "frames/a.png", "frames/b.png"]);
    }

    #[test]
    fn stage_announcements() {
        assert_eq!(
            format_progress_event(&ProgressEvent::LoadingImages),
            vec!["Loading images"]
        );
        assert_eq!(
            format_progress_event(&ProgressEvent::ResizingImages),
            vec!["Resizing images"]
        );
        assert_eq!(
            format_progress_event(&ProgressEvent::CreatingGif),
            vec!["Creating gif"]
        );
        assert_eq!(
            format_progress_event(&ProgressEvent::GifCreated(Path::new("out.gif"))),
            vec!["Gif created"]
        );
    }

    #[test]
    fn canvas_line() {
        let event = ProgressEvent::CanvasResolved {
            canvas: Dimensions::new(30, 20),
            resized: 2,
        };
        assert_eq!(format_progress_event(&event), vec!["Canvas: 30x20"]);
    }

    #[test]
    fn validation_errors_have_no_prefix() {
        let err = PipelineError::NoInput("frames/*.png".into());
        assert_eq!(format_error(&err), "No files found matching frames/*.png");

        let err = PipelineError::Config(ConfigError::FramerateTooHigh { framerate: 150 });
        assert!(format_error(&err).starts_with("Framerate is too high"));
    }

    #[test]
    fn fatal_errors_include_cause() {
        let err = PipelineError::Imaging(BackendError::Encode(image::ImageError::IoError(
            std::io::Error::other("disk full"),
        )));
        let message = format_error(&err);
        assert!(message.starts_with("Error: GIF encode failed"));
        assert!(message.contains("disk full"));
    }
}
