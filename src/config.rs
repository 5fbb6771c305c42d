//! Run configuration.
//!
//! The CLI in `main.rs` parses flags with clap; this module turns them into an
//! immutable [`GifConfig`] and owns the two pieces of interpretation the flags
//! need: the `W*H` scale syntax and the framerate → frame delay conversion.
//!
//! ## Scale Syntax
//!
//! ```text
//! -1*-1     both axes auto (default)
//! 64*64     fixed 64x64 canvas
//! 320*-1    fixed width, height = tallest input
//! garbage   both axes auto
//! ```
//!
//! An auto axis resolves to the largest value of that axis among the loaded
//! frames; see [`crate::imaging::resolve_target_size`].

use crate::imaging::FrameDelay;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Default framerate when `--framerate` is omitted.
pub const DEFAULT_FRAMERATE: u32 = 30;

/// Default scale spec when `--scale` is omitted.
pub const DEFAULT_SCALE: &str = "-1*-1";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Framerate is too high ({framerate} fps, the maximum is 100)")]
    FramerateTooHigh { framerate: u32 },
}

/// One axis of a scale spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Take the maximum of this axis across all input frames.
    Auto,
    Fixed(u32),
}

impl Axis {
    /// Parse a single side of `W*H`. Anything that isn't a positive integer is auto.
    fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(n) if n > 0 => u32::try_from(n).map_or(Axis::Auto, Axis::Fixed),
            _ => Axis::Auto,
        }
    }

    /// The fixed value, or `observed_max` when auto.
    pub fn resolve(self, observed_max: u32) -> u32 {
        match self {
            Axis::Fixed(n) => n,
            Axis::Auto => observed_max,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Auto => f.write_str("-1"),
            Axis::Fixed(n) => write!(f, "{n}"),
        }
    }
}

/// Parsed `W*H` scale spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleSpec {
    pub width: Axis,
    pub height: Axis,
}

impl ScaleSpec {
    pub const AUTO: ScaleSpec = ScaleSpec {
        width: Axis::Auto,
        height: Axis::Auto,
    };

    /// Parse `W*H`. Anything other than exactly two `*`-separated parts is
    /// fully automatic; each side falls back to auto on its own.
    pub fn parse(raw: &str) -> Self {
        let parts: Vec<&str> = raw.split('*').collect();
        match parts.as_slice() {
            [w, h] => ScaleSpec {
                width: Axis::parse(w),
                height: Axis::parse(h),
            },
            _ => ScaleSpec::AUTO,
        }
    }

    pub fn is_auto(&self) -> bool {
        *self == ScaleSpec::AUTO
    }
}

impl Default for ScaleSpec {
    fn default() -> Self {
        ScaleSpec::AUTO
    }
}

impl fmt::Display for ScaleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.width, self.height)
    }
}

/// clap value parser for `--scale`.
///
/// `--scale` accepts hyphen-leading values so `-1*64` works, which would also
/// let it swallow a following flag (`-s -i x.png`). Tokens shaped like a flag
/// are refused instead.
pub fn parse_scale_arg(raw: &str) -> Result<String, String> {
    let mut chars = raw.chars();
    let looks_like_flag = raw.starts_with("--")
        || (chars.next() == Some('-') && chars.next().is_some_and(|c| c.is_ascii_alphabetic()));
    if looks_like_flag {
        return Err(format!("expected W*H, found flag `{raw}`"));
    }
    Ok(raw.to_string())
}

/// Immutable configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifConfig {
    pub framerate: u32,
    /// The scale string exactly as given, echoed back to the user.
    pub scale_raw: String,
    pub scale: ScaleSpec,
    /// Input path; the final segment may be a filename glob.
    pub input: String,
    pub output: PathBuf,
}

impl GifConfig {
    pub fn new(framerate: u32, scale: &str, input: &str, output: PathBuf) -> Self {
        Self {
            framerate,
            scale_raw: scale.to_string(),
            scale: ScaleSpec::parse(scale),
            input: input.to_string(),
            output,
        }
    }

    /// Per-frame delay derived from the framerate.
    pub fn frame_delay(&self) -> Result<FrameDelay, ConfigError> {
        FrameDelay::from_framerate(self.framerate).ok_or(ConfigError::FramerateTooHigh {
            framerate: self.framerate,
        })
    }
}
