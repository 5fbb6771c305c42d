//! Parameter types for frame operations.
//!
//! These describe *what* the encoder should do, not *how*. The
//! [`operations`](super::operations) module fills them in and hands them to the
//! [`backend`](super::backend), which keeps the pipeline testable with a mock.
//!
//! - [`FrameDelay`] — per-frame display time in GIF centiseconds.

/// GIF time unit per second.
const TICKS_PER_SECOND: u32 = 100;

/// Display time of one frame, in hundredths of a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDelay(u16);

impl FrameDelay {
    /// `100 / framerate` with integer division.
    ///
    /// Returns `None` when the result would be below one tick, i.e. for
    /// framerates above 100 (and for zero, which has no meaningful delay).
    pub fn from_framerate(framerate: u32) -> Option<Self> {
        let ticks = TICKS_PER_SECOND.checked_div(framerate)?;
        if ticks < 1 {
            return None;
        }
        u16::try_from(ticks).ok().map(Self)
    }

    pub fn from_centiseconds(ticks: u16) -> Self {
        Self(ticks)
    }

    pub fn centiseconds(self) -> u16 {
        self.0
    }
}
