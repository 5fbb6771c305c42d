//! Frame processing on top of the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (format sniffed from content) |
//! | **Resize** | `image::imageops::resize`, Catmull-Rom |
//! | **Encode** | `image::codecs::gif::GifEncoder`, loop forever |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for canvas math (unit testable)
//! - **Parameters**: Frame delay
//! - **Animation**: The in-memory container handed to the encoder
//! - **Backend**: [`FrameBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

mod animation;
pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use animation::{Animation, AnimationFrame};
pub use backend::{BackendError, Dimensions, FrameBackend};
pub use calculations::{fits_gif_canvas, needs_resize, resolve_target_size};
pub use operations::{assemble_animation, load_frames, resize_frames, write_animation};
pub use params::FrameDelay;
pub use rust_backend::RustBackend;
