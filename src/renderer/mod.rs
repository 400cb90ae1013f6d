//! Terminal rendering - frame buffer, style compositor, diff output.

pub mod compositor;
pub mod diff;
pub mod frame;

pub use diff::DiffRenderer;
pub use frame::FrameBuffer;
