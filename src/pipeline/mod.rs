//! Render pipeline - reactive derivation from element tree to terminal.
//!
//! ```text
//! Element arrays -> flow derived -> frame derived -> render effect
//! ```

pub mod frame_derived;
pub mod mount;

pub use frame_derived::{
    FrameResult, HEADER_ROWS, create_flow_derived, create_frame_derived, set_overlay,
};
pub use mount::{SiteHandle, mount, run, tick};
