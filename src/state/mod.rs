//! Reactive document state - viewport/scroll and the animation clock.

pub mod clock;
pub mod viewport;

pub use clock::{advance_to, has_subscribers, now_ms, reset_clock, subscribe};
pub use viewport::{
    LINE_SCROLL, PAGE_SCROLL_FACTOR, WHEEL_SCROLL, max_scroll, reset_viewport, scroll_by,
    scroll_offset, scroll_to, set_viewport_size, viewport_height, viewport_width,
};
