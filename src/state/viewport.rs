//! Viewport state - terminal size and document scroll offset.
//!
//! One scrollable document viewport. Scroll operations clamp against the
//! content height computed by the flow layout; callers pass the current
//! bounds in because layout is derived elsewhere.

use spark_signals::{Signal, signal};

// =============================================================================
// SCROLL CONSTANTS
// =============================================================================

/// Scroll amount for arrow keys (rows).
pub const LINE_SCROLL: u16 = 1;

/// Scroll amount for the mouse wheel.
pub const WHEEL_SCROLL: u16 = 3;

/// Page Up/Down scrolls this fraction of the viewport.
pub const PAGE_SCROLL_FACTOR: f32 = 0.9;

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static VIEWPORT_WIDTH: Signal<u16> = signal(80);
    static VIEWPORT_HEIGHT: Signal<u16> = signal(24);
    static SCROLL_OFFSET: Signal<u16> = signal(0);
}

/// Current viewport width signal read.
pub fn viewport_width() -> u16 {
    VIEWPORT_WIDTH.with(|s| s.get())
}

/// Current viewport height signal read.
pub fn viewport_height() -> u16 {
    VIEWPORT_HEIGHT.with(|s| s.get())
}

/// Update the viewport size (terminal resize).
pub fn set_viewport_size(width: u16, height: u16) {
    VIEWPORT_WIDTH.with(|s| s.set(width));
    VIEWPORT_HEIGHT.with(|s| s.set(height));
}

/// Current scroll offset in rows.
pub fn scroll_offset() -> u16 {
    SCROLL_OFFSET.with(|s| s.get())
}

/// Maximum scroll offset for the given bounds.
pub fn max_scroll(content_height: u16, view_height: u16) -> u16 {
    content_height.saturating_sub(view_height)
}

/// Set the scroll offset, clamped to the given bounds.
pub fn scroll_to(offset: u16, content_height: u16, view_height: u16) {
    let clamped = offset.min(max_scroll(content_height, view_height));
    SCROLL_OFFSET.with(|s| s.set(clamped));
}

/// Scroll by a delta, clamped.
///
/// Returns `true` if the offset changed, `false` at a boundary.
pub fn scroll_by(delta: i32, content_height: u16, view_height: u16) -> bool {
    let current = scroll_offset();
    let max = max_scroll(content_height, view_height);
    let next = ((current as i32) + delta).clamp(0, max as i32) as u16;
    if next == current {
        return false;
    }
    SCROLL_OFFSET.with(|s| s.set(next));
    true
}

/// Rows scrolled by one Page Up/Down press.
pub fn page_scroll(view_height: u16) -> i32 {
    ((view_height as f32) * PAGE_SCROLL_FACTOR).max(1.0) as i32
}

/// Reset scroll and size (page navigation and tests).
pub fn reset_viewport() {
    SCROLL_OFFSET.with(|s| s.set(0));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        set_viewport_size(80, 24);
        reset_viewport();
    }

    #[test]
    fn test_scroll_clamps_to_bounds() {
        setup();

        // Content 100 rows, view 24 rows -> max scroll 76
        assert!(scroll_by(10, 100, 24));
        assert_eq!(scroll_offset(), 10);

        assert!(scroll_by(1000, 100, 24));
        assert_eq!(scroll_offset(), 76);

        // At the boundary
        assert!(!scroll_by(1, 100, 24));
        assert_eq!(scroll_offset(), 76);
    }

    #[test]
    fn test_scroll_negative() {
        setup();

        scroll_to(20, 100, 24);
        assert!(scroll_by(-5, 100, 24));
        assert_eq!(scroll_offset(), 15);

        assert!(scroll_by(-100, 100, 24));
        assert_eq!(scroll_offset(), 0);
        assert!(!scroll_by(-1, 100, 24));
    }

    #[test]
    fn test_short_content_never_scrolls() {
        setup();

        assert_eq!(max_scroll(10, 24), 0);
        assert!(!scroll_by(5, 10, 24));
        assert_eq!(scroll_offset(), 0);
    }

    #[test]
    fn test_page_scroll() {
        assert_eq!(page_scroll(24), 21);
        assert_eq!(page_scroll(1), 1);
    }

    #[test]
    fn test_constants() {
        assert_eq!(LINE_SCROLL, 1);
        assert_eq!(WHEEL_SCROLL, 3);
        assert!((PAGE_SCROLL_FACTOR - 0.9).abs() < 0.001);
    }
}
