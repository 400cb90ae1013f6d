//! Style compositor - tweens displayed values toward declared styles.
//!
//! Reveal primitives declare target styles; this module plays the role
//! the rendering engine's compositor plays for CSS transitions. When an
//! element's declared style changes, the compositor captures the
//! currently displayed values and eases them toward the new target
//! through the style's own transition (delay, duration, reveal curve).
//!
//! Terminal approximations of the sub-cell effects:
//! - translation rounds px to cells at [`CELL_PX`]
//! - rotation renders as a per-row horizontal shear
//! - scale drops rows at the far edge from the transform origin
//! - blur dims the glyphs while above half a px

use std::cell::RefCell;
use std::collections::HashMap;

use crate::reveal::style::{RevealStyle, Transition};
use crate::types::CELL_PX;

// =============================================================================
// SAMPLED VALUES
// =============================================================================

/// Concrete displayed values, with offsets resolved to px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampled {
    pub opacity: f32,
    pub tx_px: f32,
    pub ty_px: f32,
    pub scale: f32,
    pub rotate_deg: f32,
    pub blur_px: f32,
}

impl Sampled {
    fn lerp(&self, other: &Sampled, t: f32) -> Sampled {
        let f = |a: f32, b: f32| a + (b - a) * t;
        Sampled {
            opacity: f(self.opacity, other.opacity),
            tx_px: f(self.tx_px, other.tx_px),
            ty_px: f(self.ty_px, other.ty_px),
            scale: f(self.scale, other.scale),
            rotate_deg: f(self.rotate_deg, other.rotate_deg),
            blur_px: f(self.blur_px, other.blur_px),
        }
    }
}

/// Resolve a declared style against the element's own px size.
pub fn resolve(style: &RevealStyle, own_width_px: f32, own_height_px: f32) -> Sampled {
    Sampled {
        opacity: style.opacity,
        tx_px: style.transform.translate_x.resolve(own_width_px),
        ty_px: style.transform.translate_y.resolve(own_height_px),
        scale: style.transform.scale,
        rotate_deg: style.transform.rotate_deg,
        blur_px: style.blur_px,
    }
}

// =============================================================================
// TWEEN STATE
// =============================================================================

/// Key for one tweened span: the element plus a sub-index (word tokens
/// tween independently under one element).
type Key = (usize, u16);

struct Tween {
    from: Sampled,
    to: Sampled,
    start_ms: u64,
    transition: Transition,
}

impl Tween {
    fn displayed(&self, now_ms: u64) -> Sampled {
        let progress = self.transition.progress(now_ms.saturating_sub(self.start_ms));
        self.from.lerp(&self.to, progress)
    }

    fn finished(&self, now_ms: u64) -> bool {
        self.from == self.to || self.transition.finished(now_ms.saturating_sub(self.start_ms))
    }
}

thread_local! {
    static TWEENS: RefCell<HashMap<Key, Tween>> = RefCell::new(HashMap::new());
}

/// Sample the displayed style for an element span.
///
/// The first sample of a span adopts the declared style outright (mount
/// renders in place, as CSS does: a transition needs a change to run).
/// Later samples ease from the values displayed at the moment the
/// declared style last changed.
pub fn sample(
    element: usize,
    sub: u16,
    style: &RevealStyle,
    own_width_px: f32,
    own_height_px: f32,
    now_ms: u64,
) -> Sampled {
    let target = resolve(style, own_width_px, own_height_px);

    TWEENS.with(|tweens| {
        let mut tweens = tweens.borrow_mut();
        let tween = tweens.entry((element, sub)).or_insert_with(|| Tween {
            from: target,
            to: target,
            start_ms: now_ms,
            transition: style.transition,
        });

        if tween.to != target {
            tween.from = tween.displayed(now_ms);
            tween.to = target;
            tween.start_ms = now_ms;
            tween.transition = style.transition;
        }

        tween.displayed(now_ms)
    })
}

/// Whether any tween still has frames to play at `now_ms`.
pub fn any_active(now_ms: u64) -> bool {
    TWEENS.with(|tweens| tweens.borrow().values().any(|t| !t.finished(now_ms)))
}

/// Drop all tween state for an element (every sub-span).
pub fn forget(element: usize) {
    TWEENS.with(|tweens| {
        tweens.borrow_mut().retain(|&(e, _), _| e != element);
    });
}

/// Drop all tween state (for testing).
pub fn reset_compositor() {
    TWEENS.with(|tweens| tweens.borrow_mut().clear());
}

// =============================================================================
// TERMINAL MAPPING
// =============================================================================

/// Round a px length to whole cells.
pub fn px_to_cells(px: f32) -> i32 {
    (px / CELL_PX).round() as i32
}

/// Horizontal shear in cells for a row `rows_from_origin` away from the
/// transform origin. Approximates a small rotation; the factor 2
/// compensates for cell aspect.
pub fn shear_cols(rotate_deg: f32, rows_from_origin: i32) -> i32 {
    (rotate_deg.to_radians().tan() * rows_from_origin as f32 * 2.0).round() as i32
}

/// Whether a blur radius still reads as blurred (dimmed) in cells.
pub fn blur_dims(blur_px: f32) -> bool {
    blur_px > 0.5
}

// =============================================================================
// MARQUEE PHASE
// =============================================================================

/// Ms per one-cell marquee step.
pub const MARQUEE_STEP_MS: u64 = 150;

/// Current marquee phase in cells for a band of the given width.
///
/// A continuous function of the clock, independent of visibility, so the
/// band is always mid-flow when its opacity gates in.
pub fn marquee_offset(now_ms: u64, band_width: u16) -> u16 {
    if band_width == 0 {
        return 0;
    }
    ((now_ms / MARQUEE_STEP_MS) % band_width as u64) as u16
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::policy::{ResolvedReveal, RevealKind, style_for};

    fn setup() {
        reset_compositor();
    }

    fn styles(delay: u32) -> (RevealStyle, RevealStyle) {
        let mut cfg = ResolvedReveal::new(RevealKind::FadeSlide, delay);
        cfg.distance_px = 60.0;
        (style_for(&cfg, false), style_for(&cfg, true))
    }

    #[test]
    fn test_first_sample_adopts_target() {
        setup();

        let (hidden, _) = styles(0);
        let s = sample(0, 0, &hidden, 800.0, 20.0, 1000);
        assert_eq!(s.opacity, 0.0);
        assert_eq!(s.ty_px, 60.0);
        assert!(!any_active(1000));
    }

    #[test]
    fn test_tween_runs_toward_new_target() {
        setup();

        let (hidden, shown) = styles(0);
        sample(0, 0, &hidden, 800.0, 20.0, 0);

        // Target flips at t=0: the flip sample still shows the old
        // values (the transition starts here, it doesn't jump).
        let at_flip = sample(0, 0, &shown, 800.0, 20.0, 0);
        assert_eq!(at_flip.opacity, 0.0);
        assert_eq!(at_flip.ty_px, 60.0);
        assert!(any_active(0));

        // Halfway through the 800ms duration the displayed values sit
        // strictly between the endpoints.
        let mid = sample(0, 0, &shown, 800.0, 20.0, 400);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.ty_px > 0.0 && mid.ty_px < 60.0);
        assert!(any_active(400));

        // Fully played out
        let done = sample(0, 0, &shown, 800.0, 20.0, 900);
        assert_eq!(done.opacity, 1.0);
        assert_eq!(done.ty_px, 0.0);
        assert!(!any_active(900));
    }

    #[test]
    fn test_delay_holds_displayed_values() {
        setup();

        let (hidden, shown) = styles(300);
        sample(0, 0, &hidden, 800.0, 20.0, 0);
        sample(0, 0, &shown, 800.0, 20.0, 0);

        // 200ms in, still inside the 300ms delay window
        let before = sample(0, 0, &shown, 800.0, 20.0, 200);
        assert_eq!(before.opacity, 0.0);
        assert!(any_active(200));

        // Delay plus duration fully elapsed
        let done = sample(0, 0, &shown, 800.0, 20.0, 1200);
        assert_eq!(done.opacity, 1.0);
        assert!(!any_active(1200));
    }

    #[test]
    fn test_percent_offsets_resolve_against_own_size() {
        setup();

        let cfg = ResolvedReveal::new(RevealKind::ClipText, 0);
        let hidden = style_for(&cfg, false);
        let s = sample(3, 0, &hidden, 800.0, 30.0, 0);
        // translateY(110%) of a 30px-tall element
        assert_eq!(s.ty_px, 33.0);
    }

    #[test]
    fn test_forget_clears_all_sub_spans() {
        setup();

        let (hidden, _) = styles(0);
        sample(7, 0, &hidden, 100.0, 10.0, 0);
        sample(7, 3, &hidden, 100.0, 10.0, 0);
        sample(8, 0, &hidden, 100.0, 10.0, 0);

        forget(7);
        let remaining = TWEENS.with(|t| t.borrow().len());
        assert_eq!(remaining, 1);
    }

    #[test]
    fn test_px_to_cells() {
        assert_eq!(px_to_cells(60.0), 6);
        assert_eq!(px_to_cells(-30.0), -3);
        assert_eq!(px_to_cells(4.0), 0);
    }

    #[test]
    fn test_shear_small_angle() {
        assert_eq!(shear_cols(3.0, 0), 0);
        assert_eq!(shear_cols(3.0, 10), 1);
        assert_eq!(shear_cols(0.0, 50), 0);
    }

    #[test]
    fn test_marquee_phase_wraps_and_runs_while_hidden() {
        assert_eq!(marquee_offset(0, 10), 0);
        assert_eq!(marquee_offset(MARQUEE_STEP_MS * 3, 10), 3);
        assert_eq!(marquee_offset(MARQUEE_STEP_MS * 13, 10), 3);
        assert_eq!(marquee_offset(12345, 0), 0);
    }
}
