//! Declarative reveal styles.
//!
//! The terminal analogue of the inline style a reveal component writes:
//! target values for opacity/transform/blur plus the transition that
//! carries displayed values toward them. Styles are plain data; deriving
//! one is pure and idempotent.

use crate::easing::Easing;

// =============================================================================
// LENGTHS
// =============================================================================

/// A translation offset: absolute px or a percentage of the element's own
/// size along that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    Px(f32),
    Percent(f32),
}

impl Offset {
    pub const ZERO: Self = Offset::Px(0.0);

    /// Resolve to px against the element's own size in px.
    pub fn resolve(&self, own_size_px: f32) -> f32 {
        match *self {
            Offset::Px(px) => px,
            Offset::Percent(pct) => own_size_px * pct / 100.0,
        }
    }
}

// =============================================================================
// TRANSFORM
// =============================================================================

/// Where a transform scales/rotates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformOrigin {
    #[default]
    Center,
    BottomLeft,
    BottomCenter,
}

/// A 2D transform: translation, uniform scale, rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: Offset,
    pub translate_y: Offset,
    pub scale: f32,
    pub rotate_deg: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translate_x: Offset::ZERO,
        translate_y: Offset::ZERO,
        scale: 1.0,
        rotate_deg: 0.0,
    };

    pub const fn translate_x(px: f32) -> Self {
        Self {
            translate_x: Offset::Px(px),
            translate_y: Offset::ZERO,
            scale: 1.0,
            rotate_deg: 0.0,
        }
    }

    pub const fn translate_y(px: f32) -> Self {
        Self {
            translate_x: Offset::ZERO,
            translate_y: Offset::Px(px),
            scale: 1.0,
            rotate_deg: 0.0,
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self.translate_x, Offset::Px(x) if x == 0.0)
            && matches!(self.translate_y, Offset::Px(y) if y == 0.0)
            && self.scale == 1.0
            && self.rotate_deg == 0.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// =============================================================================
// TRANSITION
// =============================================================================

/// Timing for the move between hidden and revealed values. The same
/// delay/duration/curve applies to every animated property in lockstep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(delay_ms: u32, duration_ms: u32) -> Self {
        Self {
            delay_ms,
            duration_ms,
            easing: Easing::REVEAL,
        }
    }

    /// Eased progress through this transition at `elapsed` ms after the
    /// target changed. 0 before the delay runs out, 1 after completion.
    pub fn progress(&self, elapsed_ms: u64) -> f32 {
        let after_delay = elapsed_ms.saturating_sub(self.delay_ms as u64);
        if self.duration_ms == 0 {
            return if elapsed_ms >= self.delay_ms as u64 { 1.0 } else { 0.0 };
        }
        let t = after_delay as f32 / self.duration_ms as f32;
        self.easing.eval(t)
    }

    /// Whether the transition has fully played out.
    pub fn finished(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.delay_ms as u64 + self.duration_ms as u64
    }
}

// =============================================================================
// REVEAL STYLE
// =============================================================================

/// The declared target style of a revealable element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// 0.0 = invisible, 1.0 = fully drawn.
    pub opacity: f32,
    pub transform: Transform,
    /// Blur radius in px; rendered as dimming above half a px.
    pub blur_px: f32,
    /// Clip content to the element's laid-out rect while it moves.
    pub clip: bool,
    pub origin: TransformOrigin,
    pub transition: Transition,
}

impl RevealStyle {
    /// Fully revealed, no motion. The terminal state of every variant.
    pub const fn revealed(transition: Transition) -> Self {
        Self {
            opacity: 1.0,
            transform: Transform::IDENTITY,
            blur_px: 0.0,
            clip: false,
            origin: TransformOrigin::Center,
            transition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_resolve() {
        assert_eq!(Offset::Px(30.0).resolve(100.0), 30.0);
        assert_eq!(Offset::Percent(110.0).resolve(30.0), 33.0);
        assert_eq!(Offset::Percent(100.0).resolve(40.0), 40.0);
    }

    #[test]
    fn test_transform_identity() {
        assert!(Transform::IDENTITY.is_identity());
        assert!(!Transform::translate_y(60.0).is_identity());
        assert!(
            !Transform {
                scale: 0.95,
                ..Transform::IDENTITY
            }
            .is_identity()
        );
    }

    #[test]
    fn test_transition_progress_delay() {
        let t = Transition::new(200, 800);
        assert_eq!(t.progress(0), 0.0);
        assert_eq!(t.progress(199), 0.0);
        assert!(t.progress(600) > 0.0);
        assert_eq!(t.progress(1000), 1.0);
        assert!(t.finished(1000));
        assert!(!t.finished(999));
    }

    #[test]
    fn test_transition_zero_duration_snaps() {
        let t = Transition::new(100, 0);
        assert_eq!(t.progress(99), 0.0);
        assert_eq!(t.progress(100), 1.0);
    }

    #[test]
    fn test_progress_is_deterministic() {
        let t = Transition::new(0, 800);
        assert_eq!(t.progress(333), t.progress(333));
    }
}
