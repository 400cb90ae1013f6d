//! Variant policy table.
//!
//! Five near-identical reveal variants (plus the word splitter) share one
//! PENDING -> REVEALED state machine; everything that differs between
//! them lives here as data. Each variant's trigger tuning (threshold,
//! root margin) and motion (duration, hidden-state shape) are intentional
//! per-variant constants, not derivations from a unified default.

use crate::types::Edges;

use super::style::{Offset, RevealStyle, Transform, TransformOrigin, Transition};

// =============================================================================
// DIRECTIONS
// =============================================================================

/// Reveal direction for fade/slide. Content enters moving this way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

/// Stagger children support only the two directions the pages use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaggerDirection {
    #[default]
    Up,
    Left,
}

impl From<StaggerDirection> for Direction {
    fn from(d: StaggerDirection) -> Self {
        match d {
            StaggerDirection::Up => Direction::Up,
            StaggerDirection::Left => Direction::Left,
        }
    }
}

// =============================================================================
// VARIANT TAGS
// =============================================================================

/// Which reveal variant an instance is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealKind {
    /// Body content: fade in while sliding from `distance` px away.
    FadeSlide,
    /// Display headlines: rise into frame from below a clip edge with a
    /// slight rotation. Clipping (not just dimming) keeps large type from
    /// reading as a dim flash.
    ClipText,
    /// The most dramatic single-shot headline reveal: rise and settle
    /// from a slight shrink, centered.
    Scale,
    /// One child of a staggered sequence.
    StaggerChild,
    /// Opacity-only gate over a continuously scrolling band.
    Marquee,
    /// One token of a word-by-word reveal.
    Word,
}

/// Trigger and motion defaults for one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy {
    pub threshold: f32,
    pub root_margin: Edges,
    pub once: bool,
    pub duration_ms: u32,
    pub distance_px: f32,
}

/// The per-variant tuning table.
pub const fn policy(kind: RevealKind) -> Policy {
    match kind {
        RevealKind::FadeSlide => Policy {
            threshold: 0.15,
            root_margin: Edges::bottom_px(-60),
            once: true,
            duration_ms: 800,
            distance_px: 60.0,
        },
        RevealKind::ClipText => Policy {
            threshold: 0.1,
            root_margin: Edges::bottom_px(-40),
            once: true,
            duration_ms: 1000,
            distance_px: 0.0,
        },
        RevealKind::Scale => Policy {
            threshold: 0.1,
            root_margin: Edges::bottom_px(-40),
            once: true,
            duration_ms: 1200,
            distance_px: 0.0,
        },
        RevealKind::StaggerChild => Policy {
            threshold: 0.1,
            root_margin: Edges::bottom_px(-40),
            once: true,
            duration_ms: 800,
            distance_px: 40.0,
        },
        RevealKind::Marquee => Policy {
            threshold: 0.05,
            root_margin: Edges::bottom_px(-20),
            once: true,
            duration_ms: 1000,
            distance_px: 0.0,
        },
        RevealKind::Word => Policy {
            threshold: 0.1,
            root_margin: Edges::bottom_px(-40),
            once: true,
            duration_ms: 600,
            distance_px: 0.0,
        },
    }
}

// =============================================================================
// STYLE DERIVATION
// =============================================================================

/// Fully resolved per-instance reveal configuration, immutable after
/// mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedReveal {
    pub kind: RevealKind,
    pub direction: Direction,
    pub distance_px: f32,
    pub transition: Transition,
}

impl ResolvedReveal {
    pub fn new(kind: RevealKind, delay_ms: u32) -> Self {
        let p = policy(kind);
        Self {
            kind,
            direction: Direction::Up,
            distance_px: p.distance_px,
            transition: Transition::new(delay_ms, p.duration_ms),
        }
    }
}

/// The shared state machine: map a visibility signal value to the
/// variant's declared style. Pure in `(cfg, visible)`.
pub fn style_for(cfg: &ResolvedReveal, visible: bool) -> RevealStyle {
    if visible {
        // Clipping is structural to the variant, not a property of the
        // hidden endpoint: the mask must still be there while content
        // rises toward identity.
        let mut style = RevealStyle::revealed(cfg.transition);
        match cfg.kind {
            RevealKind::ClipText => {
                style.clip = true;
                style.origin = TransformOrigin::BottomLeft;
            }
            RevealKind::Scale => {
                style.clip = true;
                style.origin = TransformOrigin::BottomCenter;
            }
            RevealKind::Word => {
                style.clip = true;
            }
            RevealKind::FadeSlide | RevealKind::StaggerChild | RevealKind::Marquee => {}
        }
        return style;
    }

    let slide = |direction: Direction, distance: f32| -> Transform {
        match direction {
            Direction::Up => Transform::translate_y(distance),
            Direction::Down => Transform::translate_y(-distance),
            Direction::Left => Transform::translate_x(distance),
            Direction::Right => Transform::translate_x(-distance),
        }
    };

    match cfg.kind {
        RevealKind::FadeSlide | RevealKind::StaggerChild => RevealStyle {
            opacity: 0.0,
            transform: slide(cfg.direction, cfg.distance_px),
            blur_px: 0.0,
            clip: false,
            origin: TransformOrigin::Center,
            transition: cfg.transition,
        },
        RevealKind::ClipText => RevealStyle {
            opacity: 0.0,
            transform: Transform {
                translate_y: Offset::Percent(110.0),
                rotate_deg: 3.0,
                ..Transform::IDENTITY
            },
            blur_px: 0.0,
            clip: true,
            origin: TransformOrigin::BottomLeft,
            transition: cfg.transition,
        },
        RevealKind::Scale => RevealStyle {
            opacity: 0.0,
            transform: Transform {
                translate_y: Offset::Percent(80.0),
                scale: 0.95,
                ..Transform::IDENTITY
            },
            blur_px: 0.0,
            clip: true,
            origin: TransformOrigin::BottomCenter,
            transition: cfg.transition,
        },
        RevealKind::Marquee => RevealStyle {
            opacity: 0.0,
            transform: Transform::IDENTITY,
            blur_px: 0.0,
            clip: false,
            origin: TransformOrigin::Center,
            transition: cfg.transition,
        },
        RevealKind::Word => RevealStyle {
            opacity: 0.0,
            transform: Transform {
                translate_y: Offset::Percent(100.0),
                ..Transform::IDENTITY
            },
            blur_px: 3.0,
            clip: true,
            origin: TransformOrigin::Center,
            transition: cfg.transition,
        },
    }
}
