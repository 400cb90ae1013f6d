//! Scroll-driven reveal animations.
//!
//! Reveal primitives map a boolean visibility signal to a declarative
//! [`style::RevealStyle`]: opacity, transform, blur and transition
//! timing. The style is a pure function of `(visibility, config)`; actual
//! animation happens downstream in the compositor, which tweens displayed
//! values through each style's own transition.
//!
//! One state machine, six policies: every variant shares the
//! PENDING -> REVEALED transition and differs only by its row in the
//! [`policy`] table (threshold, margins, duration, hidden-state shape).

pub mod policy;
pub mod primitives;
pub mod style;
pub mod words;

pub use policy::{Direction, RevealKind, StaggerDirection};
pub use primitives::{
    MarqueeProps, RevealProps, ScaleRevealProps, StaggerRevealProps, TextRevealProps,
    WordRevealProps, marquee_reveal, reveal, scale_reveal, stagger_reveal, text_reveal,
    word_reveal,
};
pub use style::{Offset, RevealStyle, Transform, TransformOrigin, Transition};
