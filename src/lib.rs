//! # folio-tui
//!
//! Reactive terminal portfolio site with scroll-driven reveal animations.
//!
//! Built on [spark-signals](https://crates.io/crates/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! Site elements are indices into columnar arrays rather than objects.
//! The rendering pipeline is purely derived-based:
//! ```text
//! Element tree -> flow derived -> frame derived -> render effect
//! ```
//!
//! Scrolling drives an intersection pass over the flow rects; each
//! reveal primitive owns one visibility observation and maps its boolean
//! signal to a declarative style. The compositor tweens displayed values
//! toward declared styles through each style's own transition, and the
//! diff renderer writes only changed cells.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Cell, Rect, Edges)
//! - [`engine`] - Element registry and columnar storage
//! - [`observe`] - Visibility observation (the reveal trigger)
//! - [`reveal`] - Reveal primitives and the variant policy table
//! - [`renderer`] - Frame buffer, style compositor, diff output
//! - [`pipeline`] - Reactive derivation and the event loop
//! - [`site`] - Routes, pages, contact form
//! - [`content`] - Static site records

pub mod content;
pub mod easing;
pub mod engine;
pub mod error;
pub mod layout;
pub mod observe;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod reveal;
pub mod site;
pub mod state;
pub mod theme;
pub mod types;

pub use types::*;

pub use engine::{
    allocate_index, get_current_parent_index, get_id, get_index, is_allocated, on_destroy,
    pop_parent_context, push_parent_context, release_index, reset_registry,
};

pub use error::SiteError;

pub use layout::{Flow, compute_flow, string_width, wrap_text};

pub use observe::{Observation, ObserveOptions, intersection_ratio, meets_threshold, observe};

pub use pipeline::{HEADER_ROWS, SiteHandle, mount, run, tick};

pub use primitives::{BlockProps, Cleanup, PropValue, TextProps, block, rule, spacer, text};

pub use renderer::{DiffRenderer, FrameBuffer};

pub use reveal::{
    Direction, MarqueeProps, Offset, RevealKind, RevealProps, RevealStyle, ScaleRevealProps,
    StaggerDirection, StaggerRevealProps, TextRevealProps, Transform, TransformOrigin, Transition,
    WordRevealProps, marquee_reveal, reveal, scale_reveal, stagger_reveal, text_reveal,
    word_reveal,
};

pub use site::{Route, current_route, navigate};
