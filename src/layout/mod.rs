//! Flow layout and text measurement.
//!
//! The page is a one-dimensional vertical flow: blocks stack their
//! children in document order, text heights come from display-width-aware
//! wrapping, and the total content height feeds the scroll bounds.

pub mod flow;
pub mod text_measure;

pub use flow::{Flow, compute_flow};
pub use text_measure::{string_width, wrap_text};
