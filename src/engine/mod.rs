//! Element engine - registry and columnar element storage.
//!
//! Site elements are indices into parallel arrays rather than objects.
//! The registry owns index allocation and lifecycle; the arrays own the
//! per-element columns (kind, tree links, text, reveal bindings).

pub mod arrays;
pub mod registry;

pub use registry::{
    allocate_index, get_current_parent_index, get_id, get_index, is_allocated, on_destroy,
    pop_parent_context, push_parent_context, release_index, reset_registry,
};
