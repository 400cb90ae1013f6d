//! Base element primitives.
//!
//! Thin constructors over the element arrays: each allocates an index,
//! binds its props, parents itself to the current context and returns a
//! cleanup that releases the subtree. Reveal wrappers build on these.

use std::rc::Rc;

use spark_signals::Signal;

use crate::engine::arrays::{self, ElementKind, TextContent};
use crate::engine::{allocate_index, get_current_parent_index, pop_parent_context,
    push_parent_context, release_index};
use crate::types::{Attr, Rgba, TextAlign, TextWrap};

// =============================================================================
// CLEANUP
// =============================================================================

/// Cleanup function returned by every element constructor.
///
/// Call it to unmount the element (and its subtree) and release all
/// resources. Cleanups of nested children may be dropped unused; the
/// parent's release reaches them through the registry.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// PROP VALUE
// =============================================================================

/// A property value that can be static, a signal, or a getter.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    Static(T),
    Signal(Signal<T>),
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<&str> for PropValue<String> {
    fn from(value: &str) -> Self {
        PropValue::Static(value.to_string())
    }
}

fn bind_text(index: usize, content: PropValue<String>) {
    match content {
        PropValue::Static(v) => arrays::set_text(index, TextContent::Static(v)),
        PropValue::Signal(s) => {
            arrays::set_text(index, TextContent::Getter(Rc::new(move || s.get())))
        }
        PropValue::Getter(g) => arrays::set_text(index, TextContent::Getter(g)),
    }
}

// =============================================================================
// TEXT
// =============================================================================

/// Properties for a text element.
#[derive(Default)]
pub struct TextProps {
    pub id: Option<String>,
    pub content: PropValue<String>,
    pub attrs: Attr,
    pub fg: Rgba,
    pub align: TextAlign,
    pub wrap: TextWrap,
    pub indent: u16,
}

/// Create a text element.
pub fn text(props: TextProps) -> Cleanup {
    let index = allocate_index(props.id.as_deref());
    arrays::set_kind(index, ElementKind::Text);
    arrays::set_parent(index, get_current_parent_index());

    bind_text(index, props.content);
    arrays::set_attrs(index, props.attrs);
    arrays::set_fg(index, props.fg);
    arrays::set_align(index, props.align);
    arrays::set_wrap(index, props.wrap);
    arrays::set_indent(index, props.indent);

    Box::new(move || release_index(index))
}

// =============================================================================
// BLOCK
// =============================================================================

/// Properties for a block container.
#[derive(Default)]
pub struct BlockProps {
    pub id: Option<String>,
    pub indent: u16,
    pub visible: Option<bool>,
}

/// Create a block container. Children created inside the closure are
/// parented to the block and stack vertically in creation order.
pub fn block(props: BlockProps, children: impl FnOnce()) -> Cleanup {
    let index = allocate_index(props.id.as_deref());
    arrays::set_kind(index, ElementKind::Block);
    arrays::set_parent(index, get_current_parent_index());
    arrays::set_indent(index, props.indent);
    if let Some(visible) = props.visible {
        arrays::set_visible(index, visible);
    }

    push_parent_context(index);
    children();
    pop_parent_context();

    Box::new(move || release_index(index))
}

// =============================================================================
// SPACER / RULE
// =============================================================================

/// Vertical gap of `rows` rows.
pub fn spacer(rows: u16) -> Cleanup {
    let index = allocate_index(None);
    arrays::set_kind(index, ElementKind::Spacer);
    arrays::set_parent(index, get_current_parent_index());
    arrays::set_extent(index, rows);
    Box::new(move || release_index(index))
}

/// Horizontal accent line, `width` cells wide.
pub fn rule(width: u16, fg: Rgba) -> Cleanup {
    let index = allocate_index(None);
    arrays::set_kind(index, ElementKind::Rule);
    arrays::set_parent(index, get_current_parent_index());
    arrays::set_extent(index, width);
    arrays::set_fg(index, fg);
    Box::new(move || release_index(index))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{is_allocated, registry, reset_registry};
    use spark_signals::signal;

    fn setup() {
        reset_registry();
    }

    #[test]
    fn test_text_creation_and_cleanup() {
        setup();

        let cleanup = text(TextProps {
            content: "Hello".into(),
            attrs: Attr::BOLD,
            ..Default::default()
        });

        assert_eq!(arrays::get_kind(0), ElementKind::Text);
        assert_eq!(arrays::get_text(0), "Hello");
        assert_eq!(arrays::get_attrs(0), Attr::BOLD);

        cleanup();
        assert!(!is_allocated(0));
        assert_eq!(arrays::get_kind(0), ElementKind::None);
    }

    #[test]
    fn test_text_reactive_content() {
        setup();

        let content = signal("Initial".to_string());
        let _cleanup = text(TextProps {
            content: content.clone().into(),
            ..Default::default()
        });

        assert_eq!(arrays::get_text(0), "Initial");
        content.set("Updated".to_string());
        assert_eq!(arrays::get_text(0), "Updated");
    }

    #[test]
    fn test_block_parents_children() {
        setup();

        let _cleanup = block(BlockProps::default(), || {
            text(TextProps {
                content: "child".into(),
                ..Default::default()
            });
        });

        assert_eq!(arrays::get_kind(0), ElementKind::Block);
        assert_eq!(arrays::get_kind(1), ElementKind::Text);
        assert_eq!(arrays::get_parent(1), Some(0));
        assert_eq!(arrays::get_children(0), vec![1]);
    }

    #[test]
    fn test_block_cleanup_releases_subtree() {
        setup();

        let cleanup = block(BlockProps::default(), || {
            text(TextProps {
                content: "a".into(),
                ..Default::default()
            });
            text(TextProps {
                content: "b".into(),
                ..Default::default()
            });
        });

        assert_eq!(registry::allocated_count(), 3);
        cleanup();
        assert_eq!(registry::allocated_count(), 0);
    }

    #[test]
    fn test_spacer_and_rule() {
        setup();

        let _s = spacer(3);
        let _r = rule(12, Rgba::rgb(255, 92, 40));

        assert_eq!(arrays::get_kind(0), ElementKind::Spacer);
        assert_eq!(arrays::get_extent(0), 3);
        assert_eq!(arrays::get_kind(1), ElementKind::Rule);
        assert_eq!(arrays::get_extent(1), 12);
    }
}
