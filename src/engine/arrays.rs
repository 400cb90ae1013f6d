//! Columnar element storage.
//!
//! One column per property, indexed by element index. Tree order is
//! explicit: each parent keeps its children in insertion order and
//! top-level elements are kept in a root list, because document order
//! drives both flow layout and stagger sequencing.
//!
//! Structural mutations bump a version signal so the flow and frame
//! deriveds recompute when the tree changes.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{Signal, signal};

use crate::reveal::style::RevealStyle;
use crate::reveal::words::WordsBinding;
use crate::types::{Attr, Rgba, TextAlign, TextWrap};

// =============================================================================
// ELEMENT KIND
// =============================================================================

/// What an element renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementKind {
    #[default]
    None,
    /// Container. Stacks children vertically; carries reveal bindings.
    Block,
    /// Wrapped text content.
    Text,
    /// Horizontal accent line, `extent` cells wide.
    Rule,
    /// Vertical gap, `extent` rows tall.
    Spacer,
    /// Continuously scrolling text band.
    Marquee,
    /// Word-by-word revealed text (per-word styling).
    Words,
}

/// Reactive text content: static or getter-backed.
#[derive(Clone)]
pub enum TextContent {
    Static(String),
    Getter(Rc<dyn Fn() -> String>),
}

impl TextContent {
    pub fn get(&self) -> String {
        match self {
            TextContent::Static(s) => s.clone(),
            TextContent::Getter(f) => f(),
        }
    }
}

impl Default for TextContent {
    fn default() -> Self {
        TextContent::Static(String::new())
    }
}

// =============================================================================
// COLUMNS
// =============================================================================

#[derive(Default)]
struct Columns {
    kind: Vec<ElementKind>,
    parent: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    visible: Vec<bool>,
    text: Vec<TextContent>,
    attrs: Vec<Attr>,
    fg: Vec<Rgba>,
    align: Vec<TextAlign>,
    wrap: Vec<TextWrap>,
    indent: Vec<u16>,
    extent: Vec<u16>,
    style_getter: Vec<Option<Rc<dyn Fn() -> RevealStyle>>>,
    words: Vec<Option<Rc<WordsBinding>>>,
}

thread_local! {
    static COLUMNS: RefCell<Columns> = RefCell::new(Columns::default());

    /// Top-level elements in document order.
    static ROOTS: RefCell<Vec<usize>> = RefCell::new(Vec::new());

    /// Bumped on every structural mutation.
    static VERSION: Signal<u64> = signal(0);
}

fn bump_version() {
    VERSION.with(|v| v.set(v.get() + 1));
}

/// Read the tree version, creating a reactive dependency when called from
/// a derived or effect.
pub fn track_version() -> u64 {
    VERSION.with(|v| v.get())
}

/// Grow all columns to hold `index`.
pub fn ensure_capacity(index: usize) {
    COLUMNS.with(|cols| {
        let mut cols = cols.borrow_mut();
        let len = index + 1;
        if cols.kind.len() < len {
            cols.kind.resize(len, ElementKind::None);
            cols.parent.resize(len, None);
            cols.children.resize_with(len, Vec::new);
            cols.visible.resize(len, true);
            cols.text.resize_with(len, TextContent::default);
            cols.attrs.resize(len, Attr::empty());
            cols.fg.resize(len, Rgba::TERMINAL_DEFAULT);
            cols.align.resize(len, TextAlign::Left);
            cols.wrap.resize(len, TextWrap::Wrap);
            cols.indent.resize(len, 0);
            cols.extent.resize(len, 0);
            cols.style_getter.resize_with(len, || None);
            cols.words.resize_with(len, || None);
        }
    });
}

// =============================================================================
// TREE LINKS
// =============================================================================

/// Set an element's parent and register it in document order.
///
/// `None` makes it a root. Must be called exactly once per element,
/// right after allocation.
pub fn set_parent(index: usize, parent: Option<usize>) {
    ensure_capacity(index);
    COLUMNS.with(|cols| {
        let mut cols = cols.borrow_mut();
        cols.parent[index] = parent;
        if let Some(p) = parent {
            cols.children[p].push(index);
        }
    });
    if parent.is_none() {
        ROOTS.with(|roots| roots.borrow_mut().push(index));
    }
    bump_version();
}

pub fn get_parent(index: usize) -> Option<usize> {
    COLUMNS.with(|cols| cols.borrow().parent.get(index).copied().flatten())
}

/// Children of an element, in document order.
pub fn get_children(index: usize) -> Vec<usize> {
    COLUMNS.with(|cols| {
        cols.borrow()
            .children
            .get(index)
            .cloned()
            .unwrap_or_default()
    })
}

/// Drain an element's child list (used during recursive release).
pub fn take_children(index: usize) -> Vec<usize> {
    COLUMNS.with(|cols| {
        let mut cols = cols.borrow_mut();
        match cols.children.get_mut(index) {
            Some(children) => std::mem::take(children),
            None => Vec::new(),
        }
    })
}

/// Remove an element from its parent's order list (or the root list).
pub fn unlink(index: usize) {
    let parent = get_parent(index);
    match parent {
        Some(p) => {
            COLUMNS.with(|cols| {
                let mut cols = cols.borrow_mut();
                if let Some(children) = cols.children.get_mut(p) {
                    children.retain(|&c| c != index);
                }
            });
        }
        None => {
            ROOTS.with(|roots| roots.borrow_mut().retain(|&r| r != index));
        }
    }
    bump_version();
}

/// Top-level elements in document order.
pub fn get_roots() -> Vec<usize> {
    ROOTS.with(|roots| roots.borrow().clone())
}

// =============================================================================
// PROPERTY ACCESS
// =============================================================================

macro_rules! column_accessors {
    ($set:ident, $get:ident, $field:ident, $ty:ty) => {
        pub fn $set(index: usize, value: $ty) {
            ensure_capacity(index);
            COLUMNS.with(|cols| cols.borrow_mut().$field[index] = value);
            bump_version();
        }

        pub fn $get(index: usize) -> $ty {
            COLUMNS.with(|cols| {
                cols.borrow()
                    .$field
                    .get(index)
                    .cloned()
                    .unwrap_or_default()
            })
        }
    };
}

column_accessors!(set_kind, get_kind, kind, ElementKind);
column_accessors!(set_visible, get_visible, visible, bool);
column_accessors!(set_attrs, get_attrs, attrs, Attr);
column_accessors!(set_align, get_align, align, TextAlign);
column_accessors!(set_wrap, get_wrap, wrap, TextWrap);
column_accessors!(set_indent, get_indent, indent, u16);
column_accessors!(set_extent, get_extent, extent, u16);

pub fn set_fg(index: usize, fg: Rgba) {
    ensure_capacity(index);
    COLUMNS.with(|cols| cols.borrow_mut().fg[index] = fg);
    bump_version();
}

pub fn get_fg(index: usize) -> Rgba {
    COLUMNS.with(|cols| {
        cols.borrow()
            .fg
            .get(index)
            .copied()
            .unwrap_or(Rgba::TERMINAL_DEFAULT)
    })
}

pub fn set_text(index: usize, content: TextContent) {
    ensure_capacity(index);
    COLUMNS.with(|cols| cols.borrow_mut().text[index] = content);
    bump_version();
}

/// Resolve an element's text. Getter-backed content reads its signals
/// here, so calling this inside a derived tracks them.
pub fn get_text(index: usize) -> String {
    let content = COLUMNS.with(|cols| cols.borrow().text.get(index).cloned());
    content.map(|c| c.get()).unwrap_or_default()
}

pub fn set_style_getter(index: usize, getter: Rc<dyn Fn() -> RevealStyle>) {
    ensure_capacity(index);
    COLUMNS.with(|cols| cols.borrow_mut().style_getter[index] = Some(getter));
    bump_version();
}

pub fn get_style_getter(index: usize) -> Option<Rc<dyn Fn() -> RevealStyle>> {
    COLUMNS.with(|cols| cols.borrow().style_getter.get(index).cloned().flatten())
}

pub fn set_words(index: usize, binding: Rc<WordsBinding>) {
    ensure_capacity(index);
    COLUMNS.with(|cols| cols.borrow_mut().words[index] = Some(binding));
    bump_version();
}

pub fn get_words(index: usize) -> Option<Rc<WordsBinding>> {
    COLUMNS.with(|cols| cols.borrow().words.get(index).cloned().flatten())
}

// =============================================================================
// CLEAR / RESET
// =============================================================================

/// Clear all columns at one index.
pub fn clear_at(index: usize) {
    COLUMNS.with(|cols| {
        let mut cols = cols.borrow_mut();
        if index >= cols.kind.len() {
            return;
        }
        cols.kind[index] = ElementKind::None;
        cols.parent[index] = None;
        cols.children[index].clear();
        cols.visible[index] = true;
        cols.text[index] = TextContent::default();
        cols.attrs[index] = Attr::empty();
        cols.fg[index] = Rgba::TERMINAL_DEFAULT;
        cols.align[index] = TextAlign::Left;
        cols.wrap[index] = TextWrap::Wrap;
        cols.indent[index] = 0;
        cols.extent[index] = 0;
        cols.style_getter[index] = None;
        cols.words[index] = None;
    });
    bump_version();
}

/// Drop all columns (called when the tree empties and from tests).
pub fn reset_arrays() {
    COLUMNS.with(|cols| *cols.borrow_mut() = Columns::default());
    ROOTS.with(|roots| roots.borrow_mut().clear());
    bump_version();
}
