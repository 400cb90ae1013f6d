//! Flow layout - element tree to content-space rects.
//!
//! Pure function of the element arrays and the available width. Rects are
//! in content space: y grows downward from the top of the document,
//! unaffected by scrolling (scroll is applied when compositing and when
//! computing intersections).

use crate::engine::arrays::{self, ElementKind};
use crate::reveal::words;
use crate::types::{Rect, TextWrap};

use super::text_measure::wrap_text;

/// Computed flow layout: one rect per element index plus the total
/// content height.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Flow {
    pub rects: Vec<Rect>,
    pub content_height: u16,
}

impl Flow {
    /// Rect for an element, zero-sized if it was never laid out.
    pub fn rect(&self, index: usize) -> Rect {
        self.rects.get(index).copied().unwrap_or_default()
    }
}

/// Lay out the current element tree at the given width.
///
/// Reads the tree version (and any getter-backed text signals), so calling
/// this inside a derived recomputes the flow when the tree changes.
pub fn compute_flow(width: u16) -> Flow {
    arrays::track_version();

    let mut flow = Flow::default();
    let mut y: i32 = 0;
    for root in arrays::get_roots() {
        layout_element(root, 0, width, &mut y, &mut flow);
    }
    flow.content_height = y.max(0) as u16;
    flow
}

fn place(flow: &mut Flow, index: usize, rect: Rect) {
    if flow.rects.len() <= index {
        flow.rects.resize(index + 1, Rect::default());
    }
    flow.rects[index] = rect;
}

fn layout_element(index: usize, x: i32, width: u16, y: &mut i32, flow: &mut Flow) {
    if !arrays::get_visible(index) {
        place(flow, index, Rect::new(x, *y, 0, 0));
        return;
    }

    let indent = arrays::get_indent(index);
    let x = x + indent as i32;
    let width = width.saturating_sub(indent);

    match arrays::get_kind(index) {
        ElementKind::None => {
            place(flow, index, Rect::new(x, *y, 0, 0));
        }
        ElementKind::Block => {
            let start = *y;
            for child in arrays::get_children(index) {
                layout_element(child, x, width, y, flow);
            }
            let height = (*y - start).max(0) as u16;
            place(flow, index, Rect::new(x, start, width, height));
        }
        ElementKind::Text => {
            let text = arrays::get_text(index);
            let rows = match arrays::get_wrap(index) {
                TextWrap::Wrap => wrap_text(&text, width).len() as u16,
                TextWrap::NoWrap => 1,
            };
            place(flow, index, Rect::new(x, *y, width, rows));
            *y += rows as i32;
        }
        ElementKind::Words => {
            let binding = arrays::get_words(index);
            let rows = match binding {
                Some(b) => words::layout_words(&b.tokens, width).rows,
                None => 0,
            };
            place(flow, index, Rect::new(x, *y, width, rows));
            *y += rows as i32;
        }
        ElementKind::Rule | ElementKind::Marquee => {
            place(flow, index, Rect::new(x, *y, width, 1));
            *y += 1;
        }
        ElementKind::Spacer => {
            let rows = arrays::get_extent(index);
            place(flow, index, Rect::new(x, *y, width, rows));
            *y += rows as i32;
        }
    }
}
