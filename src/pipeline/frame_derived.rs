//! Frame derivation - compose the element tree into a frame buffer.
//!
//! A pure-ish derived: reads the element arrays, the flow layout, the
//! scroll offset and the animation clock, samples each revealable
//! element's displayed style through the compositor, and paints cells.
//! Re-runs automatically when any of those inputs change.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{Derived, derived};

use crate::engine::arrays::{self, ElementKind};
use crate::layout::text_measure::{string_width, wrap_text};
use crate::layout::{Flow, compute_flow};
use crate::renderer::FrameBuffer;
use crate::renderer::compositor::{self, blur_dims, px_to_cells, shear_cols};
use crate::reveal::policy::{self, Direction, ResolvedReveal, RevealKind};
use crate::reveal::style::Transition;
use crate::reveal::words::{layout_words, token_delay};
use crate::state::{clock, viewport};
use crate::theme;
use crate::types::{Attr, CELL_PX, Rect, TextAlign, TextWrap};

/// Rows reserved for the fixed header overlay; content scrolls beneath.
pub const HEADER_ROWS: u16 = 2;

// =============================================================================
// FLOW DERIVED
// =============================================================================

/// Reactive flow layout: recomputes when the tree or viewport width
/// changes.
pub fn create_flow_derived() -> Derived<Flow> {
    derived(move || {
        let width = viewport::viewport_width();
        compute_flow(width)
    })
}

// =============================================================================
// OVERLAY
// =============================================================================

thread_local! {
    /// Painter for fixed chrome (the site header) drawn over the frame.
    static OVERLAY: RefCell<Option<Rc<dyn Fn(&mut FrameBuffer)>>> = const { RefCell::new(None) };
}

/// Install the overlay painter. The painter runs inside the frame
/// derived, so signals it reads become dependencies.
pub fn set_overlay(painter: Rc<dyn Fn(&mut FrameBuffer)>) {
    OVERLAY.with(|overlay| *overlay.borrow_mut() = Some(painter));
}

/// Remove the overlay painter.
pub fn clear_overlay() {
    OVERLAY.with(|overlay| *overlay.borrow_mut() = None);
}

// =============================================================================
// FRAME DERIVED
// =============================================================================

/// One composed frame plus the scroll bounds it was composed against.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    pub buffer: FrameBuffer,
    pub content_height: u16,
}

/// Inherited paint state while walking the tree.
#[derive(Clone, Copy)]
struct Paint {
    opacity: f32,
    dx_px: f32,
    dy_px: f32,
    rotate_deg: f32,
    origin_row: i32,
    scale_skip_rows: u16,
    scale_top_row: i32,
    dim: bool,
    clip: Rect,
}

/// Create the frame derived over a flow derived.
pub fn create_frame_derived(
    flow_derived: Derived<Flow>,
) -> Derived<FrameResult> {
    derived(move || {
        let width = viewport::viewport_width();
        let height = viewport::viewport_height();
        let scroll = viewport::scroll_offset();
        let now = clock::now_ms();
        arrays::track_version();
        let flow = flow_derived.get();

        let mut buffer = FrameBuffer::new(width, height, theme::BG);

        let paint = Paint {
            opacity: 1.0,
            dx_px: 0.0,
            dy_px: 0.0,
            rotate_deg: 0.0,
            origin_row: 0,
            scale_skip_rows: 0,
            scale_top_row: 0,
            dim: false,
            clip: Rect::new(
                0,
                HEADER_ROWS as i32,
                width,
                height.saturating_sub(HEADER_ROWS),
            ),
        };

        for root in arrays::get_roots() {
            draw_element(root, &mut buffer, &flow, scroll, now, paint);
        }

        let overlay = OVERLAY.with(|overlay| overlay.borrow().clone());
        if let Some(painter) = overlay {
            painter(&mut buffer);
        }

        FrameResult {
            buffer,
            content_height: flow.content_height,
        }
    })
}

// =============================================================================
// ELEMENT PAINTING
// =============================================================================

fn screen_y(content_y: i32, scroll: u16) -> i32 {
    content_y - scroll as i32 + HEADER_ROWS as i32
}

fn draw_element(
    index: usize,
    buffer: &mut FrameBuffer,
    flow: &Flow,
    scroll: u16,
    now: u64,
    paint: Paint,
) {
    if !arrays::get_visible(index) {
        return;
    }

    let rect = flow.rect(index);

    match arrays::get_kind(index) {
        ElementKind::None | ElementKind::Spacer => {}
        ElementKind::Block => {
            let mut child_paint = paint;

            if let Some(getter) = arrays::get_style_getter(index) {
                let style = getter();
                let own_w_px = rect.width as f32 * CELL_PX;
                let own_h_px = rect.height.max(1) as f32 * CELL_PX;
                let s = compositor::sample(index, 0, &style, own_w_px, own_h_px, now);

                // The clip edge sits at the laid-out rect, positioned by
                // ancestor transforms only; the element's own motion
                // happens inside it.
                let clip_x = rect.x + px_to_cells(paint.dx_px);
                let clip_y = screen_y(rect.y, scroll) + px_to_cells(paint.dy_px);
                if style.clip {
                    let clip_rect = Rect::new(clip_x, clip_y, rect.width, rect.height);
                    child_paint.clip = paint.clip.intersect(&clip_rect);
                }

                child_paint.opacity = paint.opacity * s.opacity;
                child_paint.dx_px = paint.dx_px + s.tx_px;
                child_paint.dy_px = paint.dy_px + s.ty_px;
                child_paint.dim = paint.dim || blur_dims(s.blur_px);
                if s.rotate_deg.abs() > 0.01 {
                    child_paint.rotate_deg = s.rotate_deg;
                    child_paint.origin_row = clip_y + rect.height as i32 - 1;
                }
                if s.scale < 0.999 {
                    let scaled_rows = (rect.height as f32 * s.scale).round() as u16;
                    child_paint.scale_skip_rows = rect.height.saturating_sub(scaled_rows);
                    child_paint.scale_top_row = clip_y;
                }
            }

            for child in arrays::get_children(index) {
                draw_element(child, buffer, flow, scroll, now, child_paint);
            }
        }
        ElementKind::Text => draw_text(index, buffer, rect, scroll, paint),
        ElementKind::Rule => draw_rule(index, buffer, rect, scroll, paint),
        ElementKind::Marquee => draw_marquee(index, buffer, rect, scroll, now, paint),
        ElementKind::Words => draw_words(index, buffer, rect, scroll, now, paint),
    }
}

fn element_fg(index: usize, paint: Paint) -> crate::types::Rgba {
    let fg = arrays::get_fg(index);
    let fg = if fg.is_terminal_default() { theme::FG } else { fg };
    fg.faded(theme::BG, paint.opacity)
}

fn element_attrs(index: usize, paint: Paint) -> Attr {
    let mut attrs = arrays::get_attrs(index);
    if paint.dim {
        attrs |= Attr::DIM;
    }
    attrs
}

fn row_skipped(y: i32, paint: Paint) -> bool {
    paint.scale_skip_rows > 0 && (y - paint.scale_top_row) < paint.scale_skip_rows as i32
}

fn draw_text(index: usize, buffer: &mut FrameBuffer, rect: Rect, scroll: u16, paint: Paint) {
    if rect.width == 0 {
        return;
    }
    let text = arrays::get_text(index);
    let lines = match arrays::get_wrap(index) {
        TextWrap::Wrap => wrap_text(&text, rect.width),
        TextWrap::NoWrap => vec![text],
    };
    let fg = element_fg(index, paint);
    let attrs = element_attrs(index, paint);
    let align = arrays::get_align(index);

    let base_x = rect.x + px_to_cells(paint.dx_px);
    let base_y = screen_y(rect.y, scroll) + px_to_cells(paint.dy_px);

    for (row, line) in lines.iter().enumerate() {
        let y = base_y + row as i32;
        if row_skipped(y, paint) {
            continue;
        }
        let align_offset = match align {
            TextAlign::Left => 0,
            TextAlign::Center => (rect.width.saturating_sub(string_width(line)) / 2) as i32,
            TextAlign::Right => rect.width.saturating_sub(string_width(line)) as i32,
        };
        let x = base_x + align_offset + shear_cols(paint.rotate_deg, paint.origin_row - y);
        buffer.put_str(x, y, line, fg, attrs, Some(paint.clip));
    }
}

fn draw_rule(index: usize, buffer: &mut FrameBuffer, rect: Rect, scroll: u16, paint: Paint) {
    let width = arrays::get_extent(index).min(rect.width);
    let fg = element_fg(index, paint);
    let x = rect.x + px_to_cells(paint.dx_px);
    let y = screen_y(rect.y, scroll) + px_to_cells(paint.dy_px);
    let line: String = "─".repeat(width as usize);
    buffer.put_str(x, y, &line, fg, element_attrs(index, paint), Some(paint.clip));
}

fn draw_marquee(
    index: usize,
    buffer: &mut FrameBuffer,
    rect: Rect,
    scroll: u16,
    now: u64,
    paint: Paint,
) {
    let band: Vec<char> = arrays::get_text(index).chars().collect();
    if band.is_empty() || rect.width == 0 {
        return;
    }

    // The band's own style only gates opacity.
    let mut opacity = paint.opacity;
    if let Some(getter) = arrays::get_style_getter(index) {
        let style = getter();
        let s = compositor::sample(
            index,
            0,
            &style,
            rect.width as f32 * CELL_PX,
            CELL_PX,
            now,
        );
        opacity *= s.opacity;
    }

    let phase = compositor::marquee_offset(now, band.len() as u16) as usize;
    let fg = {
        let fg = arrays::get_fg(index);
        let fg = if fg.is_terminal_default() { theme::MUTED } else { fg };
        fg.faded(theme::BG, opacity)
    };
    let attrs = element_attrs(index, paint);
    let x = rect.x + px_to_cells(paint.dx_px);
    let y = screen_y(rect.y, scroll) + px_to_cells(paint.dy_px);

    for col in 0..rect.width {
        let ch = band[(phase + col as usize) % band.len()];
        buffer.put_char(x + col as i32, y, ch, fg, attrs, Some(paint.clip));
    }
}

fn draw_words(
    index: usize,
    buffer: &mut FrameBuffer,
    rect: Rect,
    scroll: u16,
    now: u64,
    paint: Paint,
) {
    let Some(binding) = arrays::get_words(index) else {
        return;
    };
    if rect.width == 0 {
        return;
    }

    let layout = layout_words(&binding.tokens, rect.width);
    let visible = binding.visible.get();
    let word_policy = policy::policy(RevealKind::Word);
    let base_fg = {
        let fg = arrays::get_fg(index);
        if fg.is_terminal_default() { theme::FG } else { fg }
    };
    let base_attrs = arrays::get_attrs(index);
    let base_x = rect.x + px_to_cells(paint.dx_px);
    let base_y = screen_y(rect.y, scroll) + px_to_cells(paint.dy_px);

    for (i, token) in binding.tokens.iter().enumerate() {
        if token.is_empty() {
            continue;
        }
        let pos = layout.positions[i];

        let cfg = ResolvedReveal {
            kind: RevealKind::Word,
            direction: Direction::Up,
            distance_px: 0.0,
            transition: Transition::new(
                token_delay(binding.base_delay_ms, binding.word_delay_ms, i),
                word_policy.duration_ms,
            ),
        };
        let style = policy::style_for(&cfg, visible);
        let s = compositor::sample(
            index,
            i as u16,
            &style,
            pos.width as f32 * CELL_PX,
            CELL_PX,
            now,
        );

        // Each token clips to its own baseline row and rises into it.
        let token_x = base_x + pos.col as i32;
        let row_y = base_y + pos.row as i32;
        if row_skipped(row_y, paint) {
            continue;
        }
        let clip = paint
            .clip
            .intersect(&Rect::new(token_x, row_y, pos.width, 1));
        let y = row_y + px_to_cells(s.ty_px);

        let mut attrs = base_attrs;
        if paint.dim || blur_dims(s.blur_px) {
            attrs |= Attr::DIM;
        }
        let fg = base_fg.faded(theme::BG, paint.opacity * s.opacity);
        buffer.put_str(token_x, y, token, fg, attrs, Some(clip));
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reset_registry;
    use crate::observe;
    use crate::primitives::{TextProps, text};
    use crate::reveal::{RevealProps, reveal};
    use crate::state::viewport::{reset_viewport, set_viewport_size};

    fn setup() {
        reset_registry();
        observe::reset_observations();
        compositor::reset_compositor();
        clock::reset_clock();
        clear_overlay();
        set_viewport_size(40, 12);
        reset_viewport();
    }

    fn frame() -> FrameResult {
        let flow = create_flow_derived();
        let fd = create_frame_derived(flow);
        fd.get()
    }

    fn row_string(buffer: &FrameBuffer, y: u16) -> String {
        (0..buffer.width())
            .map(|x| buffer.get(x, y).unwrap().ch)
            .collect()
    }

    #[test]
    fn test_text_paints_below_header() {
        setup();

        let _t = text(TextProps {
            content: "hello".into(),
            ..Default::default()
        });

        let result = frame();
        assert!(row_string(&result.buffer, HEADER_ROWS).starts_with("hello"));
    }

    #[test]
    fn test_scroll_shifts_content_up() {
        setup();

        let _a = text(TextProps {
            content: "first".into(),
            ..Default::default()
        });
        let _b = text(TextProps {
            content: "second".into(),
            ..Default::default()
        });

        viewport::scroll_to(1, 100, 10);
        let result = frame();
        assert!(row_string(&result.buffer, HEADER_ROWS).starts_with("second"));
    }

    #[test]
    fn test_hidden_reveal_paints_at_background() {
        setup();

        let _r = reveal(
            RevealProps {
                distance_px: Some(0.0),
                ..Default::default()
            },
            || {
                text(TextProps {
                    content: "secret".into(),
                    ..Default::default()
                });
            },
        );

        // Never intersected: opacity 0, fg collapses into the backdrop
        let result = frame();
        let cell = result.buffer.get(0, HEADER_ROWS).unwrap();
        assert_eq!(cell.fg, theme::BG);
    }

    #[test]
    fn test_revealed_content_paints_foreground() {
        setup();

        let _r = reveal(RevealProps::default(), || {
            text(TextProps {
                content: "shown".into(),
                ..Default::default()
            });
        });

        // Trigger, then let the transition play out on the clock
        let flow = compute_flow(40);
        observe::process_intersections(&flow, 0, 40, 10);
        clock::advance_to(2000);

        let result = frame();
        let cell = result.buffer.get(0, HEADER_ROWS).unwrap();
        assert_eq!(cell.ch, 's');
        assert_eq!(cell.fg, theme::FG);
    }

    #[test]
    fn test_overlay_paints_over_header_rows() {
        setup();

        set_overlay(Rc::new(|buffer: &mut FrameBuffer| {
            buffer.put_str(0, 0, "NAV", theme::ACCENT, Attr::BOLD, None);
        }));

        let result = frame();
        assert!(row_string(&result.buffer, 0).starts_with("NAV"));
    }

    #[test]
    fn test_content_height_reported() {
        setup();

        let _s = crate::primitives::spacer(30);
        let result = frame();
        assert_eq!(result.content_height, 30);
    }
}
