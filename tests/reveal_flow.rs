//! End-to-end reveal flow: element tree -> flow layout -> scroll ->
//! intersection pass -> style output -> composed frame.

use folio_tui::engine::{arrays, reset_registry};
use folio_tui::layout::compute_flow;
use folio_tui::observe;
use folio_tui::pipeline::HEADER_ROWS;
use folio_tui::pipeline::frame_derived::{create_flow_derived, create_frame_derived};
use folio_tui::primitives::{TextProps, spacer, text};
use folio_tui::renderer::compositor;
use folio_tui::reveal::{Offset, RevealProps, reveal};
use folio_tui::state::{clock, viewport};
use folio_tui::theme;

const WIDTH: u16 = 60;
const HEIGHT: u16 = 20;
const VIEW_ROWS: u16 = HEIGHT - HEADER_ROWS;

/// Content-space row the reveal's text lands on in every scenario: a
/// 40-row spacer above it, a 20-row spacer below (so the element can
/// scroll deep into the margin-adjusted viewport, like a page with a
/// footer).
const TEXT_ROW: u16 = 40;

/// Scroll offset that puts the text row well inside the viewport even
/// after the -60px bottom root margin.
const TRIGGER_SCROLL: u16 = 35;

fn setup() {
    reset_registry();
    observe::reset_observations();
    compositor::reset_compositor();
    clock::reset_clock();
    viewport::set_viewport_size(WIDTH, HEIGHT);
    viewport::reset_viewport();
}

fn process() {
    let flow = compute_flow(WIDTH);
    observe::process_intersections(&flow, viewport::scroll_offset(), WIDTH, VIEW_ROWS);
}

fn style_of(index: usize) -> folio_tui::reveal::RevealStyle {
    arrays::get_style_getter(index).expect("style getter bound")()
}

/// Build the standard scene. The spacer takes index 0, the reveal
/// container index 1, its text 2, the trailing spacer 3.
fn below_the_fold_reveal(distance_px: f32, content: &str) -> folio_tui::primitives::Cleanup {
    let _lead = spacer(TEXT_ROW);
    let cleanup = reveal(
        RevealProps {
            distance_px: Some(distance_px),
            delay_ms: 0,
            ..Default::default()
        },
        {
            let content = content.to_string();
            move || {
                text(TextProps {
                    content: content.into(),
                    ..Default::default()
                });
            }
        },
    );
    let _tail = spacer(20);
    cleanup
}

fn screen_row(scroll: u16) -> u16 {
    TEXT_ROW - scroll + HEADER_ROWS
}

#[test]
fn end_to_end_fade_slide_scenario() {
    setup();

    let cleanup = below_the_fold_reveal(30.0, "revealed content");
    let container = 1;

    // Before any intersection: hidden style
    process();
    let hidden = style_of(container);
    assert_eq!(hidden.opacity, 0.0);
    assert_eq!(hidden.transform.translate_y, Offset::Px(30.0));

    // Scroll the element into the (margin-adjusted) viewport
    let content_height = compute_flow(WIDTH).content_height;
    viewport::scroll_to(TRIGGER_SCROLL, content_height, VIEW_ROWS);
    process();

    let shown = style_of(container);
    assert_eq!(shown.opacity, 1.0);
    assert!(shown.transform.is_identity());

    // Scrolling back up never un-reveals a once-reveal
    viewport::scroll_to(0, content_height, VIEW_ROWS);
    process();
    assert_eq!(style_of(container).opacity, 1.0);

    cleanup();
}

#[test]
fn reveal_is_invisible_then_legible_in_composed_frames() {
    setup();

    let flow_derived = create_flow_derived();
    let frame_derived = create_frame_derived(flow_derived);

    let _cleanup = below_the_fold_reveal(0.0, "XYZZY");

    let content_height = compute_flow(WIDTH).content_height;
    viewport::scroll_to(TRIGGER_SCROLL, content_height, VIEW_ROWS);
    let row = screen_row(viewport::scroll_offset());

    // Frame before the trigger: the glyphs sit at the backdrop color
    let before = frame_derived.get();
    let cell = before.buffer.get(0, row).unwrap();
    assert_eq!(cell.ch, 'X');
    assert_eq!(cell.fg, theme::BG, "pre-trigger content is invisible");

    // Trigger, sample once (the transition starts here), then let it
    // play out on the clock.
    process();
    let _ = frame_derived.get();
    clock::advance_to(5_000);

    let after = frame_derived.get();
    let cell = after.buffer.get(0, row).unwrap();
    assert_eq!(cell.ch, 'X');
    assert_eq!(cell.fg, theme::FG, "post-transition content is fully legible");
}

#[test]
fn mid_transition_frame_is_between_endpoints() {
    setup();

    let flow_derived = create_flow_derived();
    let frame_derived = create_frame_derived(flow_derived);

    let _cleanup = below_the_fold_reveal(0.0, "HALFWAY");

    let content_height = compute_flow(WIDTH).content_height;
    viewport::scroll_to(TRIGGER_SCROLL, content_height, VIEW_ROWS);
    let row = screen_row(viewport::scroll_offset());

    let _ = frame_derived.get();
    process();
    let _ = frame_derived.get();

    // 200 of 800ms in: the glyph color sits strictly between bg and fg
    clock::advance_to(200);
    let mid = frame_derived.get();
    let fg = mid.buffer.get(0, row).unwrap().fg;
    assert_ne!(fg, theme::BG);
    assert_ne!(fg, theme::FG);
}

#[test]
fn teardown_before_trigger_is_safe() {
    setup();

    let cleanup = below_the_fold_reveal(30.0, "never shown");
    assert_eq!(observe::active_count(), 1);

    // Unmount before the element ever intersects
    cleanup();
    assert_eq!(observe::active_count(), 0);

    // A late-arriving intersection pass must be a no-op: no panic, no
    // state mutation on the destroyed component.
    let content_height = compute_flow(WIDTH).content_height;
    viewport::scroll_to(TRIGGER_SCROLL, content_height.max(61), VIEW_ROWS);
    process();
    process();
}

#[test]
fn mid_transition_teardown_is_safe() {
    setup();

    let flow_derived = create_flow_derived();
    let frame_derived = create_frame_derived(flow_derived);

    let cleanup = below_the_fold_reveal(0.0, "gone soon");

    let content_height = compute_flow(WIDTH).content_height;
    viewport::scroll_to(TRIGGER_SCROLL, content_height, VIEW_ROWS);
    let row = screen_row(viewport::scroll_offset());

    let _ = frame_derived.get();
    process();
    let _ = frame_derived.get();
    clock::advance_to(100);
    let _ = frame_derived.get();

    // Tear down while the tween is live
    cleanup();
    clock::advance_to(200);
    let frame = frame_derived.get();
    assert_eq!(frame.buffer.get(0, row).unwrap().ch, ' ', "released subtree paints nothing");
}

#[test]
fn full_site_navigation_smoke() {
    setup();

    let site_cleanup = folio_tui::site::mount_site();
    let flow_derived = create_flow_derived();
    let frame_derived = create_frame_derived(flow_derived);

    for route in [
        folio_tui::Route::About,
        folio_tui::Route::Projects,
        folio_tui::Route::ProjectDetail("pestrack"),
        folio_tui::Route::Brands,
        folio_tui::Route::Contact,
        folio_tui::Route::Home,
    ] {
        folio_tui::navigate(route);
        assert!(folio_tui::site::take_navigation());
        process();
        clock::advance_to(clock::now_ms() + 2_000);
        let frame = frame_derived.get();
        assert_eq!(frame.buffer.width(), WIDTH);
        assert!(frame.content_height > 0);
    }

    site_cleanup();
    assert_eq!(observe::active_count(), 0);
}
