//! Mount - application lifecycle and event loop.
//!
//! `mount()` builds the site tree, wires the reactive render pipeline
//! and takes over the terminal. `run()`/`tick()` drive the event loop:
//! keys scroll the viewport or navigate, every scroll is followed by an
//! intersection pass, and the animation clock only advances while
//! something is actually animating.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, size};
use spark_signals::effect;

use crate::error::SiteError;
use crate::layout::compute_flow;
use crate::observe;
use crate::primitives::Cleanup;
use crate::renderer::{DiffRenderer, compositor};
use crate::site;
use crate::state::{clock, viewport};

use super::frame_derived::{HEADER_ROWS, create_flow_derived, create_frame_derived};

// =============================================================================
// SITE HANDLE
// =============================================================================

/// Handle returned by [`mount`]. Unmounting stops the render effect,
/// releases the element tree and restores the terminal.
pub struct SiteHandle {
    stop_effect: Option<Box<dyn FnOnce()>>,
    site_cleanup: Option<Cleanup>,
    renderer: Rc<RefCell<DiffRenderer>>,
    running: Arc<AtomicBool>,
    needs_intersections: Cell<bool>,
    last_tick: Cell<Instant>,
}

impl SiteHandle {
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request a graceful shutdown; the event loop exits on its next turn.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Stop rendering, release the tree and restore the terminal.
    pub fn unmount(mut self) {
        self.running.store(false, Ordering::SeqCst);

        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
        if let Some(cleanup) = self.site_cleanup.take() {
            cleanup();
        }

        let _ = self.renderer.borrow_mut().exit_fullscreen();
        let _ = disable_raw_mode();
        tracing::info!("site unmounted");
    }
}

impl Drop for SiteHandle {
    fn drop(&mut self) {
        // Best-effort terminal restore if unmount was never called.
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
        if let Some(cleanup) = self.site_cleanup.take() {
            cleanup();
        }
        let _ = self.renderer.borrow_mut().exit_fullscreen();
        let _ = disable_raw_mode();
    }
}

// =============================================================================
// MOUNT
// =============================================================================

/// Mount the site: raw mode, alternate screen, element tree, reactive
/// render pipeline.
pub fn mount() -> Result<SiteHandle, SiteError> {
    enable_raw_mode()?;
    let (width, height) = size()?;
    viewport::set_viewport_size(width, height);

    let renderer = Rc::new(RefCell::new(DiffRenderer::new()));
    renderer.borrow_mut().enter_fullscreen()?;

    let site_cleanup = site::mount_site();

    let flow_derived = create_flow_derived();
    let frame_derived = create_frame_derived(flow_derived);

    let running = Arc::new(AtomicBool::new(true));
    let running_for_effect = running.clone();
    let renderer_for_effect = renderer.clone();

    // The one render effect: re-runs whenever the frame derived's inputs
    // change, diffs against the previous frame, writes the delta.
    let stop_effect = effect(move || {
        if !running_for_effect.load(Ordering::SeqCst) {
            return;
        }
        let result = frame_derived.get();
        if let Err(error) = renderer_for_effect.borrow_mut().render(&result.buffer) {
            tracing::warn!(%error, "render failed");
        }
    });

    tracing::info!(width, height, "site mounted");

    Ok(SiteHandle {
        stop_effect: Some(Box::new(stop_effect)),
        site_cleanup: Some(site_cleanup),
        renderer,
        running,
        needs_intersections: Cell::new(true),
        last_tick: Cell::new(Instant::now()),
    })
}

// =============================================================================
// EVENT LOOP
// =============================================================================

/// Run the event loop once (polls for ~16ms).
///
/// Returns `Ok(false)` when the application should stop.
pub fn tick(handle: &SiteHandle) -> Result<bool, SiteError> {
    if !handle.is_running() {
        return Ok(false);
    }

    if event::poll(Duration::from_millis(16))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if !site::handle_key(&key) {
                    handle_global_key(handle, key.code, key.modifiers);
                }
                handle.needs_intersections.set(true);
            }
            Event::Resize(width, height) => {
                viewport::set_viewport_size(width, height);
                handle.renderer.borrow_mut().invalidate();
                handle.needs_intersections.set(true);
            }
            _ => {}
        }
    }

    if site::take_navigation() {
        handle.needs_intersections.set(true);
    }

    // Visibility is re-derived from live state, never event playback: a
    // missed event self-corrects here on the next pass.
    if handle.needs_intersections.get() {
        let flow = compute_flow(viewport::viewport_width());
        observe::process_intersections(
            &flow,
            viewport::scroll_offset(),
            viewport::viewport_width(),
            viewport::viewport_height().saturating_sub(HEADER_ROWS),
        );
        handle.needs_intersections.set(false);
    }

    // Advance animation time only while something animates; the clock
    // freezes when idle so the UI stops re-rendering.
    let now = Instant::now();
    let dt = now.duration_since(handle.last_tick.get());
    handle.last_tick.set(now);
    if clock::has_subscribers() || compositor::any_active(clock::now_ms()) {
        clock::advance_to(clock::now_ms() + dt.as_millis() as u64);
    }

    site::contact::sync_status();

    Ok(handle.is_running())
}

/// Run the event loop until stopped.
pub fn run(handle: &SiteHandle) -> Result<(), SiteError> {
    while tick(handle)? {}
    Ok(())
}

fn handle_global_key(handle: &SiteHandle, code: KeyCode, modifiers: KeyModifiers) {
    let width = viewport::viewport_width();
    let view_height = viewport::viewport_height().saturating_sub(HEADER_ROWS);
    let content_height = compute_flow(width).content_height;
    let scroll = |delta: i32| {
        viewport::scroll_by(delta, content_height, view_height);
    };

    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => handle.stop(),
        KeyCode::Char('q') | KeyCode::Esc => handle.stop(),
        KeyCode::Up => scroll(-(viewport::LINE_SCROLL as i32)),
        KeyCode::Down => scroll(viewport::LINE_SCROLL as i32),
        KeyCode::PageUp => scroll(-viewport::page_scroll(view_height)),
        KeyCode::PageDown => scroll(viewport::page_scroll(view_height)),
        KeyCode::Home => viewport::scroll_to(0, content_height, view_height),
        KeyCode::End => {
            viewport::scroll_to(u16::MAX, content_height, view_height);
        }
        _ => {}
    }
}

// =============================================================================
// TESTS
// =============================================================================
