//! The site - routes, header chrome, pages and the contact form.
//!
//! Navigation rebuilds the page tree inside a router effect: the old
//! page's cleanup runs first (releasing every element and observation),
//! then the new page mounts and the next intersection pass triggers its
//! above-the-fold reveals.

pub mod contact;
mod pages;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent};
use spark_signals::{Signal, effect, signal};

use crate::content::PROJECTS;
use crate::layout::text_measure::string_width;
use crate::pipeline::frame_derived::{clear_overlay, set_overlay};
use crate::primitives::Cleanup;
use crate::renderer::FrameBuffer;
use crate::state::viewport;
use crate::theme;
use crate::types::Attr;

// =============================================================================
// ROUTES
// =============================================================================

/// The site's pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Projects,
    ProjectDetail(&'static str),
    Brands,
    Contact,
}

thread_local! {
    static CURRENT_ROUTE: Signal<Route> = signal(Route::Home);

    /// Cleanup of the currently mounted page tree.
    static PAGE_CLEANUP: RefCell<Option<Cleanup>> = const { RefCell::new(None) };

    /// Set on navigation, consumed by the event loop to re-run the
    /// intersection pass against the fresh tree.
    static NAV_DIRTY: Cell<bool> = const { Cell::new(false) };
}

pub fn current_route() -> Route {
    CURRENT_ROUTE.with(|r| r.get())
}

/// Navigate to a route. Scroll resets to the top of the new page.
pub fn navigate(route: Route) {
    if current_route() == route {
        return;
    }
    viewport::reset_viewport();
    CURRENT_ROUTE.with(|r| r.set(route));
    NAV_DIRTY.with(|dirty| dirty.set(true));
    tracing::debug!(?route, "navigated");
}

/// Consume the navigation flag (event-loop side).
pub fn take_navigation() -> bool {
    NAV_DIRTY.with(|dirty| dirty.replace(false))
}

// =============================================================================
// MOUNT
// =============================================================================

/// Mount the site: header overlay plus a router effect that swaps page
/// trees as the route signal changes.
pub fn mount_site() -> Cleanup {
    set_overlay(Rc::new(draw_header));

    let stop_router = effect(move || {
        let route = current_route();
        if let Some(cleanup) = PAGE_CLEANUP.with(|c| c.borrow_mut().take()) {
            cleanup();
        }
        let cleanup = pages::build_page(route);
        PAGE_CLEANUP.with(|c| *c.borrow_mut() = Some(cleanup));
    });

    Box::new(move || {
        stop_router();
        if let Some(cleanup) = PAGE_CLEANUP.with(|c| c.borrow_mut().take()) {
            cleanup();
        }
        clear_overlay();
    })
}

// =============================================================================
// HEADER
// =============================================================================

const NAV_ITEMS: &[(&str, Route)] = &[
    ("1 home", Route::Home),
    ("2 about", Route::About),
    ("3 work", Route::Projects),
    ("4 brands", Route::Brands),
    ("5 contact", Route::Contact),
];

fn draw_header(buffer: &mut FrameBuffer) {
    let width = viewport::viewport_width();
    let route = current_route();

    buffer.put_str(1, 0, "AZURE MALM", theme::FG, Attr::BOLD, None);

    let mut x = width as i32;
    for (label, item_route) in NAV_ITEMS.iter().rev() {
        x -= string_width(label) as i32 + 3;
        let active = route == *item_route
            || (matches!(route, Route::ProjectDetail(_)) && *item_route == Route::Projects);
        let (fg, attrs) = if active {
            (theme::ACCENT, Attr::BOLD)
        } else {
            (theme::MUTED, Attr::empty())
        };
        buffer.put_str(x, 0, label, fg, attrs, None);
    }

    for col in 0..width {
        buffer.put_char(col as i32, 1, '─', theme::OUTLINE, Attr::empty(), None);
    }
}

// =============================================================================
// KEYS
// =============================================================================

/// Site-level key handling: form input, page navigation, project
/// browsing. Returns true when the key was consumed.
pub fn handle_key(key: &KeyEvent) -> bool {
    if current_route() == Route::Contact && contact::handle_key(key) {
        return true;
    }

    match key.code {
        KeyCode::Char('1') => {
            navigate(Route::Home);
            true
        }
        KeyCode::Char('2') => {
            navigate(Route::About);
            true
        }
        KeyCode::Char('3') => {
            navigate(Route::Projects);
            true
        }
        KeyCode::Char('4') => {
            navigate(Route::Brands);
            true
        }
        KeyCode::Char('5') => {
            navigate(Route::Contact);
            true
        }
        KeyCode::Enter | KeyCode::Right if current_route() == Route::Projects => {
            navigate(Route::ProjectDetail(PROJECTS[0].slug));
            true
        }
        KeyCode::Right => {
            if let Route::ProjectDetail(slug) = current_route() {
                let i = PROJECTS.iter().position(|p| p.slug == slug).unwrap_or(0);
                navigate(Route::ProjectDetail(PROJECTS[(i + 1) % PROJECTS.len()].slug));
                true
            } else {
                false
            }
        }
        KeyCode::Left => {
            if matches!(current_route(), Route::ProjectDetail(_)) {
                navigate(Route::Projects);
                true
            } else {
                false
            }
        }
        _ => false,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{registry, reset_registry};
    use crate::observe;
    use crate::renderer::compositor;
    use crate::state::clock;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn setup() {
        reset_registry();
        observe::reset_observations();
        compositor::reset_compositor();
        clock::reset_clock();
        contact::reset_form();
        viewport::set_viewport_size(80, 24);
        viewport::reset_viewport();
        CURRENT_ROUTE.with(|r| r.set(Route::Home));
        NAV_DIRTY.with(|d| d.set(false));
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_mount_builds_and_cleanup_releases() {
        setup();

        let cleanup = mount_site();
        assert!(registry::allocated_count() > 0);
        assert!(observe::active_count() > 0);

        cleanup();
        assert_eq!(registry::allocated_count(), 0);
        assert_eq!(observe::active_count(), 0);
    }

    #[test]
    fn test_navigation_swaps_page_trees() {
        setup();

        let cleanup = mount_site();
        assert!(registry::allocated_count() > 0);

        assert!(handle_key(&press(KeyCode::Char('2'))));
        assert_eq!(current_route(), Route::About);
        assert!(take_navigation());
        assert!(!take_navigation());
        assert!(registry::allocated_count() > 0);

        cleanup();
        assert_eq!(registry::allocated_count(), 0);
        assert_eq!(observe::active_count(), 0, "no observation leaks across pages");
    }

    #[test]
    fn test_project_browsing_keys() {
        setup();

        let cleanup = mount_site();
        navigate(Route::Projects);

        assert!(handle_key(&press(KeyCode::Enter)));
        assert_eq!(current_route(), Route::ProjectDetail(PROJECTS[0].slug));

        assert!(handle_key(&press(KeyCode::Right)));
        assert_eq!(current_route(), Route::ProjectDetail(PROJECTS[1].slug));

        assert!(handle_key(&press(KeyCode::Left)));
        assert_eq!(current_route(), Route::Projects);

        cleanup();
    }

    #[test]
    fn test_navigate_resets_scroll() {
        setup();

        let cleanup = mount_site();
        viewport::scroll_to(30, 200, 22);
        assert_eq!(viewport::scroll_offset(), 30);

        navigate(Route::About);
        assert_eq!(viewport::scroll_offset(), 0);

        cleanup();
    }

    #[test]
    fn test_unhandled_keys_fall_through() {
        setup();
        let cleanup = mount_site();
        assert!(!handle_key(&press(KeyCode::Up)));
        assert!(!handle_key(&press(KeyCode::Char('q'))));
        cleanup();
    }
}
