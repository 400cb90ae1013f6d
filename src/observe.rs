//! Visibility observation - which elements are inside the viewport.
//!
//! Each reveal instance owns exactly one observation subscription for its
//! lifetime. A subscription binds one element to a boolean visibility
//! signal; `process_intersections` re-derives every live signal from the
//! current flow rects and scroll offset, so a missed event self-corrects
//! on the next scroll tick.
//!
//! Teardown is structural: the `Observation` handle removes its registry
//! entry when dropped, so a late intersection pass after a component
//! unmounts cannot touch its signal. No callback survives its owner.

use std::cell::RefCell;
use std::collections::HashMap;

use spark_signals::{Signal, signal};

use crate::layout::Flow;
use crate::types::{CELL_PX, Edges, Rect};

// =============================================================================
// OPTIONS
// =============================================================================

/// Per-observation configuration, immutable for the subscription's life.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    /// Fraction of the element's area that must intersect the
    /// (margin-adjusted) viewport to trigger. Callers keep this in [0, 1].
    pub threshold: f32,
    /// Signed px adjustment of the viewport bounds, intersection-only.
    pub root_margin: Edges,
    /// One-shot semantics: once visible, the signal never reverts and the
    /// subscription retires itself.
    pub once: bool,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: Edges::bottom_px(-40),
            once: true,
        }
    }
}

// =============================================================================
// INTERSECTION MATH
// =============================================================================

/// Fraction of `target`'s area overlapping `root`. Pure arithmetic;
/// an empty target never intersects.
pub fn intersection_ratio(target: Rect, root: Rect) -> f32 {
    if target.is_empty() {
        return 0.0;
    }
    let overlap = target.intersect(&root);
    overlap.area() as f32 / target.area() as f32
}

/// Threshold comparison. A ratio exactly at the threshold triggers.
pub fn meets_threshold(ratio: f32, threshold: f32) -> bool {
    ratio >= threshold
}

// =============================================================================
// SUBSCRIPTION REGISTRY
// =============================================================================

struct Entry {
    element: usize,
    options: ObserveOptions,
    visible: Signal<bool>,
}

thread_local! {
    static OBSERVATIONS: RefCell<HashMap<u64, Entry>> = RefCell::new(HashMap::new());
    static NEXT_ID: RefCell<u64> = const { RefCell::new(0) };
}

/// Handle owning one observation subscription.
///
/// Dropping the handle stops the observation; the visibility signal
/// keeps its last value but can never change again.
pub struct Observation {
    id: u64,
    visible: Signal<bool>,
}

impl Observation {
    /// The boolean visibility signal. Clones share state.
    pub fn visible(&self) -> Signal<bool> {
        self.visible.clone()
    }

    /// Stop observing. Idempotent; also runs on drop.
    pub fn stop(&self) {
        OBSERVATIONS.with(|map| {
            map.borrow_mut().remove(&self.id);
        });
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Begin observing an element's intersection with the viewport.
///
/// The signal starts `false` and stays `false` forever if the element is
/// never laid out (acceptable degraded behavior for conditionally
/// rendered content).
pub fn observe(element: usize, options: ObserveOptions) -> Observation {
    let visible = signal(false);
    let id = NEXT_ID.with(|next| {
        let mut next = next.borrow_mut();
        let id = *next;
        *next += 1;
        id
    });
    OBSERVATIONS.with(|map| {
        map.borrow_mut().insert(
            id,
            Entry {
                element,
                options,
                visible: visible.clone(),
            },
        );
    });
    Observation { id, visible }
}

/// Re-derive every live visibility signal from the current layout.
///
/// `scroll` is the document scroll offset in rows; `view_width` and
/// `view_height` describe the scrollable viewport in cells. Signals only
/// change when their derived value changes, and `once` subscriptions
/// retire themselves on their first trigger.
pub fn process_intersections(flow: &Flow, scroll: u16, view_width: u16, view_height: u16) {
    let viewport = Rect::new(0, scroll as i32, view_width, view_height);

    // Decide every transition first, then release the registry borrow
    // before touching signals: setting a signal can run effects, and an
    // effect must be free to start or stop observations.
    let mut updates: Vec<(Signal<bool>, bool)> = Vec::new();
    let mut retired: Vec<u64> = Vec::new();
    OBSERVATIONS.with(|map| {
        let map = map.borrow();
        for (&id, entry) in map.iter() {
            let root = entry.options.root_margin.apply(viewport, CELL_PX);
            let ratio = intersection_ratio(flow.rect(entry.element), root);
            let now_visible = meets_threshold(ratio, entry.options.threshold);

            if entry.options.once {
                if now_visible && !entry.visible.get() {
                    updates.push((entry.visible.clone(), true));
                    retired.push(id);
                }
            } else if now_visible != entry.visible.get() {
                updates.push((entry.visible.clone(), now_visible));
            }
        }
    });

    if !retired.is_empty() {
        OBSERVATIONS.with(|map| {
            let mut map = map.borrow_mut();
            for id in retired {
                map.remove(&id);
            }
        });
    }

    for (visible, value) in updates {
        visible.set(value);
    }
}

/// Number of live subscriptions (retired and stopped ones excluded).
pub fn active_count() -> usize {
    OBSERVATIONS.with(|map| map.borrow().len())
}

/// Drop all subscriptions (for testing).
pub fn reset_observations() {
    OBSERVATIONS.with(|map| map.borrow_mut().clear());
    NEXT_ID.with(|next| *next.borrow_mut() = 0);
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_observations();
    }

    /// Flow with one element filling the given rect.
    fn flow_with_rect(element: usize, rect: Rect) -> Flow {
        let mut rects = vec![Rect::default(); element + 1];
        rects[element] = rect;
        Flow {
            rects,
            content_height: rect.bottom().max(0) as u16,
        }
    }

    #[test]
    fn test_ratio_full_and_none() {
        let root = Rect::new(0, 0, 80, 24);
        assert_eq!(intersection_ratio(Rect::new(0, 5, 80, 4), root), 1.0);
        assert_eq!(intersection_ratio(Rect::new(0, 100, 80, 4), root), 0.0);
        assert_eq!(intersection_ratio(Rect::default(), root), 0.0);
    }

    #[test]
    fn test_ratio_partial() {
        let root = Rect::new(0, 0, 80, 24);
        // 2 of 4 rows inside
        let target = Rect::new(0, 22, 80, 4);
        assert!((intersection_ratio(target, root) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_threshold_boundary() {
        // Exactly at the threshold triggers; a hair under does not.
        assert!(meets_threshold(0.15, 0.15));
        assert!(!meets_threshold(0.149_999, 0.15));
        assert!(meets_threshold(0.150_001, 0.15));
    }

    #[test]
    fn test_threshold_boundary_from_rects() {
        // 3 of 20 rows inside => ratio exactly 0.15
        let root = Rect::new(0, 0, 80, 24);
        let target = Rect::new(0, 21, 80, 20);
        let ratio = intersection_ratio(target, root);
        assert!((ratio - 0.15).abs() < 1e-6);
        assert!(meets_threshold(ratio, 0.15));
    }

    #[test]
    fn test_once_is_monotonic() {
        setup();

        let obs = observe(
            0,
            ObserveOptions {
                threshold: 0.5,
                root_margin: Edges::default(),
                once: true,
            },
        );
        let visible = obs.visible();

        // Element below the fold
        let flow = flow_with_rect(0, Rect::new(0, 100, 80, 4));
        process_intersections(&flow, 0, 80, 24);
        assert!(!visible.get());

        // Scrolled into view
        process_intersections(&flow, 90, 80, 24);
        assert!(visible.get());
        assert_eq!(active_count(), 0, "once subscription retires on trigger");

        // Scrolled back out: the signal must never revert
        process_intersections(&flow, 0, 80, 24);
        assert!(visible.get());
    }

    #[test]
    fn test_repeatable_toggles_both_ways() {
        setup();

        let obs = observe(
            0,
            ObserveOptions {
                threshold: 0.5,
                root_margin: Edges::default(),
                once: false,
            },
        );
        let visible = obs.visible();
        let flow = flow_with_rect(0, Rect::new(0, 100, 80, 4));

        process_intersections(&flow, 90, 80, 24);
        assert!(visible.get());

        process_intersections(&flow, 0, 80, 24);
        assert!(!visible.get());

        process_intersections(&flow, 95, 80, 24);
        assert!(visible.get());
        assert_eq!(active_count(), 1);
    }

    #[test]
    fn test_root_margin_delays_trigger() {
        setup();

        // -60px bottom margin shrinks a 24-row viewport to 18 rows
        let obs = observe(
            0,
            ObserveOptions {
                threshold: 1.0,
                root_margin: Edges::bottom_px(-60),
                once: true,
            },
        );
        let visible = obs.visible();

        // Fully inside the raw viewport but inside the margin band
        let flow = flow_with_rect(0, Rect::new(0, 20, 80, 4));
        process_intersections(&flow, 0, 80, 24);
        assert!(!visible.get());

        // Scroll until it clears the shrunken root
        process_intersections(&flow, 6, 80, 24);
        assert!(visible.get());
    }

    #[test]
    fn test_unattached_element_stays_false() {
        setup();

        let obs = observe(42, ObserveOptions::default());
        let visible = obs.visible();

        // Flow has no rect for element 42
        let flow = Flow::default();
        process_intersections(&flow, 0, 80, 24);
        process_intersections(&flow, 100, 80, 24);
        assert!(!visible.get());
    }

    #[test]
    fn test_teardown_is_a_no_op_for_late_events() {
        setup();

        let obs = observe(0, ObserveOptions::default());
        let visible = obs.visible();
        drop(obs);
        assert_eq!(active_count(), 0);

        // A late-arriving pass must not mutate the signal or panic
        let flow = flow_with_rect(0, Rect::new(0, 0, 80, 4));
        process_intersections(&flow, 0, 80, 24);
        assert!(!visible.get());
    }

    #[test]
    fn test_stop_is_idempotent() {
        setup();

        let obs = observe(0, ObserveOptions::default());
        obs.stop();
        obs.stop();
        drop(obs);
        assert_eq!(active_count(), 0);
    }

    #[test]
    fn test_subscriptions_are_independent() {
        setup();

        let a = observe(0, ObserveOptions { threshold: 0.5, root_margin: Edges::default(), once: true });
        let b = observe(1, ObserveOptions { threshold: 0.5, root_margin: Edges::default(), once: true });

        let mut rects = vec![Rect::default(); 2];
        rects[0] = Rect::new(0, 5, 80, 4); // on screen
        rects[1] = Rect::new(0, 100, 80, 4); // below the fold
        let flow = Flow { rects, content_height: 104 };

        process_intersections(&flow, 0, 80, 24);
        assert!(a.visible().get());
        assert!(!b.visible().get());
    }
}
