//! Reveal primitives - visibility-driven wrappers over base elements.
//!
//! Each primitive wraps its children in one block element, owns exactly
//! one visibility observation for its lifetime and binds a style getter
//! that is a pure function of the visibility signal and the instance's
//! immutable config. The observation handle lives in the element's
//! destroy callback, so teardown happens on every release path: explicit
//! cleanup, ancestor release, page navigation.

use std::rc::Rc;

use spark_signals::Signal;

use crate::engine::arrays::{self, ElementKind, TextContent};
use crate::engine::{allocate_index, get_current_parent_index, on_destroy, pop_parent_context,
    push_parent_context, release_index};
use crate::observe::{self, ObserveOptions};
use crate::primitives::Cleanup;
use crate::renderer::compositor;
use crate::state::clock;
use crate::types::{Attr, Edges, Rgba};

use super::policy::{self, Direction, ResolvedReveal, RevealKind, StaggerDirection};
use super::style::Transition;
use super::words::{self, WordsBinding};

// =============================================================================
// SHARED WIRING
// =============================================================================

/// Start the one observation a primitive instance owns, parking the
/// handle in the element's destroy callbacks. Returns the visibility
/// signal.
fn observe_into(index: usize, options: ObserveOptions) -> Signal<bool> {
    let observation = observe::observe(index, options);
    let visible = observation.visible();
    on_destroy(index, move || {
        drop(observation);
        compositor::forget(index);
    });
    visible
}

fn bind_style(index: usize, cfg: ResolvedReveal, visible: Signal<bool>) {
    arrays::set_style_getter(index, Rc::new(move || policy::style_for(&cfg, visible.get())));
}

// =============================================================================
// FADE/SLIDE REVEAL
// =============================================================================

/// Properties for the fade/slide reveal (body content).
pub struct RevealProps {
    pub direction: Direction,
    pub delay_ms: u32,
    pub duration_ms: Option<u32>,
    pub distance_px: Option<f32>,
    pub once: bool,
    pub threshold: Option<f32>,
    pub root_margin: Option<Edges>,
    pub id: Option<String>,
}

impl Default for RevealProps {
    fn default() -> Self {
        Self {
            direction: Direction::Up,
            delay_ms: 0,
            duration_ms: None,
            distance_px: None,
            once: true,
            threshold: None,
            root_margin: None,
            id: None,
        }
    }
}

/// Fade in while sliding from `distance` px opposite the reveal
/// direction. The workhorse for body content.
pub fn reveal(props: RevealProps, children: impl FnOnce()) -> Cleanup {
    let p = policy::policy(RevealKind::FadeSlide);
    let index = allocate_index(props.id.as_deref());
    arrays::set_kind(index, ElementKind::Block);
    arrays::set_parent(index, get_current_parent_index());

    let visible = observe_into(
        index,
        ObserveOptions {
            threshold: props.threshold.unwrap_or(p.threshold),
            root_margin: props.root_margin.unwrap_or(p.root_margin),
            once: props.once,
        },
    );
    let cfg = ResolvedReveal {
        kind: RevealKind::FadeSlide,
        direction: props.direction,
        distance_px: props.distance_px.unwrap_or(p.distance_px),
        transition: Transition::new(props.delay_ms, props.duration_ms.unwrap_or(p.duration_ms)),
    };
    bind_style(index, cfg, visible);

    push_parent_context(index);
    children();
    pop_parent_context();

    Box::new(move || release_index(index))
}

// =============================================================================
// CLIP-TEXT REVEAL
// =============================================================================

/// Properties for the clip-text reveal (display headlines).
#[derive(Default)]
pub struct TextRevealProps {
    pub delay_ms: u32,
    pub duration_ms: Option<u32>,
    pub id: Option<String>,
}

/// Rise into frame from below a clip edge with a slight rotation. For
/// display headlines; body content takes [`reveal`].
pub fn text_reveal(props: TextRevealProps, children: impl FnOnce()) -> Cleanup {
    clipped_reveal(RevealKind::ClipText, props.delay_ms, props.duration_ms, props.id, children)
}

// =============================================================================
// SCALE REVEAL
// =============================================================================

/// Properties for the scale reveal.
#[derive(Default)]
pub struct ScaleRevealProps {
    pub delay_ms: u32,
    pub duration_ms: Option<u32>,
    pub id: Option<String>,
}

/// Rise and settle from a slight shrink, centered. The most dramatic
/// single-shot headline reveal.
pub fn scale_reveal(props: ScaleRevealProps, children: impl FnOnce()) -> Cleanup {
    clipped_reveal(RevealKind::Scale, props.delay_ms, props.duration_ms, props.id, children)
}

fn clipped_reveal(
    kind: RevealKind,
    delay_ms: u32,
    duration_ms: Option<u32>,
    id: Option<String>,
    children: impl FnOnce(),
) -> Cleanup {
    let p = policy::policy(kind);
    let index = allocate_index(id.as_deref());
    arrays::set_kind(index, ElementKind::Block);
    arrays::set_parent(index, get_current_parent_index());

    let visible = observe_into(
        index,
        ObserveOptions {
            threshold: p.threshold,
            root_margin: p.root_margin,
            once: p.once,
        },
    );
    let mut cfg = ResolvedReveal::new(kind, delay_ms);
    if let Some(duration) = duration_ms {
        cfg.transition = Transition::new(delay_ms, duration);
    }
    bind_style(index, cfg, visible);

    push_parent_context(index);
    children();
    pop_parent_context();

    Box::new(move || release_index(index))
}

// =============================================================================
// STAGGERED CHILDREN REVEAL
// =============================================================================

/// Properties for the staggered children reveal.
pub struct StaggerRevealProps {
    pub stagger_delay_ms: u32,
    pub base_delay_ms: u32,
    pub direction: StaggerDirection,
    pub duration_ms: Option<u32>,
    pub distance_px: Option<f32>,
    pub id: Option<String>,
}

impl Default for StaggerRevealProps {
    fn default() -> Self {
        Self {
            stagger_delay_ms: 100,
            base_delay_ms: 0,
            direction: StaggerDirection::Up,
            duration_ms: None,
            distance_px: None,
            id: None,
        }
    }
}

/// Delay of staggered child `index`: fixed and index-proportional, so
/// reveal order is baked in before any intersection event arrives.
pub fn stagger_delay(base_delay_ms: u32, stagger_delay_ms: u32, index: usize) -> u32 {
    base_delay_ms + stagger_delay_ms * index as u32
}

/// Reveal a sequence of children with one shared trigger and per-child
/// index-proportional delays. Children appear in strict document order
/// with a constant inter-child delay.
pub fn stagger_reveal(props: StaggerRevealProps, children: Vec<Box<dyn FnOnce()>>) -> Cleanup {
    let p = policy::policy(RevealKind::StaggerChild);
    let container = allocate_index(props.id.as_deref());
    arrays::set_kind(container, ElementKind::Block);
    arrays::set_parent(container, get_current_parent_index());

    let visible = observe_into(
        container,
        ObserveOptions {
            threshold: p.threshold,
            root_margin: p.root_margin,
            once: p.once,
        },
    );

    let duration = props.duration_ms.unwrap_or(p.duration_ms);
    let distance = props.distance_px.unwrap_or(p.distance_px);

    push_parent_context(container);
    for (i, child) in children.into_iter().enumerate() {
        let wrapper = allocate_index(None);
        arrays::set_kind(wrapper, ElementKind::Block);
        arrays::set_parent(wrapper, Some(container));

        let cfg = ResolvedReveal {
            kind: RevealKind::StaggerChild,
            direction: props.direction.into(),
            distance_px: distance,
            transition: Transition::new(
                stagger_delay(props.base_delay_ms, props.stagger_delay_ms, i),
                duration,
            ),
        };
        bind_style(wrapper, cfg, visible.clone());
        on_destroy(wrapper, move || compositor::forget(wrapper));

        push_parent_context(wrapper);
        child();
        pop_parent_context();
    }
    pop_parent_context();

    Box::new(move || release_index(container))
}

// =============================================================================
// MARQUEE REVEAL
// =============================================================================

/// Properties for the marquee reveal.
#[derive(Default)]
pub struct MarqueeProps {
    pub delay_ms: u32,
    pub fg: Rgba,
    pub attrs: Attr,
    pub id: Option<String>,
}

/// Opacity-gate a continuously scrolling text band.
///
/// The band's scroll phase runs off the shared clock for the element's
/// whole lifetime, visible or not, so the loop is never caught
/// mid-snap when it fades in.
pub fn marquee_reveal(props: MarqueeProps, band: &str) -> Cleanup {
    let p = policy::policy(RevealKind::Marquee);
    let index = allocate_index(props.id.as_deref());
    arrays::set_kind(index, ElementKind::Marquee);
    arrays::set_parent(index, get_current_parent_index());
    arrays::set_text(index, TextContent::Static(band.to_string()));
    arrays::set_fg(index, props.fg);
    arrays::set_attrs(index, props.attrs);

    let visible = observe_into(
        index,
        ObserveOptions {
            threshold: p.threshold,
            root_margin: p.root_margin,
            once: p.once,
        },
    );
    let cfg = ResolvedReveal {
        kind: RevealKind::Marquee,
        direction: Direction::Up,
        distance_px: 0.0,
        transition: Transition::new(props.delay_ms, p.duration_ms),
    };
    bind_style(index, cfg, visible);

    // Keep the clock running while the band exists.
    let unsubscribe = clock::subscribe();
    on_destroy(index, move || unsubscribe());

    Box::new(move || release_index(index))
}

// =============================================================================
// WORD-BY-WORD REVEAL
// =============================================================================

/// Properties for the word-by-word reveal.
pub struct WordRevealProps {
    pub delay_ms: u32,
    pub word_delay_ms: u32,
    pub fg: Rgba,
    pub attrs: Attr,
    pub id: Option<String>,
}

impl Default for WordRevealProps {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            word_delay_ms: 40,
            fg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::empty(),
            id: None,
        }
    }
}

/// Reveal a string word by word, each token rising from below its own
/// baseline with a blur that sharpens as it lands. Tokens share one
/// trigger; legibility sweeps strictly left to right.
pub fn word_reveal(props: WordRevealProps, text: &str) -> Cleanup {
    let p = policy::policy(RevealKind::Word);
    let index = allocate_index(props.id.as_deref());
    arrays::set_kind(index, ElementKind::Words);
    arrays::set_parent(index, get_current_parent_index());
    arrays::set_fg(index, props.fg);
    arrays::set_attrs(index, props.attrs);

    let visible = observe_into(
        index,
        ObserveOptions {
            threshold: p.threshold,
            root_margin: p.root_margin,
            once: p.once,
        },
    );
    arrays::set_words(
        index,
        Rc::new(WordsBinding {
            tokens: words::split_words(text),
            visible,
            base_delay_ms: props.delay_ms,
            word_delay_ms: props.word_delay_ms,
        }),
    );

    Box::new(move || release_index(index))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{registry, reset_registry};
    use crate::layout::Flow;
    use crate::primitives::{TextProps, text};
    use crate::reveal::style::Offset;
    use crate::state::clock;
    use crate::types::Rect;

    fn setup() {
        reset_registry();
        observe::reset_observations();
        compositor::reset_compositor();
        clock::reset_clock();
    }

    /// Synthetic flow placing element 0 at the given rect.
    fn flow_at(rect: Rect) -> Flow {
        Flow {
            rects: vec![rect],
            content_height: rect.bottom().max(0) as u16,
        }
    }

    fn style_of(index: usize) -> crate::reveal::style::RevealStyle {
        arrays::get_style_getter(index).expect("style getter bound")()
    }

    #[test]
    fn test_reveal_style_before_and_after_trigger() {
        setup();

        let _cleanup = reveal(
            RevealProps {
                distance_px: Some(30.0),
                ..Default::default()
            },
            || {
                text(TextProps {
                    content: "body".into(),
                    ..Default::default()
                });
            },
        );

        // Hidden: opacity 0, offset 30px down
        let hidden = style_of(0);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.transform.translate_y, Offset::Px(30.0));

        // Trigger: element on screen
        observe::process_intersections(&flow_at(Rect::new(0, 2, 80, 2)), 0, 80, 24);

        let shown = style_of(0);
        assert_eq!(shown.opacity, 1.0);
        assert!(shown.transform.is_identity());
    }

    #[test]
    fn test_reveal_cleanup_tears_down_everything() {
        setup();

        let cleanup = reveal(RevealProps::default(), || {
            text(TextProps {
                content: "body".into(),
                ..Default::default()
            });
        });

        assert_eq!(observe::active_count(), 1);
        assert_eq!(registry::allocated_count(), 2);

        cleanup();
        assert_eq!(observe::active_count(), 0);
        assert_eq!(registry::allocated_count(), 0);

        // A late intersection pass is a no-op
        observe::process_intersections(&flow_at(Rect::new(0, 0, 80, 2)), 0, 80, 24);
    }

    #[test]
    fn test_nested_reveal_released_by_ancestor() {
        setup();

        let cleanup = reveal(RevealProps::default(), || {
            reveal(RevealProps { delay_ms: 100, ..Default::default() }, || {
                text(TextProps {
                    content: "inner".into(),
                    ..Default::default()
                });
            });
        });

        assert_eq!(observe::active_count(), 2);
        cleanup();
        assert_eq!(observe::active_count(), 0, "inner observation released via registry");
        assert_eq!(registry::allocated_count(), 0);
    }

    #[test]
    fn test_stagger_delays_are_index_proportional() {
        setup();

        let children: Vec<Box<dyn FnOnce()>> = (0..5)
            .map(|i| {
                Box::new(move || {
                    text(TextProps {
                        content: format!("item {i}").into(),
                        ..Default::default()
                    });
                }) as Box<dyn FnOnce()>
            })
            .collect();

        let _cleanup = stagger_reveal(StaggerRevealProps::default(), children);

        // Container 0; wrappers come in document order
        let wrappers = arrays::get_children(0);
        assert_eq!(wrappers.len(), 5);

        let mut last_delay = None;
        for (i, &w) in wrappers.iter().enumerate() {
            let delay = style_of(w).transition.delay_ms;
            assert_eq!(delay, 100 * i as u32);
            if let Some(prev) = last_delay {
                assert!(delay > prev, "delays strictly increasing in index");
            }
            last_delay = Some(delay);
        }

        // One shared observation for the whole sequence
        assert_eq!(observe::active_count(), 1);
    }

    #[test]
    fn test_stagger_delay_helper() {
        assert_eq!(stagger_delay(0, 100, 0), 0);
        assert_eq!(stagger_delay(0, 100, 4), 400);
        assert_eq!(stagger_delay(500, 120, 2), 740);
    }

    #[test]
    fn test_word_reveal_tokens_and_delays() {
        setup();

        let _cleanup = word_reveal(WordRevealProps::default(), "I lead design teams");

        let binding = arrays::get_words(0).expect("words bound");
        assert_eq!(binding.tokens, vec!["I", "lead", "design", "teams"]);
        for i in 0..4 {
            assert_eq!(
                words::token_delay(binding.base_delay_ms, binding.word_delay_ms, i),
                40 * i as u32
            );
        }
    }

    #[test]
    fn test_marquee_holds_clock_subscription() {
        setup();

        assert!(!clock::has_subscribers());
        let cleanup = marquee_reveal(MarqueeProps::default(), "LET'S WORK TOGETHER · ");
        assert!(clock::has_subscribers());

        cleanup();
        assert!(!clock::has_subscribers());
    }

    #[test]
    fn test_repeatable_reveal_toggles() {
        setup();

        let _cleanup = reveal(
            RevealProps {
                once: false,
                threshold: Some(0.5),
                root_margin: Some(Edges::default()),
                ..Default::default()
            },
            || {
                text(TextProps {
                    content: "body".into(),
                    ..Default::default()
                });
            },
        );

        let flow = flow_at(Rect::new(0, 100, 80, 4));
        observe::process_intersections(&flow, 98, 80, 24);
        assert_eq!(style_of(0).opacity, 1.0);

        observe::process_intersections(&flow, 0, 80, 24);
        assert_eq!(style_of(0).opacity, 0.0);
    }
}
