//! Animation clock - shared monotonic time signal.
//!
//! One clock serves every animation. The event loop advances it while
//! anything is animating; when the last subscriber unsubscribes and no
//! tween is in flight, the loop stops advancing and the UI goes idle.
//!
//! Subscribers are counted the same way the framework's shared blink
//! clocks count theirs: subscribe returns an unsubscribe closure that
//! must be called on disposal. Continuous animations (marquee bands)
//! hold a subscription for their whole lifetime.

use std::cell::Cell;

use spark_signals::{Signal, signal};

thread_local! {
    /// Monotonic time in milliseconds. Reading inside a derived or effect
    /// creates a dependency, so advancing the clock re-renders.
    static NOW_MS: Signal<u64> = signal(0);

    /// Number of continuous-animation subscribers.
    static SUBSCRIBERS: Cell<usize> = const { Cell::new(0) };
}

/// Current clock value. Tracks reactively when read inside a computation.
pub fn now_ms() -> u64 {
    NOW_MS.with(|s| s.get())
}

/// Advance the clock to an absolute value. Never moves backwards.
pub fn advance_to(ms: u64) {
    NOW_MS.with(|s| {
        if ms > s.get() {
            s.set(ms);
        }
    });
}

/// Subscribe to continuous animation frames.
///
/// Returns an unsubscribe closure. While any subscriber is live the event
/// loop keeps advancing the clock every tick.
pub fn subscribe() -> Box<dyn FnOnce()> {
    SUBSCRIBERS.with(|count| count.set(count.get() + 1));
    Box::new(|| {
        SUBSCRIBERS.with(|count| count.set(count.get().saturating_sub(1)));
    })
}

/// Whether any continuous animation is live.
pub fn has_subscribers() -> bool {
    SUBSCRIBERS.with(|count| count.get() > 0)
}

/// Reset clock state (for testing).
pub fn reset_clock() {
    NOW_MS.with(|s| s.set(0));
    SUBSCRIBERS.with(|count| count.set(0));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_clock();
    }

    #[test]
    fn test_advance_is_monotonic() {
        setup();

        advance_to(100);
        assert_eq!(now_ms(), 100);

        advance_to(50);
        assert_eq!(now_ms(), 100);

        advance_to(250);
        assert_eq!(now_ms(), 250);
    }

    #[test]
    fn test_subscribe_unsubscribe() {
        setup();

        assert!(!has_subscribers());
        let unsub1 = subscribe();
        let unsub2 = subscribe();
        assert!(has_subscribers());

        unsub1();
        assert!(has_subscribers());
        unsub2();
        assert!(!has_subscribers());
    }

    #[test]
    fn test_unsubscribe_is_saturating() {
        setup();

        let unsub = subscribe();
        unsub();
        // A reset mid-flight must not underflow on a late unsubscribe
        let unsub2 = subscribe();
        reset_clock();
        unsub2();
        assert!(!has_subscribers());
    }
}
