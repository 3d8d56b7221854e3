use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-exported so callers validating timing values don't reach into constants
pub use crate::constants::{
    ADVANCE_INTERVAL_DEFAULT_SECS, ADVANCE_INTERVAL_MAX_SECS, ADVANCE_INTERVAL_MIN_SECS,
    TRANSITION_DEFAULT_MS, TRANSITION_MAX_MS, TRANSITION_MIN_MS,
};

/// Timing knobs for a carousel instance.
///
/// Both durations are injected so tests can run at millisecond scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselTiming {
    /// How long the auto-advance timer waits between slides
    pub advance_interval: Duration,
    /// How long the move lock is held after a slide change
    pub transition: Duration,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            advance_interval: Duration::from_secs(ADVANCE_INTERVAL_DEFAULT_SECS),
            transition: Duration::from_millis(TRANSITION_DEFAULT_MS),
        }
    }
}

/// Carousel state shared across modules
#[derive(Clone)]
pub struct Carousel {
    inner: Arc<Mutex<CarouselInner>>,
}

pub struct CarouselInner {
    /// Number of slides in the deck; fixed for the life of the carousel
    pub slide_count: usize,
    /// Index of the active slide, always in [0, slide_count)
    pub current_index: usize,
    /// Deadline of the in-flight transition; while set and in the future,
    /// all move requests are dropped (not queued)
    pub transition_until: Option<Instant>,
    /// Next auto-advance fire time (None = timer disarmed)
    pub advance_deadline: Option<Instant>,
    /// Timing configuration (see CarouselTiming)
    pub timing: CarouselTiming,
}

impl CarouselInner {
    /// The transition lock release is a deadline passing, never a cancel.
    fn release_transition_if_due(&mut self, now: Instant) {
        if let Some(until) = self.transition_until {
            if now >= until {
                self.transition_until = None;
            }
        }
    }
}

impl Carousel {
    pub fn new(slide_count: usize, timing: CarouselTiming) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CarouselInner {
                slide_count,
                current_index: 0,
                transition_until: None,
                advance_deadline: None,
                timing,
            })),
        }
    }

    pub fn lock(&self) -> parking_lot::MutexGuard<'_, CarouselInner> {
        self.inner.lock()
    }

    pub fn slide_count(&self) -> usize {
        self.inner.lock().slide_count
    }

    pub fn current_index(&self) -> usize {
        self.inner.lock().current_index
    }

    /// Move the carousel to `target`.
    ///
    /// This is the sole state-mutating primitive. While a transition is in
    /// flight the request is dropped silently. Out-of-range targets are
    /// normalized by wraparound: past the end resets to the first slide,
    /// before the start resets to the last. With an empty deck this is a
    /// permanent no-op.
    pub fn go_to(&self, target: isize) {
        let mut state = self.inner.lock();
        if state.slide_count == 0 {
            return;
        }

        let now = Instant::now();
        state.release_transition_if_due(now);
        if state.transition_until.is_some() {
            log::debug!("Move to slide {} dropped: transition in flight", target);
            return;
        }

        // Wraparound resets to an endpoint rather than taking a modulus;
        // every in-tree caller only ever passes current +/- 1.
        let resolved = if target >= state.slide_count as isize {
            0
        } else if target < 0 {
            state.slide_count - 1
        } else {
            target as usize
        };

        state.current_index = resolved;
        state.transition_until = Some(now + state.timing.transition);
        log::debug!("Showing slide {}", resolved);
    }

    /// Move to the next slide (wraps to the first after the last)
    pub fn advance(&self) {
        let target = self.inner.lock().current_index as isize + 1;
        self.go_to(target);
    }

    /// Move to the previous slide (wraps to the last before the first)
    pub fn retreat(&self) {
        let target = self.inner.lock().current_index as isize - 1;
        self.go_to(target);
    }

    /// Whether a move is currently in flight (further moves are dropped)
    pub fn is_transitioning(&self) -> bool {
        let mut state = self.inner.lock();
        state.release_transition_if_due(Instant::now());
        state.transition_until.is_some()
    }

    /// Arm the auto-advance timer.
    ///
    /// Arming always replaces any existing deadline, so at most one timer
    /// exists no matter how call sites pair this with stop_auto_advance().
    /// With an empty deck the carousel stays inert and nothing is armed.
    pub fn start_auto_advance(&self) {
        let mut state = self.inner.lock();
        if state.slide_count == 0 {
            return;
        }
        let deadline = Instant::now() + state.timing.advance_interval;
        state.advance_deadline = Some(deadline);
        log::debug!(
            "Auto-advance armed: next slide in {:?}",
            state.timing.advance_interval
        );
    }

    /// Disarm the auto-advance timer, if armed. Has no effect on a pending
    /// transition release.
    pub fn stop_auto_advance(&self) {
        let mut state = self.inner.lock();
        if state.advance_deadline.take().is_some() {
            log::debug!("Auto-advance disarmed");
        }
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.inner.lock().advance_deadline.is_some()
    }

    /// Check if the auto-advance deadline has passed.
    ///
    /// The event loop polls this; on true it advances and re-arms, so a
    /// timer fire behaves exactly like a manual advance plus timer-kick.
    pub fn should_auto_advance(&self) -> bool {
        let state = self.inner.lock();
        match state.advance_deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }

    /// Time left until the next auto-advance fire (None if disarmed)
    pub fn remaining_until_advance(&self) -> Option<Duration> {
        let state = self.inner.lock();
        state
            .advance_deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn fast_timing() -> CarouselTiming {
        CarouselTiming {
            advance_interval: Duration::from_millis(200),
            transition: Duration::from_millis(80),
        }
    }

    #[test]
    fn test_moves_dropped_while_transitioning() {
        let carousel = Carousel::new(4, fast_timing());

        carousel.advance();
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.is_transitioning());

        // Dropped, not queued: the index must not change
        carousel.advance();
        carousel.go_to(3);
        assert_eq!(carousel.current_index(), 1, "moves under the lock must be dropped");

        thread::sleep(Duration::from_millis(120));
        assert!(!carousel.is_transitioning(), "lock release always fires");

        carousel.advance();
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_transition_release_unaffected_by_stop() {
        let carousel = Carousel::new(3, fast_timing());

        carousel.start_auto_advance();
        carousel.advance();
        assert!(carousel.is_transitioning());

        // stop_auto_advance cancels the periodic timer only
        carousel.stop_auto_advance();
        assert!(carousel.is_transitioning());
        assert!(!carousel.is_auto_advancing());

        thread::sleep(Duration::from_millis(120));
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn test_empty_deck_stays_inert() {
        let carousel = Carousel::new(0, fast_timing());

        carousel.advance();
        carousel.retreat();
        carousel.go_to(5);
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_transitioning());

        carousel.start_auto_advance();
        assert!(!carousel.is_auto_advancing(), "empty deck must never arm the timer");
    }

    #[test]
    fn test_start_auto_advance_is_idempotent() {
        let carousel = Carousel::new(3, fast_timing());

        carousel.start_auto_advance();
        carousel.start_auto_advance();
        carousel.start_auto_advance();
        assert!(carousel.is_auto_advancing());

        // A single deadline exists, so a single interval elapses before
        // exactly one fire becomes due
        assert!(!carousel.should_auto_advance());
        thread::sleep(Duration::from_millis(250));
        assert!(carousel.should_auto_advance());
    }

    #[test]
    fn test_timer_kick_resets_countdown() {
        let carousel = Carousel::new(3, fast_timing());
        carousel.start_auto_advance();

        thread::sleep(Duration::from_millis(120));

        // The kick pattern every input source uses
        carousel.stop_auto_advance();
        carousel.start_auto_advance();

        // The old deadline (at 200ms) must not fire
        thread::sleep(Duration::from_millis(120));
        assert!(!carousel.should_auto_advance(), "kick must restart the countdown");

        thread::sleep(Duration::from_millis(120));
        assert!(carousel.should_auto_advance());
    }

    #[test]
    fn test_remaining_until_advance() {
        let carousel = Carousel::new(3, fast_timing());
        assert!(carousel.remaining_until_advance().is_none());

        carousel.start_auto_advance();
        let remaining = carousel.remaining_until_advance().unwrap();
        assert!(remaining <= Duration::from_millis(200));
    }
}
