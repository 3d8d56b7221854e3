use showreel::carousel::{Carousel, CarouselTiming};
use std::thread;
use std::time::{Duration, Instant};

fn timing(interval_ms: u64, transition_ms: u64) -> CarouselTiming {
    CarouselTiming {
        advance_interval: Duration::from_millis(interval_ms),
        transition: Duration::from_millis(transition_ms),
    }
}

#[test]
fn test_initial_state() {
    let carousel = Carousel::new(4, CarouselTiming::default());
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.slide_count(), 4);
    assert!(!carousel.is_transitioning());
    assert!(!carousel.is_auto_advancing());
}

#[test]
fn test_four_slide_walk_with_wrap() {
    let carousel = Carousel::new(4, timing(1000, 0));

    carousel.advance();
    assert_eq!(carousel.current_index(), 1);
    carousel.advance();
    assert_eq!(carousel.current_index(), 2);
    carousel.advance();
    assert_eq!(carousel.current_index(), 3);
    carousel.advance();
    assert_eq!(carousel.current_index(), 0, "advance past the end wraps to the first slide");
}

#[test]
fn test_cyclic_closure() {
    // N advances from any start index land back on that index
    for n in 1..=6 {
        let carousel = Carousel::new(n, timing(1000, 0));
        carousel.go_to(n as isize / 2);
        let start = carousel.current_index();

        for _ in 0..n {
            carousel.advance();
        }
        assert_eq!(carousel.current_index(), start, "cycle of length {} must close", n);
    }
}

#[test]
fn test_retreat_wraps_to_last() {
    let carousel = Carousel::new(4, timing(1000, 0));
    carousel.retreat();
    assert_eq!(carousel.current_index(), 3);
    carousel.retreat();
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn test_wraparound_resets_to_endpoints() {
    let carousel = Carousel::new(4, timing(1000, 0));

    carousel.go_to(4);
    assert_eq!(carousel.current_index(), 0, "go_to(N) resolves to 0");

    carousel.go_to(-1);
    assert_eq!(carousel.current_index(), 3, "go_to(-1) resolves to N-1");

    // Reset, not modulo: far past the end still lands on the first slide
    carousel.go_to(7);
    assert_eq!(carousel.current_index(), 0, "go_to(N+3) resolves to 0, not 3");

    carousel.go_to(-5);
    assert_eq!(carousel.current_index(), 3);
}

#[test]
fn test_lock_drops_moves_silently() {
    let carousel = Carousel::new(5, timing(1000, 150));

    carousel.go_to(2);
    assert_eq!(carousel.current_index(), 2);

    // Dropped: not queued, not coalesced
    carousel.advance();
    carousel.retreat();
    carousel.go_to(4);
    assert_eq!(carousel.current_index(), 2);

    thread::sleep(Duration::from_millis(200));
    carousel.go_to(4);
    assert_eq!(carousel.current_index(), 4);
}

#[test]
fn test_stop_then_start_leaves_single_timer() {
    let carousel = Carousel::new(4, timing(150, 0));

    carousel.start_auto_advance();
    carousel.stop_auto_advance();
    carousel.start_auto_advance();

    // Pump the deadline the way the event loop does and count fires over
    // one and a half intervals: a doubled timer would fire twice
    let mut fires = 0;
    let started = Instant::now();
    while started.elapsed() < Duration::from_millis(225) {
        if carousel.should_auto_advance() {
            carousel.advance();
            carousel.start_auto_advance();
            fires += 1;
        }
        thread::sleep(Duration::from_millis(10));
    }

    assert_eq!(fires, 1, "exactly one advance per interval");
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_stop_auto_advance_is_noop_when_disarmed() {
    let carousel = Carousel::new(4, timing(150, 0));
    carousel.stop_auto_advance();
    assert!(!carousel.is_auto_advancing());
}

#[test]
fn test_single_slide_deck_wraps_to_itself() {
    let carousel = Carousel::new(1, timing(1000, 0));
    carousel.advance();
    assert_eq!(carousel.current_index(), 0);
    carousel.retreat();
    assert_eq!(carousel.current_index(), 0);
}
