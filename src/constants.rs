//! Centralized constants for the showreel application
//!
//! This module contains all configurable numerical values used throughout
//! the application. Each constant includes documentation on its purpose,
//! unit, and recommended value range.

// ============================================================================
// AUTO-ADVANCE CONFIGURATION
// ============================================================================

/// Minimum auto-advance interval allowed.
/// Unit: seconds
/// Range: Fixed minimum, do not change without updating config validation
pub const ADVANCE_INTERVAL_MIN_SECS: u64 = 2;

/// Maximum auto-advance interval allowed.
/// Unit: seconds
/// Range: Fixed maximum (1 minute), do not change without updating config validation
pub const ADVANCE_INTERVAL_MAX_SECS: u64 = 60;

/// Default auto-advance interval when no config exists.
/// Unit: seconds
/// Recommended range: 5-15 (long enough to read a slide)
pub const ADVANCE_INTERVAL_DEFAULT_SECS: u64 = 8;

// ============================================================================
// TRANSITION CONFIGURATION
// ============================================================================

/// Minimum transition duration allowed.
/// Unit: milliseconds
/// Range: Fixed minimum, keeps the move lock observable
pub const TRANSITION_MIN_MS: u64 = 100;

/// Maximum transition duration allowed.
/// Unit: milliseconds
/// Range: Fixed maximum (3 seconds), longer locks feel unresponsive
pub const TRANSITION_MAX_MS: u64 = 3000;

/// Default transition duration. Move requests arriving while a transition
/// is in flight are dropped, so this bounds the manual navigation rate.
/// Unit: milliseconds
/// Recommended range: 300-1000
pub const TRANSITION_DEFAULT_MS: u64 = 800;

// ============================================================================
// SWIPE GESTURE CONFIGURATION
// ============================================================================

/// Canonical horizontal travel a drag must exceed to count as a swipe.
/// Unit: pointer units (pixels on pixel-reporting backends)
/// Range: Fixed default for pixel pointers and the gesture unit tests
pub const SWIPE_THRESHOLD: i32 = 50;

/// Swipe travel threshold for the cell-based terminal frontend.
/// Unit: terminal columns
/// Recommended range: 4-10 (a deliberate drag, not a sloppy click)
pub const SWIPE_THRESHOLD_COLS: i32 = 6;

// ============================================================================
// EVENT LOOP CONFIGURATION
// ============================================================================

/// Terminal event poll timeout. Bounds how late an auto-advance deadline
/// can fire when no input arrives.
/// Unit: milliseconds
/// Recommended range: 50-250 (lower = more responsive, higher = less CPU)
pub const EVENT_POLL_INTERVAL_MS: u64 = 100;

// ============================================================================
// NOTES PANE CONFIGURATION
// ============================================================================

/// Lines scrolled per Up/Down key press in the notes pane.
/// Unit: terminal rows
pub const NOTES_SCROLL_STEP: u16 = 1;
