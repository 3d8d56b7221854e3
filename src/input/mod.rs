//! Input adapters
//!
//! Each adapter translates one class of terminal event into a Command.
//! The adapters stay thin: they decide *what* was asked for, the app
//! applies it to the carousel (together with the timer-kick), and the
//! transition logic itself remains testable without a terminal.
//!
//! Five sources drive the carousel: the prev/next controls, the indicator
//! dots, focus-scoped arrow keys, hover over the carousel pane, and
//! drag-swipes across it.

pub mod gesture;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::constants::SWIPE_THRESHOLD_COLS;
use crate::ui::layout::{HitTarget, ScreenLayout};
use crate::utils::digit_to_index;
use self::gesture::{SwipeDirection, SwipeTracker};

/// Which pane keyboard input is scoped to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Carousel,
    Notes,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Carousel => Focus::Notes,
            Focus::Notes => Focus::Carousel,
        }
    }
}

/// A fully-translated input action, ready for the app to apply
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    GoTo(usize),
    PauseAutoplay,
    ResumeAutoplay,
    ToggleFocus,
    ScrollNotesUp,
    ScrollNotesDown,
    Quit,
}

/// Translate a key press.
///
/// Arrow keys drive the carousel only while the carousel pane holds
/// focus; with focus on the notes pane they scroll the notes instead.
/// Digit keys select an indicator directly ('1' is the first slide).
pub fn key_command(key: &KeyEvent, focus: Focus) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Tab => Some(Command::ToggleFocus),
        KeyCode::Char('n') => Some(Command::Advance),
        KeyCode::Char('p') => Some(Command::Retreat),
        KeyCode::Left if focus == Focus::Carousel => Some(Command::Retreat),
        KeyCode::Right if focus == Focus::Carousel => Some(Command::Advance),
        KeyCode::Up if focus == Focus::Notes => Some(Command::ScrollNotesUp),
        KeyCode::Down if focus == Focus::Notes => Some(Command::ScrollNotesDown),
        KeyCode::Char(ch) => digit_to_index(ch).map(Command::GoTo),
        _ => None,
    }
}

/// Pointer state carried across mouse events: whether the pointer is over
/// the carousel pane, and any swipe in progress.
#[derive(Debug)]
pub struct PointerState {
    inside: bool,
    swipe: SwipeTracker,
}

impl PointerState {
    pub fn new() -> Self {
        Self {
            inside: false,
            swipe: SwipeTracker::new(SWIPE_THRESHOLD_COLS),
        }
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate a mouse event.
///
/// Movement across the carousel pane's edge pauses/resumes autoplay
/// without touching the index. A left press inside the pane starts a
/// potential swipe; on release, a swipe past the threshold wins over
/// whatever the pointer happens to be on, otherwise the release is a
/// click resolved against the layout's hit regions.
pub fn mouse_command(
    event: &MouseEvent,
    layout: &ScreenLayout,
    pointer: &mut PointerState,
) -> Option<Command> {
    match event.kind {
        MouseEventKind::Moved => {
            let inside = layout.carousel_contains(event.column, event.row);
            match (pointer.inside, inside) {
                (false, true) => {
                    pointer.inside = true;
                    Some(Command::PauseAutoplay)
                }
                (true, false) => {
                    pointer.inside = false;
                    Some(Command::ResumeAutoplay)
                }
                _ => None,
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if layout.carousel_contains(event.column, event.row) {
                pointer.swipe.begin(event.column as i32);
            } else {
                pointer.swipe.cancel();
            }
            None
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(direction) = pointer.swipe.end(event.column as i32) {
                return Some(match direction {
                    SwipeDirection::Left => Command::Advance,
                    SwipeDirection::Right => Command::Retreat,
                });
            }

            match layout.hit_test(event.column, event.row)? {
                HitTarget::PrevControl => Some(Command::Retreat),
                HitTarget::NextControl => Some(Command::Advance),
                HitTarget::Indicator(index) => Some(Command::GoTo(index)),
                HitTarget::Carousel | HitTarget::Notes => None,
            }
        }
        _ => None,
    }
}
