//! Application assembly and event loop
//!
//! The app owns the carousel, the deck, and the per-frame UI state
//! (focus, pointer, notes scroll). Input adapters translate terminal
//! events into Commands; applying a Command is where a controller call
//! gets paired with the timer-kick that every manual interaction
//! performs.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use log::debug;
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::carousel::{Carousel, CarouselTiming};
use crate::constants::{EVENT_POLL_INTERVAL_MS, NOTES_SCROLL_STEP};
use crate::deck::Deck;
use crate::input::{self, Command, Focus, PointerState};
use crate::ui::layout::ScreenLayout;
use crate::ui::render;

/// Source of terminal events so tests can drive the loop without a tty
pub trait EventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

pub struct App {
    carousel: Carousel,
    deck: Deck,
    focus: Focus,
    pointer: PointerState,
    notes_scroll: u16,
    /// Whether autoplay is enabled at all for this run (--paused disables
    /// it); hover pauses are temporary and don't clear this
    autoplay: bool,
    should_quit: bool,
}

impl App {
    pub fn new(deck: Deck, timing: CarouselTiming, autoplay: bool) -> Self {
        let carousel = Carousel::new(deck.len(), timing);
        if autoplay {
            // No-op for an empty deck: the carousel stays inert
            carousel.start_auto_advance();
        }

        Self {
            carousel,
            deck,
            focus: Focus::default(),
            pointer: PointerState::new(),
            notes_scroll: 0,
            autoplay,
            should_quit: false,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn notes_scroll(&self) -> u16 {
        self.notes_scroll
    }

    pub fn pointer_inside(&self) -> bool {
        self.pointer.is_inside()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Route one terminal event through the input adapters
    pub fn handle_event(&mut self, event: &Event, layout: &ScreenLayout) {
        let command = match event {
            Event::Key(key) => input::key_command(key, self.focus),
            Event::Mouse(mouse) => input::mouse_command(mouse, layout, &mut self.pointer),
            _ => None,
        };

        if let Some(command) = command {
            self.apply(command);
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Advance => {
                self.carousel.advance();
                self.kick_timer();
            }
            Command::Retreat => {
                self.carousel.retreat();
                self.kick_timer();
            }
            Command::GoTo(index) => {
                self.carousel.go_to(index as isize);
                self.kick_timer();
            }
            Command::PauseAutoplay => self.carousel.stop_auto_advance(),
            Command::ResumeAutoplay => {
                if self.autoplay {
                    self.carousel.start_auto_advance();
                }
            }
            Command::ToggleFocus => self.focus = self.focus.toggled(),
            Command::ScrollNotesUp => {
                self.notes_scroll = self.notes_scroll.saturating_sub(NOTES_SCROLL_STEP);
            }
            Command::ScrollNotesDown => {
                self.notes_scroll = self.notes_scroll.saturating_add(NOTES_SCROLL_STEP);
            }
            Command::Quit => self.should_quit = true,
        }
    }

    /// Every manual interaction restarts the auto-advance countdown
    fn kick_timer(&self) {
        if !self.autoplay {
            return;
        }
        self.carousel.stop_auto_advance();
        self.carousel.start_auto_advance();
    }

    /// Fire the auto-advance timer if its deadline has passed. A fire is
    /// a manual advance plus an implicit kick: the deadline re-arms even
    /// when the advance itself was dropped by the transition lock.
    pub fn poll_auto_advance(&self) {
        if self.carousel.should_auto_advance() {
            debug!("Auto-advance timer fired");
            self.carousel.advance();
            self.carousel.start_auto_advance();
        }
    }
}

/// Run the event loop until the app asks to quit.
///
/// The layout is computed from the terminal size each iteration and
/// shared between the renderer and the mouse adapter.
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut dyn EventSource,
) -> Result<()> {
    while !app.should_quit() {
        let layout = ScreenLayout::new(terminal.size()?, app.deck().len());
        terminal.draw(|frame| render::draw(frame, app, &layout))?;

        if let Some(event) = events.next(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
            app.handle_event(&event, &layout);
        }
        app.poll_auto_advance();
    }

    Ok(())
}
