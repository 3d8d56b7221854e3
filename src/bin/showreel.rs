// showreel CLI - terminal slideshow with auto-advancing slides
// This binary wires configuration, the slide deck, and the TUI event loop

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::{info, warn};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use showreel::carousel::{
    CarouselTiming, ADVANCE_INTERVAL_MAX_SECS, ADVANCE_INTERVAL_MIN_SECS, TRANSITION_MAX_MS,
    TRANSITION_MIN_MS,
};
use showreel::config_file::Config;
use showreel::{app, config, App, CrosstermEventSource, Deck};

/// Terminal slideshow that rotates a deck of text slides with auto-advance
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Terminal slideshow that rotates a deck of text slides with auto-advance",
    long_about = "Terminal slideshow that rotates a deck of text slides with auto-advance.

Point it at a directory of slide files (*.txt, *.md) or run it bare for the
built-in demo deck. One slide shows at a time; the deck auto-advances until
you interact with it.

CONTROLS:
  Left/Right                Previous/next slide (while the slide pane has focus)
  n / p                     Next/previous slide
  1-9                       Jump straight to a slide
  Tab                       Switch focus between the slide and notes panes
  mouse                     Click the arrows or dots; drag sideways to swipe;
                            hovering the slide pane pauses auto-advance
  q / Esc / Ctrl+C          Quit

Slide files put the title on the first line, the body after it, and
optional speaker notes after a '---' line."
)]
struct Args {
    /// Directory of slide files; the built-in demo deck is used when omitted
    slides: Option<PathBuf>,

    /// Auto-advance interval in seconds (2-60, overrides config file)
    /// NOTE: Keep range/default values in sync with ADVANCE_INTERVAL_* constants
    #[arg(long)]
    interval: Option<u64>,

    /// Transition duration in milliseconds (100-3000, overrides config file)
    #[arg(long)]
    transition_ms: Option<u64>,

    /// Start with auto-advance disabled
    #[arg(long)]
    paused: bool,

    /// Write logs to this file (stderr is unusable while the TUI owns the screen)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logger(log_file: Option<&PathBuf>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            env_logger::Builder::from_default_env()
                .filter_level(log::LevelFilter::Info)
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        None => {
            // Anything below warn would scribble over the alternate screen
            env_logger::Builder::from_default_env()
                .filter_level(log::LevelFilter::Warn)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.log_file.as_ref())?;
    info!("Starting showreel");

    let cfg = Config::load().context("Failed to load configuration")?;

    // Auto-advance interval (precedence: CLI arg > env var > config file)
    let advance_interval_secs = match args.interval {
        Some(interval)
            if (ADVANCE_INTERVAL_MIN_SECS..=ADVANCE_INTERVAL_MAX_SECS).contains(&interval) =>
        {
            info!("Auto-advance interval set via --interval argument: {} seconds", interval);
            interval
        }
        Some(interval) => {
            warn!(
                "Invalid --interval value: {} (must be {}-{} seconds). Using config file or environment variable.",
                interval, ADVANCE_INTERVAL_MIN_SECS, ADVANCE_INTERVAL_MAX_SECS
            );
            config::parse_advance_interval().unwrap_or(cfg.advance_interval_secs)
        }
        None => config::parse_advance_interval().unwrap_or(cfg.advance_interval_secs),
    };

    // Transition duration (same precedence)
    let transition_ms = match args.transition_ms {
        Some(ms) if (TRANSITION_MIN_MS..=TRANSITION_MAX_MS).contains(&ms) => {
            info!("Transition duration set via --transition-ms argument: {} ms", ms);
            ms
        }
        Some(ms) => {
            warn!(
                "Invalid --transition-ms value: {} (must be {}-{} ms). Using config file or environment variable.",
                ms, TRANSITION_MIN_MS, TRANSITION_MAX_MS
            );
            config::parse_transition_ms().unwrap_or(cfg.transition_ms)
        }
        None => config::parse_transition_ms().unwrap_or(cfg.transition_ms),
    };

    let timing = CarouselTiming {
        advance_interval: std::time::Duration::from_secs(advance_interval_secs),
        transition: std::time::Duration::from_millis(transition_ms),
    };

    let deck = match args.slides.clone().or_else(|| cfg.slides_dir.clone()) {
        Some(dir) => Deck::from_dir(&dir)?,
        None => {
            info!("No slides directory given; using the built-in demo deck");
            Deck::builtin()
        }
    };
    if deck.is_empty() {
        warn!("No slides found; the carousel will stay inert");
    }

    let mut app = App::new(deck, timing, !args.paused);

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;
    let result = app::run(&mut terminal, &mut app, &mut CrosstermEventSource);
    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    info!("showreel shutdown complete");
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
