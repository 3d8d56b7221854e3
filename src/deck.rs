//! Slide deck loading
//!
//! A deck is an ordered, fixed set of slides discovered once at startup.
//! Slides never change at runtime; the carousel only rotates a selection
//! over them.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// One unit of rotating content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub body: String,
    /// Speaker notes shown in the notes pane (may be empty)
    pub notes: String,
}

/// Ordered, immutable set of slides
#[derive(Debug, Clone, Default)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// Load a deck from a directory of slide files.
    ///
    /// Files with a `.txt` or `.md` extension are taken in lexicographic
    /// order, one slide per file. The first non-empty line is the title
    /// (a leading markdown `#` is stripped); the remainder is the body.
    /// Text after a `---` line becomes the slide's speaker notes.
    ///
    /// An empty directory yields an empty deck, which leaves the carousel
    /// inert. Unreadable files are startup errors.
    pub fn from_dir(path: &Path) -> Result<Self> {
        let entries = fs::read_dir(path)
            .with_context(|| format!("Failed to read slides directory: {}", path.display()))?;

        let mut files: Vec<_> = entries
            .collect::<std::io::Result<Vec<_>>>()
            .with_context(|| format!("Failed to list slides directory: {}", path.display()))?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|p| {
                matches!(
                    p.extension().and_then(|ext| ext.to_str()),
                    Some("txt") | Some("md")
                )
            })
            .collect();
        files.sort();

        let mut slides = Vec::with_capacity(files.len());
        for file in &files {
            let contents = fs::read_to_string(file)
                .with_context(|| format!("Failed to read slide file: {}", file.display()))?;
            let fallback_title = file
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("untitled");
            slides.push(parse_slide(fallback_title, &contents));
        }

        log::info!("Loaded {} slide(s) from {}", slides.len(), path.display());
        Ok(Self { slides })
    }

    /// Built-in demo deck used when no slides directory is given
    pub fn builtin() -> Self {
        let demo = [
            (
                "Desert Crossings",
                "Two weeks of dunes, dry lakes and star-heavy nights.\nSelf-sufficient convoy travel with a support truck.",
                "Open with the fuel logistics story; it lands well.",
            ),
            (
                "Coastal Routes",
                "Cliff roads and fishing villages at an unhurried pace.\nShort daily stages, long lunches.",
                "Mention the ferry crossing is weather dependent.",
            ),
            (
                "Highland Traverse",
                "Gravel passes above the tree line.\nCold mornings, wide views, no signal.",
                "",
            ),
            (
                "Night Markets",
                "The city legs between the long hauls.\nWhere the convoy restocks and eats properly.",
                "Close on this slide; it sets up the booking ask.",
            ),
        ];

        Self {
            slides: demo
                .iter()
                .map(|(title, body, notes)| Slide {
                    title: (*title).to_string(),
                    body: (*body).to_string(),
                    notes: (*notes).to_string(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

/// Parse one slide file's contents.
///
/// `fallback_title` is used when the file has no non-empty line.
fn parse_slide(fallback_title: &str, contents: &str) -> Slide {
    let (main, notes) = match contents.split_once("\n---\n") {
        Some((main, notes)) => (main, notes.trim().to_string()),
        None => (contents, String::new()),
    };

    let mut lines = main.lines();
    let mut title = String::new();
    for line in lines.by_ref() {
        if !line.trim().is_empty() {
            title = line.trim_start_matches('#').trim().to_string();
            break;
        }
    }
    if title.is_empty() {
        title = fallback_title.to_string();
    }

    let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();

    Slide { title, body, notes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_slides_dir() -> PathBuf {
        // Unique per-test directory so parallel tests never share a path
        use std::thread;
        use std::time::{SystemTime, UNIX_EPOCH};

        let mut base = std::env::temp_dir();
        base.push("showreel_tests");
        base.push("deck");

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tid = format!("{:?}", thread::current().id());
        base.push(format!("t_{nanos}_{tid}"));

        fs::create_dir_all(&base).expect("Failed to create temp slides dir");
        base
    }

    #[test]
    fn test_parse_slide_title_body_notes() {
        let slide = parse_slide(
            "fallback",
            "# Coastal Routes\n\nCliff roads and villages.\n---\nWeather caveat.",
        );

        assert_eq!(slide.title, "Coastal Routes");
        assert_eq!(slide.body, "Cliff roads and villages.");
        assert_eq!(slide.notes, "Weather caveat.");
    }

    #[test]
    fn test_parse_slide_without_notes() {
        let slide = parse_slide("fallback", "Plain Title\nbody line one\nbody line two");

        assert_eq!(slide.title, "Plain Title");
        assert_eq!(slide.body, "body line one\nbody line two");
        assert_eq!(slide.notes, "");
    }

    #[test]
    fn test_parse_slide_empty_uses_fallback_title() {
        let slide = parse_slide("03-highlands", "");

        assert_eq!(slide.title, "03-highlands");
        assert_eq!(slide.body, "");
    }

    #[test]
    fn test_from_dir_orders_lexicographically() {
        let dir = temp_slides_dir();
        fs::write(dir.join("02-second.txt"), "Second\nbody").unwrap();
        fs::write(dir.join("01-first.md"), "# First\nbody").unwrap();
        fs::write(dir.join("ignored.png"), "not a slide").unwrap();

        let deck = Deck::from_dir(&dir).expect("Failed to load deck");

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(0).unwrap().title, "First");
        assert_eq!(deck.get(1).unwrap().title, "Second");

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_from_dir_empty_yields_empty_deck() {
        let dir = temp_slides_dir();

        let deck = Deck::from_dir(&dir).expect("Empty dir should not be an error");
        assert!(deck.is_empty());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_from_dir_missing_is_error() {
        let dir = temp_slides_dir().join("does_not_exist");

        let result = Deck::from_dir(&dir);
        assert!(result.is_err());
        if let Err(e) = result {
            let message = format!("{:#}", e);
            assert!(message.contains("slides directory"), "unhelpful error: {}", message);
        }
    }

    #[test]
    fn test_builtin_deck_is_usable() {
        let deck = Deck::builtin();
        assert_eq!(deck.len(), 4);
        assert!(deck.slides().iter().all(|slide| !slide.title.is_empty()));
    }
}
