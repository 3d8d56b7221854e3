//! Screen layout and hit regions
//!
//! The layout is recomputed from the terminal size every frame and shared
//! between the renderer and the mouse adapter, so what is drawn and what
//! is clickable can never drift apart.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of each prev/next control zone, in columns
const CONTROL_WIDTH: u16 = 3;

/// Columns per indicator dot (the dot plus one gap column)
const INDICATOR_STRIDE: u16 = 2;

/// What a click at a given cell lands on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    PrevControl,
    NextControl,
    Indicator(usize),
    Carousel,
    Notes,
}

#[derive(Clone, Debug)]
pub struct ScreenLayout {
    /// The whole carousel pane, borders included (hover region)
    pub carousel: Rect,
    /// Slide title and body area
    pub slide: Rect,
    pub prev_control: Rect,
    pub next_control: Rect,
    /// Row of indicator dots
    pub indicators: Rect,
    /// The notes pane, borders included
    pub notes: Rect,
    pub status: Rect,
    slide_count: usize,
}

impl ScreenLayout {
    pub fn new(area: Rect, slide_count: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(rows[0]);

        let carousel = columns[0];
        let notes = columns[1];
        let inner = shrink_by_border(carousel);

        // Bottom row of the pane holds the dots, controls flank the rest
        let indicators = Rect {
            x: inner.x,
            y: inner.y + inner.height.saturating_sub(1),
            width: inner.width,
            height: inner.height.min(1),
        };
        let body_height = inner.height.saturating_sub(1);
        let prev_control = Rect {
            x: inner.x,
            y: inner.y,
            width: CONTROL_WIDTH.min(inner.width),
            height: body_height,
        };
        let next_width = CONTROL_WIDTH.min(inner.width);
        let next_control = Rect {
            x: inner.x + inner.width.saturating_sub(next_width),
            y: inner.y,
            width: next_width,
            height: body_height,
        };
        let slide = Rect {
            x: inner.x + prev_control.width,
            y: inner.y,
            width: inner
                .width
                .saturating_sub(prev_control.width + next_control.width),
            height: body_height,
        };

        Self {
            carousel,
            slide,
            prev_control,
            next_control,
            indicators,
            notes,
            status: rows[1],
            slide_count,
        }
    }

    /// Whether a cell lies anywhere in the carousel pane
    pub fn carousel_contains(&self, column: u16, row: u16) -> bool {
        contains(self.carousel, column, row)
    }

    /// Leftmost column of the centered indicator row (None when empty)
    pub fn indicator_origin(&self) -> Option<u16> {
        if self.slide_count == 0 || self.indicators.height == 0 {
            return None;
        }
        let span = self.indicator_span();
        if span > self.indicators.width {
            return None;
        }
        Some(self.indicators.x + (self.indicators.width - span) / 2)
    }

    /// Total columns the dots occupy when rendered
    fn indicator_span(&self) -> u16 {
        (self.slide_count as u16) * INDICATOR_STRIDE - 1
    }

    /// Which indicator dot, if any, a cell falls on. Each dot's hit region
    /// includes its trailing gap column so clicks don't have to be exact.
    pub fn indicator_at(&self, column: u16, row: u16) -> Option<usize> {
        let origin = self.indicator_origin()?;
        if row != self.indicators.y || column < origin {
            return None;
        }
        let offset = column - origin;
        if offset >= self.indicator_span() + 1 {
            return None;
        }
        let index = (offset / INDICATOR_STRIDE) as usize;
        (index < self.slide_count).then_some(index)
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        if let Some(index) = self.indicator_at(column, row) {
            return Some(HitTarget::Indicator(index));
        }
        if contains(self.prev_control, column, row) {
            return Some(HitTarget::PrevControl);
        }
        if contains(self.next_control, column, row) {
            return Some(HitTarget::NextControl);
        }
        if contains(self.carousel, column, row) {
            return Some(HitTarget::Carousel);
        }
        if contains(self.notes, column, row) {
            return Some(HitTarget::Notes);
        }
        None
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

fn shrink_by_border(rect: Rect) -> Rect {
    Rect {
        x: rect.x + 1,
        y: rect.y + 1,
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 80, 24), 4)
    }

    #[test]
    fn test_panes_do_not_overlap() {
        let layout = layout();
        assert!(layout.carousel.x + layout.carousel.width <= layout.notes.x + 1);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_controls_flank_the_slide() {
        let layout = layout();
        assert!(layout.prev_control.x < layout.slide.x);
        assert!(layout.next_control.x >= layout.slide.x + layout.slide.width);
    }

    #[test]
    fn test_hit_test_controls() {
        let layout = layout();
        let prev = layout.prev_control;
        let next = layout.next_control;

        assert_eq!(
            layout.hit_test(prev.x, prev.y),
            Some(HitTarget::PrevControl)
        );
        assert_eq!(
            layout.hit_test(next.x + next.width - 1, next.y),
            Some(HitTarget::NextControl)
        );
    }

    #[test]
    fn test_hit_test_indicators() {
        let layout = layout();
        let origin = layout.indicator_origin().expect("4 dots should fit");
        let row = layout.indicators.y;

        assert_eq!(layout.hit_test(origin, row), Some(HitTarget::Indicator(0)));
        assert_eq!(
            layout.hit_test(origin + 2, row),
            Some(HitTarget::Indicator(1))
        );
        assert_eq!(
            layout.hit_test(origin + 6, row),
            Some(HitTarget::Indicator(3))
        );
        // Just past the last dot's gap column is plain carousel
        assert_eq!(
            layout.hit_test(origin + 8, row),
            Some(HitTarget::Carousel)
        );
    }

    #[test]
    fn test_hit_test_panes_and_outside() {
        let layout = layout();

        assert_eq!(
            layout.hit_test(layout.slide.x + 2, layout.slide.y + 1),
            Some(HitTarget::Carousel)
        );
        assert_eq!(
            layout.hit_test(layout.notes.x + 1, layout.notes.y + 1),
            Some(HitTarget::Notes)
        );
        assert_eq!(layout.hit_test(0, 23), None, "status line is not a target");
    }

    #[test]
    fn test_empty_deck_has_no_indicators() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24), 0);
        assert!(layout.indicator_origin().is_none());
        assert_eq!(layout.indicator_at(40, layout.indicators.y), None);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 4, 2), 9);
        assert!(layout.indicator_origin().is_none(), "dots wider than the pane are hidden");
        let _ = layout.hit_test(1, 1);
    }
}
