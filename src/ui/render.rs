//! Frame rendering
//!
//! The renderer derives everything from the carousel's current index, so
//! exactly one slide and exactly one indicator dot read as active in any
//! frame. The active dot is marked twice over, glyph and style, so the
//! selection survives terminals that strip colors.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::input::Focus;
use crate::ui::layout::ScreenLayout;
use crate::ui::{active_dot_style, inactive_dot_style, pane_border_style};
use crate::utils::{format_position, text::truncate_with_ellipsis};

const ACTIVE_DOT: &str = "\u{25cf}"; // ●
const INACTIVE_DOT: &str = "\u{25cb}"; // ○
const PREV_GLYPH: &str = "\u{2039}"; // ‹
const NEXT_GLYPH: &str = "\u{203a}"; // ›

pub fn draw(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    draw_carousel(frame, app, layout);
    draw_notes(frame, app, layout);
    draw_status(frame, app, layout);
}

fn draw_carousel(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    let mut border = pane_border_style(app.focus() == Focus::Carousel);
    if app.carousel().is_transitioning() {
        // Make the move lock visible: the frame dims while it is held
        border = border.add_modifier(Modifier::DIM);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" showreel ")
        .border_style(border);
    frame.render_widget(block, layout.carousel);

    if app.deck().is_empty() {
        let placeholder = Paragraph::new("No slides loaded")
            .style(Style::default().add_modifier(Modifier::DIM))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, layout.slide);
        return;
    }

    let index = app.carousel().current_index();
    if let Some(slide) = app.deck().get(index) {
        let mut lines = vec![
            Line::from(Span::styled(
                slide.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(slide.body.lines().map(|line| Line::from(line.to_string())));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, layout.slide);
    }

    draw_controls(frame, layout);
    draw_indicators(frame, app, layout);
}

fn draw_controls(frame: &mut Frame, layout: &ScreenLayout) {
    for (rect, glyph) in [
        (layout.prev_control, PREV_GLYPH),
        (layout.next_control, NEXT_GLYPH),
    ] {
        if rect.width == 0 || rect.height == 0 {
            continue;
        }
        let middle = Rect {
            x: rect.x,
            y: rect.y + rect.height / 2,
            width: rect.width,
            height: 1,
        };
        let control = Paragraph::new(glyph)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(control, middle);
    }
}

fn draw_indicators(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    // Rendered at the exact origin the hit-testing uses
    let origin = match layout.indicator_origin() {
        Some(origin) => origin,
        None => return,
    };

    let active = app.carousel().current_index();
    let mut spans = Vec::with_capacity(app.deck().len() * 2);
    for index in 0..app.deck().len() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        if index == active {
            spans.push(Span::styled(ACTIVE_DOT, active_dot_style()));
        } else {
            spans.push(Span::styled(INACTIVE_DOT, inactive_dot_style()));
        }
    }

    let span_width = (app.deck().len() * 2 - 1) as u16;
    let row = Rect {
        x: origin,
        y: layout.indicators.y,
        width: span_width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), row);
}

fn draw_notes(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Notes ")
        .border_style(pane_border_style(app.focus() == Focus::Notes));

    let notes = app
        .deck()
        .get(app.carousel().current_index())
        .map(|slide| slide.notes.as_str())
        .unwrap_or("");
    let body = if notes.is_empty() { "(no notes)" } else { notes };

    let paragraph = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .scroll((app.notes_scroll(), 0))
        .block(block);
    frame.render_widget(paragraph, layout.notes);
}

fn draw_status(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    let status = if app.deck().is_empty() {
        "no slides \u{b7} q quit".to_string()
    } else {
        let index = app.carousel().current_index();
        let position = format_position(index, app.deck().len());
        let title = app
            .deck()
            .get(index)
            .map(|slide| truncate_with_ellipsis(&slide.title, 24))
            .unwrap_or_default();
        let autoplay = match app.carousel().remaining_until_advance() {
            Some(remaining) => format!("next in {}s", remaining.as_secs() + 1),
            None if app.pointer_inside() => "paused (hover)".to_string(),
            None => "autoplay off".to_string(),
        };
        format!(
            " {position} {title} \u{b7} {autoplay} \u{b7} Tab focus \u{b7} \u{2190}/\u{2192} slides \u{b7} 1-9 jump \u{b7} q quit"
        )
    };

    let line = truncate_with_ellipsis(&status, layout.status.width as usize);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().add_modifier(Modifier::DIM)),
        layout.status,
    );
}
