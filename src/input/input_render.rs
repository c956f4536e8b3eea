//! Input field rendering
//!
//! Draws the visible input (editable, with a cursor) and the disabled shadow
//! input that mirrors the committed value.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};

/// Render the visible input
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::Field {
        app.theme.accent_color()
    } else {
        Color::DarkGray
    };

    let mut title_spans = vec![Span::raw(" Search ")];
    let matches = app.field.result_set().len();
    if app.field.list_is_active() {
        title_spans.push(Span::styled(
            format!("({} shown) ", matches),
            Style::default().fg(Color::DarkGray),
        ));
    }

    app.input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title_spans))
            .border_style(Style::default().fg(border_color)),
    );
    // Hide the cursor while focus is elsewhere
    let cursor_style = if app.focus == Focus::Field {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    app.input.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&app.input.textarea, area);
    app.layout_regions.input_field = Some(area);
}

/// Render the disabled shadow input
pub fn render_shadow(app: &mut App, frame: &mut Frame, area: Rect) {
    let value = app.field.shadow_value(&app.tree);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Value ")
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(value).block(block).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::DIM),
    );
    frame.render_widget(paragraph, area);
    app.layout_regions.shadow_field = Some(area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
