//! Suggestion list rendering
//!
//! Draws the field's list node as a popup next to the visible input. The
//! popup mirrors the node tree: it is shown only while the list carries the
//! active class, and the item carrying the active item class is highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::autocomplete::{DATA_VALUE, ITEM_ACTIVE_CLASS, LIST_ACTIVE_CLASS};
use crate::node::{NodeHost, NodeId, NodeTree};
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const VALUE_SPACING: usize = 2;
const MIN_POPUP_WIDTH: usize = 12;

/// One rendered suggestion row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub label: String,
    pub value: String,
    pub active: bool,
}

/// Rows of the list node, or `None` while the list is hidden
pub fn visible_rows(tree: &NodeTree, list: NodeId) -> Option<Vec<ListRow>> {
    if !tree.has_class(list, LIST_ACTIVE_CLASS) {
        return None;
    }

    let rows = tree
        .children(list)
        .into_iter()
        .map(|item| {
            let label = tree
                .children(item)
                .first()
                .map(|&anchor| tree.text(anchor))
                .unwrap_or_default();
            ListRow {
                label,
                value: tree.attribute(item, DATA_VALUE).unwrap_or_default(),
                active: tree.has_class(item, ITEM_ACTIVE_CLASS),
            }
        })
        .collect();
    Some(rows)
}

/// First row to draw so that the active row stays inside `height` rows
pub fn scroll_offset(rows: &[ListRow], height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    match rows.iter().position(|row| row.active) {
        Some(active) if active >= height => active + 1 - height,
        _ => 0,
    }
}

/// Render the suggestion popup below (or above) the visible input
pub fn render_popup(app: &mut App, frame: &mut Frame, input_area: Rect) {
    app.layout_regions.suggestion_list = None;
    app.layout_regions.list_offset = 0;

    let Some(elements) = app.field.elements() else {
        return;
    };
    let Some(rows) = visible_rows(&app.tree, elements.list) else {
        return;
    };
    if rows.is_empty() {
        return;
    }

    let max_visible = usize::from(app.theme.list_height.max(1));
    let visible_count = rows.len().min(max_visible);
    let popup_height = (visible_count as u16) + POPUP_BORDER_HEIGHT;

    let label_width = rows
        .iter()
        .map(|row| row.label.width())
        .max()
        .unwrap_or(0);
    let content_width = rows
        .iter()
        .map(|row| label_width + VALUE_SPACING + row.value.width())
        .max()
        .unwrap_or(0)
        .max(MIN_POPUP_WIDTH);
    let popup_width = (content_width as u16).saturating_add(POPUP_PADDING);

    let popup_area = popup::popup_near_anchor(input_area, frame.area(), popup_width, popup_height);
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return;
    }

    let inner_rows = usize::from(popup_area.height - POPUP_BORDER_HEIGHT);
    let offset = scroll_offset(&rows, inner_rows);
    let accent = app.theme.accent_color();

    let items: Vec<ListItem> = rows
        .iter()
        .skip(offset)
        .take(inner_rows)
        .map(|row| {
            let padding = " ".repeat(label_width.saturating_sub(row.label.width()));
            let line = if row.active {
                Line::from(vec![
                    Span::styled(
                        format!("► {}{}", row.label, padding),
                        Style::default()
                            .fg(Color::Black)
                            .bg(accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", row.value),
                        Style::default().fg(Color::Black).bg(accent),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("  {}{}", row.label, padding),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("  {}", row.value),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            };
            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} matches ", rows.len()))
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, popup_area);

    app.layout_regions.suggestion_list = Some(popup_area);
    app.layout_regions.list_offset = offset;
}

#[cfg(test)]
#[path = "list_render_tests.rs"]
mod list_render_tests;
