//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where each part of the field was drawn on the last
//! frame, and `region_at()` maps a screen position back to it for mouse
//! handling.

use ratatui::layout::Rect;

/// Clickable parts of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    ShadowField,
    /// Row of the suggestion list, as an index into the rendered items
    SuggestionList(usize),
    DetailsPane,
}

/// Screen areas from the most recent render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub shadow_field: Option<Rect>,
    pub suggestion_list: Option<Rect>,
    /// Index of the first item drawn in the suggestion list
    pub list_offset: usize,
    pub details_pane: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Region under the given position; the suggestion list overlays the rest
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    if let Some(list) = regions.suggestion_list
        && contains(list, column, row)
    {
        let inner_top = list.y.saturating_add(1);
        let inner_bottom = list.y.saturating_add(list.height).saturating_sub(1);
        if row < inner_top || row >= inner_bottom {
            // Border rows belong to the list but hit no item
            return None;
        }
        let index = regions.list_offset + usize::from(row - inner_top);
        return Some(Region::SuggestionList(index));
    }

    [
        (regions.input_field, Region::InputField),
        (regions.shadow_field, Region::ShadowField),
        (regions.details_pane, Region::DetailsPane),
    ]
    .into_iter()
    .find_map(|(rect, region)| rect.filter(|r| contains(*r, column, row)).map(|_| region))
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
