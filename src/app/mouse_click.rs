//! Mouse click handling
//!
//! Maps clicked regions to nodes and delivers the click to the field.

use std::time::{Duration, Instant};

use super::state::{App, Focus};
use crate::autocomplete::FieldEvent;
use crate::layout::Region;
use crate::node::{EventKind, NodeHost, NodeId};

/// Two clicks on the input within this window count as a double-click
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    handle_click_at(app, region, Instant::now());
}

pub(super) fn handle_click_at(app: &mut App, region: Option<Region>, now: Instant) {
    match region {
        Some(Region::InputField) => click_input_field(app, now),
        Some(Region::SuggestionList(index)) => click_suggestion(app, index),
        Some(Region::ShadowField) => {
            if let Some(elements) = app.field.elements() {
                click_elsewhere(app, elements.actual_input);
            }
        }
        Some(Region::DetailsPane) => {
            let details = app.details;
            click_elsewhere(app, details);
            app.set_focus(Focus::DetailsPane);
        }
        None => {
            let page = app.page;
            click_elsewhere(app, page);
        }
    }
}

fn click_input_field(app: &mut App, now: Instant) {
    let Some(input) = app.input_node() else {
        return;
    };
    app.set_focus(Focus::Field);
    app.deliver_click(input);

    let is_double = app
        .last_input_click
        .is_some_and(|last| now.saturating_duration_since(last) <= DOUBLE_CLICK_WINDOW);
    if is_double {
        app.last_input_click = None;
        app.deliver(EventKind::DoubleClick, FieldEvent::DoubleClick);
    } else {
        app.last_input_click = Some(now);
    }
}

fn click_suggestion(app: &mut App, index: usize) {
    let Some(elements) = app.field.elements() else {
        return;
    };
    let anchor = app
        .tree
        .children(elements.list)
        .get(index)
        .and_then(|&item| app.tree.children(item).first().copied());

    if let Some(anchor) = anchor {
        app.last_input_click = None;
        app.deliver_click(anchor);
    }
}

fn click_elsewhere(app: &mut App, target: NodeId) {
    app.last_input_click = None;
    app.deliver_click(target);
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
