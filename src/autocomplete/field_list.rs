//! Suggestion list rendering and keyboard-active item tracking

use super::field_state::AutocompleteField;
use super::matcher::{LabelMatcher, SearchOutcome};
use super::options::ArrowUpPolicy;
use crate::dataset::Entry;
use crate::node::{ElementKind, EventKind, EventTarget, NodeHost, NodeId};

pub const DATA_LABEL: &str = "data-label";
pub const DATA_VALUE: &str = "data-value";

impl<H: NodeHost + 'static> AutocompleteField<H> {
    fn list_items(&self, host: &H) -> Vec<NodeId> {
        match self.elements {
            Some(elements) => host
                .children(elements.list)
                .into_iter()
                .filter(|&child| host.kind(child) == Some(ElementKind::ListItem))
                .collect(),
            None => Vec::new(),
        }
    }

    fn deactivate_all_list_items(&mut self, host: &mut H) {
        for item in self.list_items(host) {
            (self.hooks.deactivate_list_item)(host, item);
        }
    }

    /// Mark the item at the current index, wrapping an out-of-range index to 0
    fn activate_list_item(&mut self, host: &mut H) {
        let items = self.list_items(host);
        if !self.list_is_active || items.is_empty() {
            return;
        }
        if self.active_list_item_index >= items.len() {
            self.active_list_item_index = 0;
        }

        self.deactivate_all_list_items(host);
        (self.hooks.activate_list_item)(host, items[self.active_list_item_index]);
        self.list_item_is_active = true;
    }

    pub(super) fn deactivate_list_items(&mut self, host: &mut H) {
        self.deactivate_all_list_items(host);
        self.list_item_is_active = false;
        self.active_list_item_index = 0;
    }

    pub(super) fn go_down_list_item(&mut self, host: &mut H) {
        if self.list_item_is_active {
            self.active_list_item_index += 1;
        } else {
            self.active_list_item_index = 0;
        }
        self.activate_list_item(host);
    }

    pub(super) fn go_up_list_item(&mut self, host: &mut H) {
        if !self.list_item_is_active {
            return;
        }
        let count = self.list_items(host).len();
        if count == 0 {
            return;
        }
        self.active_list_item_index = match (self.active_list_item_index, self.settings.arrow_up) {
            (0, ArrowUpPolicy::Wrap) => count - 1,
            (0, ArrowUpPolicy::Clamp) => 0,
            (index, _) => index - 1,
        };
        self.activate_list_item(host);
    }

    /// Drop the anchors' click subscriptions and free every item
    fn clear_list(&mut self, host: &mut H) {
        let Some(elements) = self.elements else {
            return;
        };
        for item in host.children(elements.list) {
            for anchor in host.children(item) {
                host.unsubscribe(EventTarget::Node(anchor), EventKind::Click);
            }
            host.remove(item);
        }
    }

    /// Hide the list and discard the result set
    pub(super) fn deactivate_list(&mut self, host: &mut H) {
        let Some(elements) = self.elements else {
            return;
        };
        self.deactivate_list_items(host);

        if self.list_is_active {
            (self.hooks.deactivate_list)(host, elements.list);
            log::debug!("autocomplete: list hidden");
        }
        self.clear_list(host);
        self.list_data.clear();
        self.list_is_active = false;
    }

    /// Render the result set into the list and show it
    ///
    /// An empty result set hides the list instead.
    pub(super) fn activate_list(&mut self, host: &mut H) {
        let Some(elements) = self.elements else {
            return;
        };
        if self.list_data.is_empty() {
            self.deactivate_list(host);
            return;
        }

        self.deactivate_list_items(host);
        self.clear_list(host);

        let entries = self.list_data.clone();
        for Entry { label, value } in &entries {
            let item = host.create(ElementKind::ListItem);
            host.set_attribute(item, DATA_LABEL, label);
            host.set_attribute(item, DATA_VALUE, value);
            (self.hooks.prepare_list_item)(host, item);

            let anchor = host.create(ElementKind::Anchor);
            host.set_attribute(anchor, DATA_LABEL, label);
            host.set_attribute(anchor, DATA_VALUE, value);
            host.set_text(anchor, label);
            (self.hooks.prepare_list_item_anchor)(host, anchor);
            host.subscribe(EventTarget::Node(anchor), EventKind::Click);

            host.append_child(item, anchor);
            host.append_child(elements.list, item);
        }

        if !self.list_is_active {
            (self.hooks.activate_list)(host, elements.list);
            log::debug!("autocomplete: list shown with {} items", entries.len());
        }
        self.list_is_active = true;
    }

    pub(super) fn update_list_with_all_data(&mut self, host: &mut H) {
        self.list_data = self.data.entries().to_vec();
        self.activate_list(host);
    }

    /// Commit an exact match, or show the substring matches
    pub(super) fn search_and_update_list(&mut self, host: &mut H, query: &str) {
        match LabelMatcher::search(self.data.entries(), query) {
            SearchOutcome::Blank => {}
            SearchOutcome::Exact(entry) => {
                self.assign_value(host, &entry.label, &entry.value);
                self.deactivate_list(host);
            }
            SearchOutcome::Matches(found) => {
                self.list_data = found;
                self.activate_list(host);
            }
        }
    }

    /// Commit the active item, else the first result, else clear the selection
    pub(super) fn apply_value(&mut self, host: &mut H) {
        let chosen = if self.list_item_is_active {
            self.list_data.get(self.active_list_item_index).cloned()
        } else {
            self.list_data.first().cloned()
        };

        match chosen {
            Some(entry) => self.assign_value(host, &entry.label, &entry.value),
            None if !self.list_item_is_active => self.clear_actual_input(host),
            None => {}
        }
    }
}

#[cfg(test)]
#[path = "field_list_tests.rs"]
mod field_list_tests;
