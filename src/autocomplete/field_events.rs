use super::field_list::{DATA_LABEL, DATA_VALUE};
use super::field_state::AutocompleteField;
use super::options::ClickPolicy;
use crate::node::{ElementKind, EventKind, EventTarget, NodeHost, NodeId};

/// Keys the field reacts to on keyup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    ArrowUp,
    ArrowDown,
    Escape,
    Other,
}

/// Event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// Visible input gained focus
    Focus,
    /// Visible input lost focus
    Blur,
    /// Visible input text changed; the new text is read from the host
    Input,
    /// Single click on the visible input
    Click,
    /// Double click on the visible input
    DoubleClick,
    KeyUp(Key),
    /// Click on a suggestion anchor
    AnchorClick(NodeId),
    /// Host-wide click on the given node
    WindowClick(NodeId),
}

impl<H: NodeHost + 'static> AutocompleteField<H> {
    /// Handle one event; ignored entirely while not listening
    pub fn handle_event(&mut self, host: &mut H, event: FieldEvent) {
        if !self.is_listening {
            return;
        }
        let Some(elements) = self.elements else {
            return;
        };

        match event {
            FieldEvent::Focus => self.handle_focus(host, elements.input),
            FieldEvent::Blur => self.input_is_focused = false,
            FieldEvent::Input => self.handle_input(host, elements.input),
            FieldEvent::Click => self.handle_input_click(host),
            FieldEvent::DoubleClick => self.update_list_with_all_data(host),
            FieldEvent::KeyUp(key) => self.handle_key(host, key),
            FieldEvent::AnchorClick(anchor) => self.handle_anchor_click(host, elements.list, anchor),
            FieldEvent::WindowClick(target) => {
                if self.list_is_active && !host.contains(elements.group, target) {
                    self.deactivate_list(host);
                }
            }
        }
    }

    /// Route a click on `target` the way a document would
    ///
    /// The window listener sees the click first, then the input or anchor
    /// listener on the target itself. Only subscribed targets are delivered.
    pub fn dispatch_click(&mut self, host: &mut H, target: NodeId) {
        if host.is_subscribed(EventTarget::Window, EventKind::Click) {
            self.handle_event(host, FieldEvent::WindowClick(target));
        }

        let Some(elements) = self.elements else {
            return;
        };
        if !host.is_subscribed(EventTarget::Node(target), EventKind::Click) {
            return;
        }
        if target == elements.input {
            self.handle_event(host, FieldEvent::Click);
        } else if host.kind(target) == Some(ElementKind::Anchor) {
            self.handle_event(host, FieldEvent::AnchorClick(target));
        }
    }

    fn handle_focus(&mut self, host: &mut H, input: NodeId) {
        self.input_is_focused = true;
        let text = host.value(input);
        if !text.trim().is_empty() {
            self.search_and_update_list(host, &text);
        } else if !self.list_is_active {
            self.update_list_with_all_data(host);
        }
    }

    fn handle_input(&mut self, host: &mut H, input: NodeId) {
        self.clear_actual_input(host);
        let text = host.value(input);
        if text.is_empty() {
            self.update_list_with_all_data(host);
        } else {
            self.search_and_update_list(host, &text);
        }
    }

    fn handle_input_click(&mut self, host: &mut H) {
        if !self.list_is_active || self.settings.click_when_visible == ClickPolicy::Refresh {
            self.update_list_with_all_data(host);
        }
    }

    fn handle_key(&mut self, host: &mut H, key: Key) {
        match key {
            Key::Enter => {
                self.apply_value(host);
                self.deactivate_list(host);
            }
            Key::ArrowUp => self.go_up_list_item(host),
            Key::ArrowDown => self.go_down_list_item(host),
            Key::Escape => self.deactivate_list(host),
            Key::Other => {}
        }
    }

    fn handle_anchor_click(&mut self, host: &mut H, list: NodeId, anchor: NodeId) {
        if !host.contains(list, anchor) {
            return;
        }
        let item = host.parent(anchor).unwrap_or(anchor);
        let label = host.attribute(item, DATA_LABEL).unwrap_or_default();
        let value = host.attribute(item, DATA_VALUE).unwrap_or_default();
        self.assign_value(host, &label, &value);
        self.deactivate_list(host);
    }
}

#[cfg(test)]
#[path = "field_events_tests.rs"]
mod field_events_tests;
