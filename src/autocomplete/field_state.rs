use serde_json::Value;

use super::options::{FieldHooks, FieldOptions, FieldSettings};
use crate::dataset::{Dataset, Entry};
use crate::node::{ElementKind, EventKind, EventTarget, NodeHost, NodeId};

/// Events the visible input subscribes to
pub(super) const INPUT_EVENTS: [EventKind; 6] = [
    EventKind::Focus,
    EventKind::Blur,
    EventKind::Input,
    EventKind::Click,
    EventKind::DoubleClick,
    EventKind::KeyUp,
];

/// The four nodes a field works with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elements {
    pub group: NodeId,
    pub input: NodeId,
    pub actual_input: NodeId,
    pub list: NodeId,
}

/// Externally supplied nodes for [`AutocompleteField::from_existing`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExistingElements {
    pub group: Option<NodeId>,
    pub input: Option<NodeId>,
    pub actual_input: Option<NodeId>,
    pub list: Option<NodeId>,
}

/// Autocomplete text field
///
/// Holds the dataset, the current result set and the interaction flags.
/// Every operation takes the node host explicitly; the field itself only
/// stores node handles.
pub struct AutocompleteField<H> {
    pub(super) hooks: FieldHooks<H>,
    pub(super) settings: FieldSettings,
    pub(super) elements: Option<Elements>,
    pub(super) is_listening: bool,

    pub(super) data: Dataset,
    pub(super) list_data: Vec<Entry>,

    pub(super) list_is_active: bool,
    pub(super) list_item_is_active: bool,
    pub(super) active_list_item_index: usize,
    pub(super) input_is_focused: bool,
}

impl<H: NodeHost + 'static> AutocompleteField<H> {
    /// Build the container, visible input, shadow input and list, then listen
    pub fn new(host: &mut H, data: impl Into<Dataset>, options: FieldOptions<H>) -> Self {
        let mut field = Self::unbound(data.into(), options);

        let group = host.create(ElementKind::Container);
        (field.hooks.prepare_group)(host, group);

        let input = host.create(ElementKind::TextInput);
        host.set_attribute(input, "type", "text");
        (field.hooks.prepare_input)(host, input);

        let actual_input = host.create(ElementKind::TextInput);
        host.set_attribute(actual_input, "type", "text");
        host.set_attribute(actual_input, "disabled", "true");
        (field.hooks.prepare_actual_input)(host, actual_input);

        let list = host.create(ElementKind::List);
        (field.hooks.prepare_list)(host, list);

        host.append_child(group, input);
        host.append_child(group, actual_input);
        host.append_child(group, list);

        field.elements = Some(Elements {
            group,
            input,
            actual_input,
            list,
        });

        field.listen(host);
        field.initialize(host);
        field
    }

    /// Attach to nodes that already exist in the host
    ///
    /// When the nodes fail validation the field is returned unbound and not
    /// listening; check [`is_bound`](Self::is_bound) before relying on it.
    pub fn from_existing(
        host: &mut H,
        data: impl Into<Dataset>,
        options: FieldOptions<H>,
        existing: ExistingElements,
    ) -> Self {
        let mut field = Self::unbound(data.into(), options);
        if field.bind_elements(host, existing) {
            field.listen(host);
            field.initialize(host);
        }
        field
    }

    fn unbound(data: Dataset, options: FieldOptions<H>) -> Self {
        let mut hooks = FieldHooks::default();
        let settings = options.settings.clone().unwrap_or_default();
        hooks.merge(options);

        Self {
            hooks,
            settings,
            elements: None,
            is_listening: false,
            data,
            list_data: Vec::new(),
            list_is_active: false,
            list_item_is_active: false,
            active_list_item_index: 0,
            input_is_focused: false,
        }
    }

    /// Point the field at existing nodes
    ///
    /// Stops listening first and forgets the list state of any previous
    /// nodes. Succeeds only when all four nodes exist and the inputs and
    /// list have the expected kinds.
    pub fn bind_elements(&mut self, host: &mut H, existing: ExistingElements) -> bool {
        self.stop_listening(host);
        self.list_data.clear();
        self.list_is_active = false;
        self.list_item_is_active = false;
        self.active_list_item_index = 0;

        let bound = checked(host, existing.group, None).and_then(|group| {
            Some(Elements {
                group,
                input: checked(host, existing.input, Some(ElementKind::TextInput))?,
                actual_input: checked(host, existing.actual_input, Some(ElementKind::TextInput))?,
                list: checked(host, existing.list, Some(ElementKind::List))?,
            })
        });

        match bound {
            Some(elements) => {
                self.elements = Some(elements);
                true
            }
            None => {
                log::error!(
                    "autocomplete: group, input, actual input, or list is missing or of the wrong kind: {:?}",
                    existing
                );
                self.elements = None;
                false
            }
        }
    }

    fn initialize(&mut self, host: &mut H) {
        let Some(elements) = self.elements else {
            return;
        };
        let value = host.value(elements.input);
        self.clear_actual_input(host);
        if !value.is_empty() {
            self.search_and_update_list(host, &value);
        }
    }

    /// Merge a partial set of hooks and settings over the current ones
    pub fn set_options(&mut self, options: FieldOptions<H>) {
        if let Some(settings) = options.settings.clone() {
            self.settings = settings;
        }
        self.hooks.merge(options);
    }

    pub fn set_settings(&mut self, settings: FieldSettings) {
        self.settings = settings;
    }

    /// Merge settings from a JSON object; anything else is ignored
    pub fn set_settings_value(&mut self, patch: &Value) -> bool {
        self.settings.merge_value(patch)
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    /// Replace the dataset, clear the selection and hide the list
    pub fn update_data(&mut self, host: &mut H, data: impl Into<Dataset>) {
        self.data = data.into();
        self.assign_value(host, "", "");
        self.deactivate_list(host);
    }

    /// Replace the dataset from a JSON value
    ///
    /// Values that are not arrays, or arrays with malformed entries, leave
    /// the field untouched.
    pub fn update_data_value(&mut self, host: &mut H, value: &Value) -> bool {
        match Dataset::from_value(value) {
            Some(Ok(data)) => {
                self.update_data(host, data);
                true
            }
            Some(Err(e)) => {
                log::warn!("autocomplete: ignoring dataset update: {}", e);
                false
            }
            None => {
                log::debug!("autocomplete: ignoring non-array dataset update");
                false
            }
        }
    }

    /// Commit a selection into both inputs
    ///
    /// An empty value is replaced with the configured default. Nothing is
    /// written, and no hook fires, when both inputs already hold the pair.
    pub fn assign_value(&mut self, host: &mut H, label: &str, value: &str) {
        let Some(elements) = self.elements else {
            return;
        };
        let value = if value.is_empty() {
            self.settings.default_value.clone()
        } else {
            value.to_string()
        };

        if host.value(elements.input) == label && host.value(elements.actual_input) == value {
            return;
        }

        host.set_value(elements.input, label);
        host.set_value(elements.actual_input, &value);

        if label.is_empty() {
            log::debug!("autocomplete: selection removed");
            (self.hooks.on_input_removed)();
        } else {
            log::debug!("autocomplete: selected {:?} -> {:?}", label, value);
            (self.hooks.on_input_selected)(label, &value);
        }
    }

    /// Reset the shadow input to the default value if it holds anything
    pub(super) fn clear_actual_input(&mut self, host: &mut H) {
        let Some(elements) = self.elements else {
            return;
        };
        if host.value(elements.actual_input).is_empty() {
            return;
        }
        host.set_value(elements.actual_input, &self.settings.default_value);
        (self.hooks.on_input_removed)();
    }

    /// Subscribe to the visible input's events and the window click
    pub fn listen(&mut self, host: &mut H) {
        let Some(elements) = self.elements else {
            return;
        };
        if self.is_listening {
            return;
        }
        for kind in INPUT_EVENTS {
            host.subscribe(EventTarget::Node(elements.input), kind);
        }
        host.subscribe(EventTarget::Window, EventKind::Click);
        self.is_listening = true;
    }

    /// Drop every subscription made by [`listen`](Self::listen)
    pub fn stop_listening(&mut self, host: &mut H) {
        let Some(elements) = self.elements else {
            return;
        };
        if !self.is_listening {
            return;
        }
        for kind in INPUT_EVENTS {
            host.unsubscribe(EventTarget::Node(elements.input), kind);
        }
        host.unsubscribe(EventTarget::Window, EventKind::Click);
        self.is_listening = false;
    }

    /// The container node, for insertion into the host page
    pub fn get_element(&self) -> Option<NodeId> {
        self.elements.map(|e| e.group)
    }

    pub fn elements(&self) -> Option<Elements> {
        self.elements
    }

    pub fn is_bound(&self) -> bool {
        self.elements.is_some()
    }

    pub fn is_listening(&self) -> bool {
        self.is_listening
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    /// Entries currently rendered in the list
    pub fn result_set(&self) -> &[Entry] {
        &self.list_data
    }

    pub fn list_is_active(&self) -> bool {
        self.list_is_active
    }

    /// Index of the keyboard-active item, if any
    pub fn active_item(&self) -> Option<usize> {
        self.list_item_is_active
            .then_some(self.active_list_item_index)
    }

    pub fn input_is_focused(&self) -> bool {
        self.input_is_focused
    }

    /// Text of the visible input
    pub fn label(&self, host: &H) -> String {
        self.elements
            .map(|e| host.value(e.input))
            .unwrap_or_default()
    }

    /// Value of the shadow input
    pub fn shadow_value(&self, host: &H) -> String {
        self.elements
            .map(|e| host.value(e.actual_input))
            .unwrap_or_default()
    }
}

/// `node` if it exists in the host and, when `expected` is given, has that kind
fn checked<H: NodeHost>(host: &H, node: Option<NodeId>, expected: Option<ElementKind>) -> Option<NodeId> {
    let node = node?;
    let actual = host.kind(node)?;
    match expected {
        Some(kind) if kind != actual => None,
        _ => Some(node),
    }
}

#[cfg(test)]
#[path = "field_state_tests.rs"]
mod field_state_tests;
