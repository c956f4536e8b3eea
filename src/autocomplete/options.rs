//! Field hooks and settings
//!
//! Hooks are the behavioural half of the configuration (closures over the
//! node host); settings are the plain-data half and can come from a config
//! file or a JSON object.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::node::{NodeHost, NodeId};

pub const GROUP_CLASS: &str = "autocompleteinput";
pub const ITEM_CLASS: &str = "item";
pub const LIST_ACTIVE_CLASS: &str = "list--active";
pub const ITEM_ACTIVE_CLASS: &str = "item--active";

/// Hook receiving the host and one of the field's nodes
pub type NodeHook<H> = Box<dyn FnMut(&mut H, NodeId)>;
/// Called with `(label, value)` when a selection is committed
pub type SelectedHook = Box<dyn FnMut(&str, &str)>;
/// Called when the selection is cleared
pub type RemovedHook = Box<dyn FnMut()>;

/// What ArrowUp does on the first item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowUpPolicy {
    /// Jump to the last item
    #[default]
    Wrap,
    /// Stay on the first item
    Clamp,
}

/// What a single click on the input does while the list is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickPolicy {
    #[default]
    Ignore,
    /// Re-render the full dataset
    Refresh,
}

/// Plain-data field settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// Written to the shadow input whenever the selection is cleared
    pub default_value: String,
    pub arrow_up: ArrowUpPolicy,
    pub click_when_visible: ClickPolicy,
}

impl FieldSettings {
    /// Merge the keys of a JSON object over these settings
    ///
    /// Non-object values are ignored. Keys that do not name a setting are
    /// dropped; a known key with a bad value leaves the settings untouched.
    pub fn merge_value(&mut self, patch: &Value) -> bool {
        let Value::Object(patch) = patch else {
            log::debug!("ignoring non-object settings value: {}", patch);
            return false;
        };

        let Ok(Value::Object(mut current)) = serde_json::to_value(&*self) else {
            return false;
        };
        for (key, value) in patch {
            if current.contains_key(key) {
                current.insert(key.clone(), value.clone());
            }
        }

        match serde_json::from_value::<FieldSettings>(Value::Object(current)) {
            Ok(merged) => {
                *self = merged;
                true
            }
            Err(e) => {
                log::debug!("ignoring invalid settings patch: {}", e);
                false
            }
        }
    }
}

/// Live hooks of a field; every slot is always populated
pub struct FieldHooks<H> {
    pub prepare_group: NodeHook<H>,
    pub prepare_input: NodeHook<H>,
    pub prepare_actual_input: NodeHook<H>,
    pub prepare_list: NodeHook<H>,
    pub prepare_list_item: NodeHook<H>,
    pub prepare_list_item_anchor: NodeHook<H>,

    pub activate_list: NodeHook<H>,
    pub deactivate_list: NodeHook<H>,
    pub activate_list_item: NodeHook<H>,
    pub deactivate_list_item: NodeHook<H>,

    pub on_input_selected: SelectedHook,
    pub on_input_removed: RemovedHook,
}

fn noop<H>() -> NodeHook<H>
where
    H: 'static,
{
    Box::new(|_: &mut H, _: NodeId| {})
}

fn add_class<H>(class: &'static str) -> NodeHook<H>
where
    H: NodeHost + 'static,
{
    Box::new(move |host: &mut H, node: NodeId| host.add_class(node, class))
}

fn remove_class<H>(class: &'static str) -> NodeHook<H>
where
    H: NodeHost + 'static,
{
    Box::new(move |host: &mut H, node: NodeId| host.remove_class(node, class))
}

impl<H: NodeHost + 'static> Default for FieldHooks<H> {
    fn default() -> Self {
        Self {
            prepare_group: add_class(GROUP_CLASS),
            prepare_input: noop(),
            prepare_actual_input: noop(),
            prepare_list: noop(),
            prepare_list_item: add_class(ITEM_CLASS),
            prepare_list_item_anchor: noop(),

            activate_list: add_class(LIST_ACTIVE_CLASS),
            deactivate_list: remove_class(LIST_ACTIVE_CLASS),
            activate_list_item: add_class(ITEM_ACTIVE_CLASS),
            deactivate_list_item: remove_class(ITEM_ACTIVE_CLASS),

            on_input_selected: Box::new(|_, _| {}),
            on_input_removed: Box::new(|| {}),
        }
    }
}

impl<H> FieldHooks<H> {
    /// Replace every hook the patch supplies, keep the rest
    pub fn merge(&mut self, options: FieldOptions<H>) {
        let FieldOptions {
            prepare_group,
            prepare_input,
            prepare_actual_input,
            prepare_list,
            prepare_list_item,
            prepare_list_item_anchor,
            activate_list,
            deactivate_list,
            activate_list_item,
            deactivate_list_item,
            on_input_selected,
            on_input_removed,
            settings: _,
        } = options;

        fn put<T>(slot: &mut T, patch: Option<T>) {
            if let Some(hook) = patch {
                *slot = hook;
            }
        }

        put(&mut self.prepare_group, prepare_group);
        put(&mut self.prepare_input, prepare_input);
        put(&mut self.prepare_actual_input, prepare_actual_input);
        put(&mut self.prepare_list, prepare_list);
        put(&mut self.prepare_list_item, prepare_list_item);
        put(&mut self.prepare_list_item_anchor, prepare_list_item_anchor);
        put(&mut self.activate_list, activate_list);
        put(&mut self.deactivate_list, deactivate_list);
        put(&mut self.activate_list_item, activate_list_item);
        put(&mut self.deactivate_list_item, deactivate_list_item);
        put(&mut self.on_input_selected, on_input_selected);
        put(&mut self.on_input_removed, on_input_removed);
    }
}

/// Partial configuration; unset entries keep their current behaviour
pub struct FieldOptions<H> {
    pub prepare_group: Option<NodeHook<H>>,
    pub prepare_input: Option<NodeHook<H>>,
    pub prepare_actual_input: Option<NodeHook<H>>,
    pub prepare_list: Option<NodeHook<H>>,
    pub prepare_list_item: Option<NodeHook<H>>,
    pub prepare_list_item_anchor: Option<NodeHook<H>>,

    pub activate_list: Option<NodeHook<H>>,
    pub deactivate_list: Option<NodeHook<H>>,
    pub activate_list_item: Option<NodeHook<H>>,
    pub deactivate_list_item: Option<NodeHook<H>>,

    pub on_input_selected: Option<SelectedHook>,
    pub on_input_removed: Option<RemovedHook>,

    pub settings: Option<FieldSettings>,
}

impl<H> Default for FieldOptions<H> {
    fn default() -> Self {
        Self {
            prepare_group: None,
            prepare_input: None,
            prepare_actual_input: None,
            prepare_list: None,
            prepare_list_item: None,
            prepare_list_item_anchor: None,
            activate_list: None,
            deactivate_list: None,
            activate_list_item: None,
            deactivate_list_item: None,
            on_input_selected: None,
            on_input_removed: None,
            settings: None,
        }
    }
}

macro_rules! node_hook_setters {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name(mut self, hook: impl FnMut(&mut H, NodeId) + 'static) -> Self {
                self.$name = Some(Box::new(hook));
                self
            }
        )*
    };
}

impl<H> FieldOptions<H> {
    pub fn new() -> Self {
        Self::default()
    }

    node_hook_setters!(
        prepare_group,
        prepare_input,
        prepare_actual_input,
        prepare_list,
        prepare_list_item,
        prepare_list_item_anchor,
        activate_list,
        deactivate_list,
        activate_list_item,
        deactivate_list_item,
    );

    pub fn on_input_selected(mut self, hook: impl FnMut(&str, &str) + 'static) -> Self {
        self.on_input_selected = Some(Box::new(hook));
        self
    }

    pub fn on_input_removed(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_input_removed = Some(Box::new(hook));
        self
    }

    pub fn settings(mut self, settings: FieldSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.settings.get_or_insert_with(FieldSettings::default).default_value = value.into();
        self
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod options_tests;
