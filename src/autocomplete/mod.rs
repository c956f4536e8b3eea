//! Autocomplete field
//!
//! A visible input, a disabled shadow input holding the canonical value, and
//! a suggestion list, all built on a [`NodeHost`](crate::node::NodeHost).
//! Typing filters the dataset by case-insensitive substring; arrow keys,
//! Enter, Escape and clicks drive selection.

mod field_events;
mod field_list;
mod field_state;
mod matcher;
mod options;

pub use field_events::{FieldEvent, Key};
pub use field_list::{DATA_LABEL, DATA_VALUE};
pub use field_state::{AutocompleteField, Elements, ExistingElements};
pub use matcher::{LabelMatcher, SearchOutcome};
pub use options::{
    ArrowUpPolicy, ClickPolicy, FieldHooks, FieldOptions, FieldSettings, NodeHook, RemovedHook,
    SelectedHook, GROUP_CLASS, ITEM_ACTIVE_CLASS, ITEM_CLASS, LIST_ACTIVE_CLASS,
};
