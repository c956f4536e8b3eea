use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use crate::autocomplete::{AutocompleteField, FieldEvent, FieldOptions};
use crate::config::{Config, ThemeConfig};
use crate::dataset::Dataset;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::node::{ElementKind, EventKind, EventTarget, NodeHost, NodeId, NodeTree};

/// Maximum number of callback notifications kept for the details pane
const MAX_ACTIVITY: usize = 50;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field,
    DetailsPane,
}

/// Notifications received from the field's selection callbacks
pub type ActivityLog = Rc<RefCell<Vec<String>>>;

/// Last `(label, value)` pair committed through the field, cleared on removal
pub type CommittedSelection = Rc<RefCell<Option<(String, String)>>>;

fn push_activity(log: &ActivityLog, entry: String) {
    let mut entries = log.borrow_mut();
    entries.push(entry);
    if entries.len() > MAX_ACTIVITY {
        let excess = entries.len() - MAX_ACTIVITY;
        entries.drain(..excess);
    }
}

/// Application state
pub struct App {
    pub tree: NodeTree,
    pub field: AutocompleteField<NodeTree>,
    pub input: InputState,
    pub focus: Focus,
    pub theme: ThemeConfig,
    pub layout_regions: LayoutRegions,
    pub activity: ActivityLog,
    pub committed: CommittedSelection,
    /// Problem reported while loading the config, shown in the footer
    pub warning: Option<String>,
    /// Page node standing in for everything outside the field
    pub page: NodeId,
    pub details: NodeId,
    pub(super) last_input_click: Option<Instant>,
    pub(super) should_quit: bool,
}

impl App {
    pub fn new(data: Dataset, config: &Config) -> Self {
        let mut tree = NodeTree::new();
        let activity: ActivityLog = Rc::new(RefCell::new(Vec::new()));

        let committed: CommittedSelection = Rc::new(RefCell::new(None));

        let (selected_log, selected_pair) = (Rc::clone(&activity), Rc::clone(&committed));
        let (removed_log, removed_pair) = (Rc::clone(&activity), Rc::clone(&committed));
        let options = FieldOptions::new()
            .settings(config.field.clone())
            .on_input_selected(move |label, value| {
                *selected_pair.borrow_mut() = Some((label.to_string(), value.to_string()));
                push_activity(&selected_log, format!("selected {} ({})", label, value));
            })
            .on_input_removed(move || {
                *removed_pair.borrow_mut() = None;
                push_activity(&removed_log, "removed".to_string());
            });

        let field = AutocompleteField::new(&mut tree, data, options);

        let page = tree.create(ElementKind::Container);
        let details = tree.create(ElementKind::Container);
        if let Some(group) = field.get_element() {
            tree.append_child(page, group);
        }
        tree.append_child(page, details);

        let mut app = Self {
            tree,
            field,
            input: InputState::new(),
            focus: Focus::Field,
            theme: config.theme.clone(),
            layout_regions: LayoutRegions::new(),
            activity,
            committed,
            warning: None,
            page,
            details,
            last_input_click: None,
            should_quit: false,
        };
        app.deliver(EventKind::Focus, FieldEvent::Focus);
        app
    }

    pub fn with_warning(mut self, warning: Option<String>) -> Self {
        self.warning = warning;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Pair committed through the field, if it has not been cleared since
    ///
    /// Text typed into the input without a commit is not a selection.
    pub fn selection(&self) -> Option<(String, String)> {
        self.committed.borrow().clone()
    }

    pub fn input_node(&self) -> Option<NodeId> {
        self.field.elements().map(|e| e.input)
    }

    /// Deliver an input-targeted event if the field subscribed to it
    pub(super) fn deliver(&mut self, kind: EventKind, event: FieldEvent) {
        let Some(input) = self.input_node() else {
            return;
        };
        if self.tree.is_subscribed(EventTarget::Node(input), kind) {
            self.field.handle_event(&mut self.tree, event);
        }
        self.sync_input();
    }

    /// Deliver a click on `target` through the host's subscriptions
    pub(super) fn deliver_click(&mut self, target: NodeId) {
        self.field.dispatch_click(&mut self.tree, target);
        self.sync_input();
    }

    /// Mirror the node's value into the editor after the field changed it
    pub(super) fn sync_input(&mut self) {
        let label = self.field.label(&self.tree);
        self.input.sync_text(&label);
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
