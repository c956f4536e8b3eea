//! Renderable node abstraction
//!
//! The autocomplete field never talks to a concrete UI toolkit. It depends on
//! the [`NodeHost`] capability set: create nodes, build a tree out of them,
//! set attributes, text and classes, and subscribe to events. [`NodeTree`] is
//! the in-memory host used by the terminal front end and the tests.

mod tree;

pub use tree::NodeTree;

use std::fmt;

/// Handle to a node owned by a [`NodeHost`]
///
/// Slots are reused after removal; the generation keeps a stale handle from
/// resolving to the slot's new occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Kinds of nodes the autocomplete field creates or expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Generic wrapper (a `div`)
    Container,
    /// Single-line text field
    TextInput,
    /// Ordered list of suggestions
    List,
    /// Suggestion row inside a list
    ListItem,
    /// Clickable label inside a list item
    Anchor,
}

/// Where a listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Node(NodeId),
    /// Host-wide channel, used for outside-click detection
    Window,
}

/// Events the field subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Focus,
    Blur,
    Input,
    Click,
    DoubleClick,
    KeyUp,
}

/// Capability set required by the autocomplete field
pub trait NodeHost {
    fn create(&mut self, kind: ElementKind) -> NodeId;
    fn kind(&self, node: NodeId) -> Option<ElementKind>;

    fn parent(&self, node: NodeId) -> Option<NodeId>;
    fn children(&self, node: NodeId) -> Vec<NodeId>;
    fn append_child(&mut self, parent: NodeId, child: NodeId);
    /// Detach every child of `parent`
    fn clear_children(&mut self, parent: NodeId);
    /// Detach `node` and free it together with its subtree
    ///
    /// Subscriptions on freed nodes are dropped and their handles stop
    /// resolving.
    fn remove(&mut self, node: NodeId);

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn add_class(&mut self, node: NodeId, class: &str);
    fn remove_class(&mut self, node: NodeId, class: &str);
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn set_text(&mut self, node: NodeId, text: &str);
    fn text(&self, node: NodeId) -> String;

    /// Current value of a text input (empty for other kinds)
    fn value(&self, node: NodeId) -> String;
    fn set_value(&mut self, node: NodeId, value: &str);

    fn subscribe(&mut self, target: EventTarget, kind: EventKind);
    fn unsubscribe(&mut self, target: EventTarget, kind: EventKind);
    fn is_subscribed(&self, target: EventTarget, kind: EventKind) -> bool;

    /// Whether `ancestor` is `node` or one of its ancestors
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }
}
