use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::{ElementKind, EventKind, EventTarget, NodeHost, NodeId};

#[derive(Debug)]
struct Node {
    kind: ElementKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    text: String,
    value: String,
}

impl Node {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            attributes: BTreeMap::new(),
            classes: BTreeSet::new(),
            text: String::new(),
            value: String::new(),
        }
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Arena-backed node host
///
/// Detached nodes stay alive until [`remove`](NodeHost::remove) frees them;
/// freed slots are recycled by later `create` calls. Listener bookkeeping is
/// explicit so hosts can route events only to subscribers.
#[derive(Debug, Default)]
pub struct NodeTree {
    slots: Vec<Slot>,
    free: Vec<usize>,
    listeners: HashSet<(EventTarget, EventKind)>,
}

impl NodeTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Number of live nodes, attached or not
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Classes of a node in sorted order
    pub fn classes(&self, id: NodeId) -> Vec<String> {
        self.node(id)
            .map(|n| n.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// First descendant of `root` (depth-first, including `root`) of the given kind
    pub fn find_first(&self, root: NodeId, kind: ElementKind) -> Option<NodeId> {
        if self.kind(root) == Some(kind) {
            return Some(root);
        }
        self.node(root)?
            .children
            .iter()
            .find_map(|&child| self.find_first(child, kind))
    }
}

impl NodeHost for NodeTree {
    fn create(&mut self, kind: ElementKind) -> NodeId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(Node::new(kind));
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        self.slots.push(Slot {
            generation: 0,
            node: Some(Node::new(kind)),
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    fn kind(&self, node: NodeId) -> Option<ElementKind> {
        self.node(node).map(|n| n.kind)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).and_then(|n| n.parent)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node).map(|n| n.children.clone()).unwrap_or_default()
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.node(parent).is_none() || self.node(child).is_none() {
            return;
        }
        // A node lives in one place only; re-appending moves it
        if let Some(old_parent) = self.parent(child)
            && let Some(old) = self.node_mut(old_parent)
        {
            old.children.retain(|&c| c != child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    fn clear_children(&mut self, parent: NodeId) {
        let children = match self.node_mut(parent) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };
        for child in children {
            if let Some(node) = self.node_mut(child) {
                node.parent = None;
            }
        }
    }

    fn remove(&mut self, node: NodeId) {
        if self.node(node).is_none() {
            return;
        }
        if let Some(parent) = self.parent(node)
            && let Some(p) = self.node_mut(parent)
        {
            p.children.retain(|&c| c != node);
        }

        let mut removed = HashSet::new();
        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            let Some(slot) = self.slots.get_mut(id.index) else {
                continue;
            };
            if slot.generation != id.generation {
                continue;
            }
            let Some(freed) = slot.node.take() else {
                continue;
            };
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(id.index);
            pending.extend(freed.children);
            removed.insert(id);
        }

        self.listeners.retain(|(target, _)| match target {
            EventTarget::Node(id) => !removed.contains(id),
            EventTarget::Window => true,
        });
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(n) = self.node_mut(node) {
            n.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.node(node)?.attributes.get(name).cloned()
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.node_mut(node) {
            n.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.node_mut(node) {
            n.classes.remove(class);
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.node(node).is_some_and(|n| n.classes.contains(class))
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(n) = self.node_mut(node) {
            n.text = text.to_string();
        }
    }

    fn text(&self, node: NodeId) -> String {
        self.node(node).map(|n| n.text.clone()).unwrap_or_default()
    }

    fn value(&self, node: NodeId) -> String {
        match self.node(node) {
            Some(n) if n.kind == ElementKind::TextInput => n.value.clone(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(n) = self.node_mut(node)
            && n.kind == ElementKind::TextInput
        {
            n.value = value.to_string();
        }
    }

    fn subscribe(&mut self, target: EventTarget, kind: EventKind) {
        self.listeners.insert((target, kind));
    }

    fn unsubscribe(&mut self, target: EventTarget, kind: EventKind) {
        self.listeners.remove(&(target, kind));
    }

    fn is_subscribed(&self, target: EventTarget, kind: EventKind) -> bool {
        self.listeners.contains(&(target, kind))
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
