use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::document::{Document, DomEvent, EventKind, Listener, ListenerId, ListenerTarget};

/// Node handle inside a [`MemoryDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug)]
enum NodeKind {
    Element(String),
    Text(String),
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    attributes: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: BTreeMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

struct Registration {
    id: ListenerId,
    target: ListenerTarget<NodeId>,
    kind: EventKind,
    listener: Listener<NodeId>,
}

struct Dom {
    nodes: Vec<NodeData>,
    root: NodeId,
    body: NodeId,
    focused: Option<NodeId>,
    listeners: Vec<Registration>,
    next_listener: u64,
}

impl Dom {
    fn new() -> Self {
        let mut dom = Dom {
            nodes: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
            focused: None,
            listeners: Vec::new(),
            next_listener: 1,
        };
        dom.root = dom.alloc(NodeKind::Element("html".to_string()));
        dom.body = dom.alloc(NodeKind::Element("body".to_string()));
        dom.attach(dom.root, dom.body);
        dom
    }

    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(NodeData::new(kind));
        NodeId(self.nodes.len() - 1)
    }

    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).parent;
        }
        false
    }

    fn is_connected(&self, node: NodeId) -> bool {
        self.contains(self.root, node)
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    fn detach(&mut self, node: NodeId) -> bool {
        let Some(parent) = self.node(node).parent else {
            return false;
        };
        if self.focused.is_some_and(|focused| self.contains(node, focused)) {
            self.focused = None;
        }
        self.node_mut(parent).children.retain(|child| *child != node);
        self.node_mut(node).parent = None;
        true
    }

    /// `target` followed by its ancestors, innermost first.
    fn path(&self, target: NodeId) -> Vec<NodeId> {
        let mut path = vec![target];
        let mut current = self.node(target).parent;
        while let Some(id) = current {
            path.push(id);
            current = self.node(id).parent;
        }
        path
    }

    /// Depth-first, document order, connected nodes only.
    fn find(&self, pred: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if pred(node) {
                found.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        found
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|registration| registration.id == id)
    }
}

/// In-memory document for tests and headless hosts.
///
/// Holds a small element tree under `html > body` with focus tracking and
/// bubbling event dispatch. Clones share the same document.
#[derive(Clone)]
pub struct MemoryDocument {
    dom: Rc<RefCell<Dom>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dom = self.dom.borrow();
        f.debug_struct("MemoryDocument")
            .field("nodes", &dom.nodes.len())
            .field("listeners", &dom.listeners.len())
            .field("focused", &dom.focused)
            .finish()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            dom: Rc::new(RefCell::new(Dom::new())),
        }
    }

    /// The `<html>` element.
    pub fn root(&self) -> NodeId {
        self.dom.borrow().root
    }

    /// Dispatch `keydown` to the focused element, or `<body>` if nothing is focused.
    pub fn press_key(&self, key: &str) {
        let target = {
            let dom = self.dom.borrow();
            dom.focused.unwrap_or(dom.body)
        };
        self.dispatch(EventKind::KeyDown, target, Some(key));
    }

    pub fn click(&self, node: NodeId) {
        self.dispatch(EventKind::Click, node, None);
    }

    /// Drop focus without dispatching anything.
    pub fn blur(&self) {
        self.dom.borrow_mut().focused = None;
    }

    /// Bubble an event from `target` up to the document.
    pub fn dispatch(&self, kind: EventKind, target: NodeId, key: Option<&str>) {
        let path = self.dom.borrow().path(target);
        for node in path {
            self.invoke(kind, ListenerTarget::Node(node), target, key);
        }
        self.invoke(kind, ListenerTarget::Document, target, key);
    }

    fn invoke(
        &self,
        kind: EventKind,
        at: ListenerTarget<NodeId>,
        target: NodeId,
        key: Option<&str>,
    ) {
        let matching: Vec<(ListenerId, Listener<NodeId>)> = self
            .dom
            .borrow()
            .listeners
            .iter()
            .filter(|registration| registration.kind == kind && registration.target == at)
            .map(|registration| (registration.id, registration.listener.clone()))
            .collect();
        if matching.is_empty() {
            return;
        }

        let event = DomEvent {
            kind,
            target: Some(target),
            current_target: match at {
                ListenerTarget::Node(node) => Some(node),
                ListenerTarget::Document => None,
            },
            key: key.map(str::to_string),
        };
        for (id, listener) in matching {
            // An earlier listener may have removed this one.
            if self.dom.borrow().is_registered(id) {
                listener(&event);
            }
        }
    }

    pub fn tag(&self, node: NodeId) -> Option<String> {
        match &self.dom.borrow().node(node).kind {
            NodeKind::Element(tag) => Some(tag.clone()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.dom.borrow().node(node).parent
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.dom.borrow().node(node).children.clone()
    }

    /// Concatenated text of `node` and its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let dom = self.dom.borrow();
        let mut text = String::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let data = dom.node(id);
            if let NodeKind::Text(value) = &data.kind {
                text.push_str(value);
            }
            stack.extend(data.children.iter().rev().copied());
        }
        text
    }

    /// First connected element whose attribute `name` equals `value`.
    pub fn find_by_attribute(&self, name: &str, value: &str) -> Option<NodeId> {
        self.find_all_by_attribute(name, value).into_iter().next()
    }

    pub fn find_all_by_attribute(&self, name: &str, value: &str) -> Vec<NodeId> {
        self.dom
            .borrow()
            .find(|node| node.attributes.get(name).is_some_and(|v| v == value))
    }

    /// Number of connected elements carrying `id`.
    pub fn count_by_id(&self, id: &str) -> usize {
        self.find_all_by_attribute("id", id).len()
    }

    /// Document-level listeners registered for `kind`.
    pub fn document_listener_count(&self, kind: EventKind) -> usize {
        self.dom
            .borrow()
            .listeners
            .iter()
            .filter(|r| r.kind == kind && r.target == ListenerTarget::Document)
            .count()
    }

    /// All registered listeners, document and node level.
    pub fn listener_count(&self) -> usize {
        self.dom.borrow().listeners.len()
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn body(&self) -> NodeId {
        self.dom.borrow().body
    }

    fn create_element(&self, tag: &str) -> NodeId {
        self.dom
            .borrow_mut()
            .alloc(NodeKind::Element(tag.to_ascii_lowercase()))
    }

    fn create_text(&self, text: &str) -> NodeId {
        self.dom.borrow_mut().alloc(NodeKind::Text(text.to_string()))
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        let mut dom = self.dom.borrow_mut();
        let data = dom.node_mut(*node);
        if matches!(data.kind, NodeKind::Element(_)) {
            data.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn get_attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.dom.borrow().node(*node).attributes.get(name).cloned()
    }

    fn remove_attribute(&self, node: &NodeId, name: &str) {
        self.dom.borrow_mut().node_mut(*node).attributes.remove(name);
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        if self.has_class(node, class) {
            return;
        }
        let value = match self.get_attribute(node, "class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim()),
            _ => class.to_string(),
        };
        self.set_attribute(node, "class", &value);
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        let Some(existing) = self.get_attribute(node, "class") else {
            return;
        };
        let remaining: Vec<&str> = existing.split_whitespace().filter(|c| *c != class).collect();
        if remaining.is_empty() {
            self.remove_attribute(node, "class");
        } else {
            self.set_attribute(node, "class", &remaining.join(" "));
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.get_attribute(node, "class")
            .is_some_and(|value| value.split_whitespace().any(|c| c == class))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) {
        let mut dom = self.dom.borrow_mut();
        if dom.contains(*child, *parent) {
            tracing::warn!(?parent, ?child, "refusing to append a node into its own subtree");
            return;
        }
        dom.attach(*parent, *child);
    }

    fn remove(&self, node: &NodeId) -> bool {
        self.dom.borrow_mut().detach(*node)
    }

    fn clear_children(&self, node: &NodeId) {
        let mut dom = self.dom.borrow_mut();
        for child in dom.node(*node).children.clone() {
            dom.detach(child);
        }
    }

    fn parent_node(&self, node: &NodeId) -> Option<NodeId> {
        self.parent(*node)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_by_attribute("id", id)
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        self.dom.borrow().contains(*ancestor, *node)
    }

    fn is_connected(&self, node: &NodeId) -> bool {
        self.dom.borrow().is_connected(*node)
    }

    fn active_element(&self) -> Option<NodeId> {
        self.dom.borrow().focused
    }

    fn focus(&self, node: &NodeId) {
        {
            let mut dom = self.dom.borrow_mut();
            if dom.focused == Some(*node) || !dom.is_connected(*node) {
                return;
            }
            dom.focused = Some(*node);
        }
        self.dispatch(EventKind::FocusIn, *node, None);
    }

    fn add_listener(
        &self,
        target: ListenerTarget<NodeId>,
        kind: EventKind,
        listener: Listener<NodeId>,
    ) -> ListenerId {
        let mut dom = self.dom.borrow_mut();
        let id = ListenerId::new(dom.next_listener);
        dom.next_listener += 1;
        dom.listeners.push(Registration {
            id,
            target,
            kind,
            listener,
        });
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let mut dom = self.dom.borrow_mut();
        let before = dom.listeners.len();
        dom.listeners.retain(|registration| registration.id != id);
        dom.listeners.len() != before
    }
}
