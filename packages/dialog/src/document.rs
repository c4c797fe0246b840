//! # Document — the host boundary
//!
//! Everything the dialog does to the page goes through the [`Document`] trait:
//! building nodes, attaching the render target to `<body>`, focus, and
//! document/node event listeners. The controller logic is the same against the
//! in-memory document ([`crate::MemoryDocument`]) used by tests and headless
//! hosts, and the browser document ([`crate::WebDocument`], wasm only).
//!
//! Implementations take `&self` and keep their own interior mutability. They
//! must not hold internal borrows while invoking listeners: a listener is free
//! to call back into the document.

use std::fmt;
use std::rc::Rc;

/// The key value reported for the Escape key.
pub const ESCAPE_KEY: &str = "Escape";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    FocusIn,
    Click,
}

impl EventKind {
    /// DOM event type name.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::KeyDown => "keydown",
            EventKind::FocusIn => "focusin",
            EventKind::Click => "click",
        }
    }
}

/// Registration token returned by [`Document::add_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Where a listener is attached.
#[derive(Clone, Debug, PartialEq)]
pub enum ListenerTarget<N> {
    Document,
    Node(N),
}

/// An event as seen by a listener.
#[derive(Clone, Debug, PartialEq)]
pub struct DomEvent<N> {
    pub kind: EventKind,
    /// Node the event was dispatched to.
    pub target: Option<N>,
    /// Node the listener is attached to; `None` for document listeners.
    pub current_target: Option<N>,
    /// `KeyboardEvent.key` for key events.
    pub key: Option<String>,
}

impl<N: PartialEq> DomEvent<N> {
    pub fn is_key(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }

    /// Whether the event landed on the listener's own node rather than a descendant.
    pub fn hits_current_target(&self) -> bool {
        match (&self.target, &self.current_target) {
            (Some(target), Some(current)) => target == current,
            _ => false,
        }
    }
}

pub type Listener<N> = Rc<dyn Fn(&DomEvent<N>)>;

/// A host document the dialog renders into.
pub trait Document {
    type Node: Clone + PartialEq + fmt::Debug + 'static;

    fn body(&self) -> Self::Node;

    /// A new, detached element.
    fn create_element(&self, tag: &str) -> Self::Node;

    /// A new, detached text node.
    fn create_text(&self, text: &str) -> Self::Node;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    fn get_attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn remove_attribute(&self, node: &Self::Node, name: &str);

    fn add_class(&self, node: &Self::Node, class: &str);

    fn remove_class(&self, node: &Self::Node, class: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Append `child` as the last child of `parent`, detaching it from any previous parent.
    fn append_child(&self, parent: &Self::Node, child: &Self::Node);

    /// Detach `node` from its parent. Returns `false` if it had no parent.
    fn remove(&self, node: &Self::Node) -> bool;

    fn clear_children(&self, node: &Self::Node);

    fn parent_node(&self, node: &Self::Node) -> Option<Self::Node>;

    /// First connected element with the given `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn is_connected(&self, node: &Self::Node) -> bool;

    fn active_element(&self) -> Option<Self::Node>;

    /// Move focus to `node`, dispatching `focusin` if focus actually changed.
    fn focus(&self, node: &Self::Node);

    fn add_listener(
        &self,
        target: ListenerTarget<Self::Node>,
        kind: EventKind,
        listener: Listener<Self::Node>,
    ) -> ListenerId;

    /// Returns `false` if the listener was already gone.
    fn remove_listener(&self, id: ListenerId) -> bool;
}
