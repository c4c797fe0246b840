//! # Browser document — `web-sys` host
//!
//! [`WebDocument`] is the [`Document`] implementation used on the **web platform**.
//! Nodes are plain [`web_sys::Node`]s; listeners are wrapped in
//! [`Closure`]s and kept in a registry keyed by [`ListenerId`] so they can be
//! detached with `removeEventListener` and dropped.
//!
//! ## Error handling
//!
//! DOM calls that can throw (`createElement` with a bad tag, `appendChild`
//! into a text node, ...) are swallowed: the dialog degrades to missing
//! markup rather than a panic inside an event handler.
//!
//! ## Dropping listeners from inside their own dispatch
//!
//! Closing a dialog from its close button removes that button's listener while
//! it runs. `wasm-bindgen` defers freeing a closure that is still executing, so
//! dropping it straight from `remove_listener` is fine.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, KeyboardEvent, Node};

use crate::document::{Document, DomEvent, EventKind, Listener, ListenerId, ListenerTarget};

struct Registered {
    target: EventTarget,
    kind: EventKind,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

/// The page's `document`, seen through [`Document`].
///
/// Clones share one listener registry.
#[derive(Clone)]
pub struct WebDocument {
    document: web_sys::Document,
    listeners: Rc<RefCell<HashMap<ListenerId, Registered>>>,
    next_listener: Rc<Cell<u64>>,
}

impl fmt::Debug for WebDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebDocument")
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self {
            document,
            listeners: Rc::new(RefCell::new(HashMap::new())),
            next_listener: Rc::new(Cell::new(1)),
        }
    }

    /// The current window's document, if there is one.
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document))
    }
}

impl Document for WebDocument {
    type Node = Node;

    fn body(&self) -> Node {
        match self.document.body() {
            Some(body) => body.into(),
            None => match self.document.document_element() {
                Some(root) => root.into(),
                None => self.document.clone().into(),
            },
        }
    }

    fn create_element(&self, tag: &str) -> Node {
        match self.document.create_element(tag) {
            Ok(element) => element.into(),
            Err(err) => {
                tracing::error!(tag, ?err, "createElement failed");
                self.document.create_text_node("").into()
            }
        }
    }

    fn create_text(&self, text: &str) -> Node {
        self.document.create_text_node(text).into()
    }

    fn set_attribute(&self, node: &Node, name: &str, value: &str) {
        if let Some(element) = node.dyn_ref::<Element>() {
            let _ = element.set_attribute(name, value);
        }
    }

    fn get_attribute(&self, node: &Node, name: &str) -> Option<String> {
        node.dyn_ref::<Element>()?.get_attribute(name)
    }

    fn remove_attribute(&self, node: &Node, name: &str) {
        if let Some(element) = node.dyn_ref::<Element>() {
            let _ = element.remove_attribute(name);
        }
    }

    fn add_class(&self, node: &Node, class: &str) {
        if let Some(element) = node.dyn_ref::<Element>() {
            let _ = element.class_list().add_1(class);
        }
    }

    fn remove_class(&self, node: &Node, class: &str) {
        if let Some(element) = node.dyn_ref::<Element>() {
            let _ = element.class_list().remove_1(class);
        }
    }

    fn has_class(&self, node: &Node, class: &str) -> bool {
        node.dyn_ref::<Element>()
            .is_some_and(|element| element.class_list().contains(class))
    }

    fn append_child(&self, parent: &Node, child: &Node) {
        let _ = parent.append_child(child);
    }

    fn remove(&self, node: &Node) -> bool {
        match node.parent_node() {
            Some(parent) => parent.remove_child(node).is_ok(),
            None => false,
        }
    }

    fn clear_children(&self, node: &Node) {
        while let Some(child) = node.first_child() {
            if node.remove_child(&child).is_err() {
                break;
            }
        }
    }

    fn parent_node(&self, node: &Node) -> Option<Node> {
        node.parent_node()
    }

    fn element_by_id(&self, id: &str) -> Option<Node> {
        self.document.get_element_by_id(id).map(Into::into)
    }

    fn contains(&self, ancestor: &Node, node: &Node) -> bool {
        ancestor.contains(Some(node))
    }

    fn is_connected(&self, node: &Node) -> bool {
        node.is_connected()
    }

    fn active_element(&self) -> Option<Node> {
        self.document.active_element().map(Into::into)
    }

    fn focus(&self, node: &Node) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            let _ = element.focus();
        }
    }

    fn add_listener(
        &self,
        target: ListenerTarget<Node>,
        kind: EventKind,
        listener: Listener<Node>,
    ) -> ListenerId {
        let id = ListenerId::new(self.next_listener.get());
        self.next_listener.set(id.raw() + 1);

        let (event_target, current_target): (EventTarget, Option<Node>) = match target {
            ListenerTarget::Document => (self.document.clone().into(), None),
            ListenerTarget::Node(node) => (node.clone().into(), Some(node)),
        };
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let dom_event = DomEvent {
                kind,
                target: event.target().and_then(|t| t.dyn_into::<Node>().ok()),
                current_target: current_target.clone(),
                key: event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key),
            };
            listener(&dom_event);
        });

        if let Err(err) = event_target
            .add_event_listener_with_callback(kind.as_str(), callback.as_ref().unchecked_ref())
        {
            tracing::error!(event = kind.as_str(), ?err, "addEventListener failed");
        }
        self.listeners.borrow_mut().insert(
            id,
            Registered {
                target: event_target,
                kind,
                callback,
            },
        );
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let Some(registered) = self.listeners.borrow_mut().remove(&id) else {
            return false;
        };
        let _ = registered.target.remove_event_listener_with_callback(
            registered.kind.as_str(),
            registered.callback.as_ref().unchecked_ref(),
        );
        true
    }
}
