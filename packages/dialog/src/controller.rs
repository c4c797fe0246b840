//! # DialogController — lifecycle, listeners and portal rendering
//!
//! A controller moves through `UNMOUNTED → MOUNTED(CLOSED) ⇄ MOUNTED(OPEN) → UNMOUNTED`.
//!
//! | Transition | Document effects |
//! |------------|------------------|
//! | mount | create `div#<prefix>-<id>` under `<body>`, register the `keydown` listener (and the `focusin` trap when scoped to the mounted lifetime), subscribe to the open state |
//! | open | render the content snapshot into the render target, attach backdrop and close-button listeners, register the `focusin` trap (open scope), mark `<body>`, focus the content root |
//! | close | detach those listeners, empty the render target, unmark `<body>`, give focus back |
//! | unmount | dismiss any shown content, remove the render target, then drop the `keydown` and `focusin` listeners |
//!
//! Listeners capture the [`OpenState`] and call `close()` on it; the controller
//! watches the state and does the rendering. All of it runs synchronously on
//! the UI thread.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::compose::{self, ContentSnapshot};
use crate::config::{DialogConfig, FocusTrap};
use crate::document::{Document, DomEvent, EventKind, ListenerId, ListenerTarget, ESCAPE_KEY};
use crate::error::DialogError;
use crate::handle::ModalHandle;
use crate::open_state::{OpenState, WatchId};
use crate::root_id::RootId;
use crate::view::{self, Adopted, View};

/// Nodes and listeners that exist only while the dialog is shown.
struct Shown<N> {
    overlay: N,
    adopted: Vec<Adopted<N>>,
    listeners: Vec<ListenerId>,
    previous_focus: Option<N>,
}

struct Mounted {
    key_listener: ListenerId,
    focus_listener: Option<ListenerId>,
    watch: WatchId,
}

struct Shared<D: Document> {
    document: D,
    state: OpenState,
    config: DialogConfig,
    root_id: RootId,
    attributes: Vec<(String, String)>,
    content: RefCell<ContentSnapshot>,
    target: RefCell<Option<D::Node>>,
    shown: RefCell<Option<Shown<D::Node>>>,
    // Read by the focus trap, kept apart from `shown` so focus events raised
    // while rendering never hit a held borrow.
    content_root: RefCell<Option<D::Node>>,
    redirecting: Cell<bool>,
    holds_marker: Cell<bool>,
}

/// A modal dialog rendered into its own render target.
///
/// Dropping the controller unmounts it.
pub struct DialogController<D: Document + 'static> {
    shared: Rc<Shared<D>>,
    mounted: Option<Mounted>,
}

impl<D: Document + 'static> DialogController<D> {
    /// A closed, unmounted dialog showing `content`, with a generated root id.
    pub fn new(document: D, content: impl Into<View>) -> Self {
        Self {
            shared: Rc::new(Shared {
                document,
                state: OpenState::new(),
                config: DialogConfig::default(),
                root_id: RootId::generate(),
                attributes: Vec::new(),
                content: RefCell::new(ContentSnapshot::new(content.into())),
                target: RefCell::new(None),
                shown: RefCell::new(None),
                content_root: RefCell::new(None),
                redirecting: Cell::new(false),
                holds_marker: Cell::new(false),
            }),
            mounted: None,
        }
    }

    pub fn with_config(self, config: DialogConfig) -> Self {
        self.rebuild(|shared| shared.config = config)
    }

    pub fn with_root_id(self, root_id: RootId) -> Self {
        self.rebuild(|shared| shared.root_id = root_id)
    }

    /// Drive this dialog from a handle created elsewhere (e.g. by a UI hook).
    pub fn with_handle(self, handle: ModalHandle) -> Self {
        self.rebuild(|shared| shared.state = handle.state().clone())
    }

    /// Attributes applied to the content root, after its defaults.
    pub fn with_attributes<I, K, V>(self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let attributes: Vec<(String, String)> = attributes
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        self.rebuild(|shared| shared.attributes = attributes)
    }

    // Builders only run before mount, while `shared` has no other owner.
    fn rebuild(mut self, f: impl FnOnce(&mut Shared<D>)) -> Self {
        match Rc::get_mut(&mut self.shared) {
            Some(shared) => f(shared),
            None => tracing::warn!("dialog already mounted; builder call ignored"),
        }
        self
    }

    /// The imperative handle for this dialog. Clones compare equal.
    pub fn handle(&self) -> ModalHandle {
        ModalHandle::from(self.shared.state.clone())
    }

    pub fn root_id(&self) -> &RootId {
        &self.shared.root_id
    }

    /// Id of the render target element, `<prefix>-<root id>`.
    pub fn element_id(&self) -> String {
        self.shared.element_id()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.shared.state.is_open()
    }

    pub fn document(&self) -> &D {
        &self.shared.document
    }

    pub fn config(&self) -> &DialogConfig {
        &self.shared.config
    }

    /// Create the render target and start listening.
    ///
    /// Mounting an already mounted dialog does nothing.
    ///
    /// # Panics
    ///
    /// If the dialog is already open and its render target cannot be found
    /// right after being created.
    pub fn mount(&mut self) -> Result<(), DialogError> {
        if self.mounted.is_some() {
            tracing::warn!(id = %self.shared.root_id, "dialog already mounted");
            return Ok(());
        }

        let shared = &self.shared;
        let document = &shared.document;
        let element_id = shared.element_id();
        if document.element_by_id(&element_id).is_some() {
            return Err(DialogError::DuplicateRenderTarget(element_id));
        }

        let container = match &shared.config.document.container_id {
            Some(id) => document
                .element_by_id(id)
                .ok_or_else(|| DialogError::MissingContainer(id.clone()))?,
            None => document.body(),
        };

        let target = document.create_element("div");
        document.set_attribute(&target, "id", &element_id);
        document.append_child(&container, &target);
        *shared.target.borrow_mut() = Some(target);

        let state = shared.state.clone();
        let close_on_escape = shared.config.dismiss.escape;
        let key_listener = document.add_listener(
            ListenerTarget::Document,
            EventKind::KeyDown,
            Rc::new(move |event: &DomEvent<D::Node>| {
                if close_on_escape && event.is_key(ESCAPE_KEY) {
                    state.close();
                }
            }),
        );
        let focus_listener =
            (shared.config.focus.trap == FocusTrap::WhileMounted).then(|| shared.add_focus_trap());

        let weak = Rc::downgrade(shared);
        let watch = shared.state.watch(move |_| {
            if let Some(shared) = weak.upgrade() {
                shared.sync();
            }
        });

        self.mounted = Some(Mounted {
            key_listener,
            focus_listener,
            watch,
        });
        tracing::debug!(target_id = %element_id, "dialog mounted");

        self.shared.sync();
        Ok(())
    }

    /// Tear down: dismiss, remove the render target, drop the listeners.
    ///
    /// Runs once; later calls do nothing. A render target that was already
    /// removed by someone else is tolerated.
    pub fn unmount(&mut self) {
        let Some(mounted) = self.mounted.take() else {
            return;
        };
        let shared = &self.shared;
        let document = &shared.document;

        shared.state.unwatch(mounted.watch);
        shared.dismiss();

        let target = shared.target.borrow_mut().take();
        if let Some(target) = target {
            if !document.remove(&target) {
                tracing::debug!(
                    target_id = %shared.element_id(),
                    "render target was already detached"
                );
            }
        }
        document.remove_listener(mounted.key_listener);
        if let Some(id) = mounted.focus_listener {
            document.remove_listener(id);
        }
        tracing::debug!(target_id = %shared.element_id(), "dialog unmounted");
    }

    /// Replace the dialog body. Re-renders right away if the dialog is shown.
    pub fn set_content(&mut self, content: impl Into<View>) {
        if !self.shared.content.borrow_mut().replace(content.into()) {
            return;
        }
        self.shared.rerender();
    }
}

impl<D: Document + 'static> Drop for DialogController<D> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<D: Document + 'static> fmt::Debug for DialogController<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogController")
            .field("root_id", &self.shared.root_id)
            .field("mounted", &self.is_mounted())
            .field("open", &self.is_open())
            .finish()
    }
}

impl<D: Document + 'static> Shared<D> {
    fn element_id(&self) -> String {
        self.root_id.element_id(&self.config.document.root_id_prefix)
    }

    /// Bring the document in line with the open flag.
    fn sync(self: &Rc<Self>) {
        if self.target.borrow().is_none() {
            return;
        }
        let shown = self.shown.borrow().is_some();
        match (self.state.is_open(), shown) {
            (true, false) => {
                let previous_focus = self.document.active_element();
                self.present(previous_focus);
            }
            (false, true) => self.dismiss(),
            _ => {}
        }
    }

    fn present(self: &Rc<Self>, previous_focus: Option<D::Node>) {
        let document = &self.document;
        let element_id = self.element_id();
        let Some(target) = document.element_by_id(&element_id) else {
            panic!("render target `{element_id}` is missing while the dialog is open");
        };

        let composed = self
            .content
            .borrow_mut()
            .view(&self.attributes, &self.config);
        let Some(anchors) = compose::render(document, &target, &composed) else {
            tracing::error!(target_id = %element_id, "dialog markup is missing its anchors");
            return;
        };
        let compose::Anchors {
            overlay,
            content_root,
            close,
            adopted,
        } = anchors;

        let mut listeners = Vec::new();
        if self.config.dismiss.backdrop {
            let state = self.state.clone();
            listeners.push(document.add_listener(
                ListenerTarget::Node(overlay.clone()),
                EventKind::Click,
                Rc::new(move |event: &DomEvent<D::Node>| {
                    // Only the backdrop itself, never a click bubbling out of the content.
                    if event.hits_current_target() {
                        state.close();
                    }
                }),
            ));
        }
        let state = self.state.clone();
        listeners.push(document.add_listener(
            ListenerTarget::Node(close),
            EventKind::Click,
            Rc::new(move |_: &DomEvent<D::Node>| state.close()),
        ));
        if self.config.focus.trap == FocusTrap::WhileOpen {
            listeners.push(self.add_focus_trap());
        }

        *self.content_root.borrow_mut() = Some(content_root.clone());
        *self.shown.borrow_mut() = Some(Shown {
            overlay,
            adopted,
            listeners,
            previous_focus,
        });
        self.acquire_marker();
        tracing::debug!(
            target_id = %element_id,
            revision = self.content.borrow().revision(),
            "dialog opened"
        );

        if self.config.focus.autofocus {
            document.focus(&content_root);
        }
    }

    /// Remove shown content, leaving the empty render target in place.
    fn detach(&self) -> Option<Shown<D::Node>> {
        let shown = self.shown.borrow_mut().take()?;
        for id in &shown.listeners {
            self.document.remove_listener(*id);
        }
        *self.content_root.borrow_mut() = None;
        view::release(&self.document, &shown.adopted);
        let target = self.target.borrow().clone();
        match target {
            Some(target) => self.document.clear_children(&target),
            None => {
                self.document.remove(&shown.overlay);
            }
        }
        Some(shown)
    }

    fn dismiss(&self) {
        let Some(shown) = self.detach() else {
            return;
        };
        self.release_marker();
        tracing::debug!(target_id = %self.element_id(), "dialog closed");

        if self.config.focus.restore {
            if let Some(previous) = shown.previous_focus {
                if self.document.is_connected(&previous) {
                    self.document.focus(&previous);
                }
            }
        }
    }

    fn rerender(self: &Rc<Self>) {
        let Some(content_root) = self.content_root.borrow().clone() else {
            return;
        };
        let had_focus = self
            .document
            .active_element()
            .is_some_and(|active| self.document.contains(&content_root, &active));
        let Some(shown) = self.detach() else {
            return;
        };
        self.present(shown.previous_focus);
        if had_focus && !self.config.focus.autofocus {
            let root = self.content_root.borrow().clone();
            if let Some(root) = root {
                self.document.focus(&root);
            }
        }
    }

    fn add_focus_trap(self: &Rc<Self>) -> ListenerId {
        let weak: Weak<Self> = Rc::downgrade(self);
        self.document.add_listener(
            ListenerTarget::Document,
            EventKind::FocusIn,
            Rc::new(move |event: &DomEvent<D::Node>| {
                if let Some(shared) = weak.upgrade() {
                    shared.contain_focus(event);
                }
            }),
        )
    }

    fn contain_focus(&self, event: &DomEvent<D::Node>) {
        if self.redirecting.get() {
            return;
        }
        let Some(root) = self.content_root.borrow().clone() else {
            return;
        };
        let inside = event
            .target
            .as_ref()
            .is_some_and(|target| self.document.contains(&root, target));
        if inside {
            return;
        }

        tracing::trace!(target_id = %self.element_id(), "focus left the dialog; pulling it back");
        self.redirecting.set(true);
        self.document.focus(&root);
        self.redirecting.set(false);
    }

    fn acquire_marker(&self) {
        let marker = &self.config.document;
        if !marker.apply_body_open_marker || self.holds_marker.get() {
            return;
        }
        let body = self.document.body();
        let count = self.open_count(&body) + 1;
        self.document
            .set_attribute(&body, &marker.body_open_attribute, &count.to_string());
        self.document.add_class(&body, &marker.body_open_class);
        self.holds_marker.set(true);
    }

    fn release_marker(&self) {
        if !self.holds_marker.replace(false) {
            return;
        }
        let marker = &self.config.document;
        let body = self.document.body();
        match self.open_count(&body).saturating_sub(1) {
            0 => {
                self.document.remove_attribute(&body, &marker.body_open_attribute);
                self.document.remove_class(&body, &marker.body_open_class);
            }
            count => self
                .document
                .set_attribute(&body, &marker.body_open_attribute, &count.to_string()),
        }
    }

    fn open_count(&self, body: &D::Node) -> u32 {
        self.document
            .get_attribute(body, &self.config.document.body_open_attribute)
            .and_then(|value| value.parse().ok())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDocument, NodeId};
    use crate::view::Element;

    fn controller(doc: &MemoryDocument, id: &str) -> DialogController<MemoryDocument> {
        DialogController::new(doc.clone(), Element::new("p").child("Hello"))
            .with_root_id(RootId::new(id).unwrap())
    }

    fn target(doc: &MemoryDocument, id: &str) -> Option<NodeId> {
        doc.element_by_id(&format!("modal-root-{id}"))
    }

    #[test]
    fn test_mount_creates_empty_target() {
        let doc = MemoryDocument::new();
        let mut dialog = controller(&doc, "a");
        assert!(target(&doc, "a").is_none());

        dialog.mount().unwrap();
        let node = target(&doc, "a").unwrap();
        assert_eq!(doc.parent(node), Some(doc.body()));
        assert!(doc.children(node).is_empty());
        assert_eq!(doc.document_listener_count(EventKind::KeyDown), 1);
        assert_eq!(doc.document_listener_count(EventKind::FocusIn), 0);
        assert_eq!(dialog.element_id(), "modal-root-a");
    }

    #[test]
    fn test_mount_twice_is_noop() {
        let doc = MemoryDocument::new();
        let mut dialog = controller(&doc, "a");
        dialog.mount().unwrap();
        dialog.mount().unwrap();
        assert_eq!(doc.count_by_id("modal-root-a"), 1);
        assert_eq!(doc.document_listener_count(EventKind::KeyDown), 1);
    }

    #[test]
    fn test_duplicate_target_is_rejected() {
        let doc = MemoryDocument::new();
        let mut first = controller(&doc, "same");
        let mut second = controller(&doc, "same");
        first.mount().unwrap();

        let err = second.mount().unwrap_err();
        assert!(matches!(err, DialogError::DuplicateRenderTarget(ref id) if id == "modal-root-same"));
        assert!(!second.is_mounted());
        assert_eq!(doc.count_by_id("modal-root-same"), 1);
    }

    #[test]
    fn test_open_renders_into_target() {
        let doc = MemoryDocument::new();
        let mut dialog = controller(&doc, "a");
        dialog.mount().unwrap();
        dialog.handle().open();

        let node = target(&doc, "a").unwrap();
        let overlay = doc.children(node)[0];
        assert_eq!(doc.get_attribute(&overlay, "role").as_deref(), Some("dialog"));
        assert_eq!(doc.get_attribute(&overlay, "aria-modal").as_deref(), Some("true"));
        assert_eq!(doc.text_content(node), "Hello");

        let root = doc.find_by_attribute("role", "document").unwrap();
        assert_eq!(doc.active_element(), Some(root));
        assert_eq!(doc.document_listener_count(EventKind::FocusIn), 1);
    }

    #[test]
    fn test_open_before_mount_renders_on_mount() {
        let doc = MemoryDocument::new();
        let mut dialog = controller(&doc, "a");
        dialog.handle().open();
        assert!(dialog.is_open());
        assert!(doc.find_by_attribute("role", "dialog").is_none());

        dialog.mount().unwrap();
        assert!(doc.find_by_attribute("role", "dialog").is_some());
    }

    #[test]
    fn test_builders_after_mount_are_ignored() {
        let doc = MemoryDocument::new();
        let mut dialog = controller(&doc, "a");
        dialog.mount().unwrap();
        let handle = dialog.handle();

        let dialog = dialog.with_root_id(RootId::new("b").unwrap());
        assert_eq!(dialog.root_id().as_str(), "a");
        assert_eq!(dialog.handle(), handle);
    }

    #[test]
    fn test_with_handle_shares_state() {
        let doc = MemoryDocument::new();
        let handle = ModalHandle::new();
        let mut dialog = controller(&doc, "a").with_handle(handle.clone());
        dialog.mount().unwrap();

        handle.open();
        assert!(dialog.is_open());
        assert_eq!(dialog.handle(), handle);
        assert!(doc.find_by_attribute("role", "dialog").is_some());
    }

    #[test]
    fn test_set_content_rerenders_when_open() {
        let doc = MemoryDocument::new();
        let mut dialog = controller(&doc, "a");
        dialog.mount().unwrap();
        dialog.handle().open();

        dialog.set_content(View::text("Updated"));
        let node = target(&doc, "a").unwrap();
        assert_eq!(doc.text_content(node), "Updated");
        assert_eq!(doc.children(node).len(), 1);
        assert!(dialog.is_open());

        let root = doc.find_by_attribute("role", "document").unwrap();
        assert_eq!(doc.active_element(), Some(root));
    }

    #[test]
    fn test_set_content_while_closed_shows_latest_on_open() {
        let doc = MemoryDocument::new();
        let mut dialog = controller(&doc, "a");
        dialog.mount().unwrap();
        dialog.handle().open();
        dialog.handle().close();

        dialog.set_content(View::text("Second"));
        assert_eq!(doc.text_content(target(&doc, "a").unwrap()), "");
        dialog.handle().open();
        assert_eq!(doc.text_content(target(&doc, "a").unwrap()), "Second");
    }

    #[test]
    fn test_close_restores_focus() {
        let doc = MemoryDocument::new();
        let trigger = doc.create_element("button");
        doc.append_child(&doc.body(), &trigger);
        doc.focus(&trigger);

        let mut dialog = controller(&doc, "a");
        dialog.mount().unwrap();
        dialog.handle().open();
        assert_ne!(doc.active_element(), Some(trigger));

        dialog.handle().close();
        assert_eq!(doc.active_element(), Some(trigger));
    }

    #[test]
    fn test_escape_disabled() {
        let doc = MemoryDocument::new();
        let mut dialog = controller(&doc, "a")
            .with_config(DialogConfig::default().with_dismiss(false, true));
        dialog.mount().unwrap();
        dialog.handle().open();

        doc.press_key(ESCAPE_KEY);
        assert!(dialog.is_open());
    }

    #[test]
    fn test_backdrop_disabled() {
        let doc = MemoryDocument::new();
        let mut dialog = controller(&doc, "a")
            .with_config(DialogConfig::default().with_dismiss(true, false));
        dialog.mount().unwrap();
        dialog.handle().open();

        let overlay = doc.find_by_attribute("role", "dialog").unwrap();
        doc.click(overlay);
        assert!(dialog.is_open());
    }

    #[test]
    fn test_unmount_while_open_cleans_everything() {
        let doc = MemoryDocument::new();
        let mut dialog = controller(&doc, "a");
        dialog.mount().unwrap();
        dialog.handle().open();

        dialog.unmount();
        assert!(target(&doc, "a").is_none());
        assert_eq!(doc.listener_count(), 0);
        assert!(!doc.has_class(&doc.body(), "modal-open"));

        dialog.unmount();
        assert!(!dialog.is_mounted());
    }

    #[test]
    fn test_drop_unmounts() {
        let doc = MemoryDocument::new();
        {
            let mut dialog = controller(&doc, "a");
            dialog.mount().unwrap();
            dialog.handle().open();
        }
        assert!(target(&doc, "a").is_none());
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn test_remount_reuses_root_id() {
        let doc = MemoryDocument::new();
        let mut dialog = DialogController::new(doc.clone(), View::text("x"));
        dialog.mount().unwrap();
        let first = dialog.element_id();
        dialog.unmount();
        dialog.mount().unwrap();

        assert_eq!(dialog.element_id(), first);
        assert_eq!(doc.count_by_id(&first), 1);
    }

    #[test]
    #[should_panic(expected = "is missing while the dialog is open")]
    fn test_missing_target_while_opening_panics() {
        let doc = MemoryDocument::new();
        let mut dialog = controller(&doc, "a");
        dialog.mount().unwrap();
        let node = target(&doc, "a").unwrap();
        doc.remove(&node);

        dialog.handle().open();
    }

    #[test]
    fn test_content_named_like_dialog_parts_stays_content() {
        let doc = MemoryDocument::new();
        let content = Element::new("div")
            .node_ref("overlay")
            .child(Element::new("span").node_ref("content").child("Body"))
            .child(Element::new("button").node_ref("close").child("OK"));
        let mut dialog = DialogController::new(doc.clone(), content)
            .with_root_id(RootId::new("a").unwrap());
        dialog.mount().unwrap();
        dialog.handle().open();

        let root = doc.find_by_attribute("role", "document").unwrap();
        assert_eq!(doc.active_element(), Some(root));

        let body = doc.children(root)[1];
        let user_div = doc.children(body)[0];
        let user_span = doc.children(user_div)[0];
        let user_button = doc.children(user_div)[1];
        doc.click(user_div);
        doc.click(user_span);
        doc.click(user_button);
        assert!(dialog.is_open());

        doc.focus(&user_span);
        assert_eq!(doc.active_element(), Some(user_span));

        let overlay = doc.find_by_attribute("role", "dialog").unwrap();
        doc.click(overlay);
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_adopted_content_returns_home_on_close() {
        let doc = MemoryDocument::new();
        let home = doc.create_element("div");
        doc.append_child(&doc.body(), &home);
        let slot = doc.create_element("div");
        doc.set_attribute(&slot, "id", "slot");
        doc.append_child(&home, &slot);
        let confirm = doc.create_element("button");
        doc.append_child(&slot, &confirm);

        let mut dialog = DialogController::new(doc.clone(), View::adopt("slot"))
            .with_root_id(RootId::new("a").unwrap());
        dialog.mount().unwrap();

        for _ in 0..2 {
            dialog.handle().open();
            let node = target(&doc, "a").unwrap();
            assert!(doc.contains(&node, &slot));
            doc.click(confirm);
            assert!(dialog.is_open());

            dialog.handle().close();
            assert_eq!(doc.parent(slot), Some(home));
            assert!(doc.children(target(&doc, "a").unwrap()).is_empty());
        }

        dialog.handle().open();
        dialog.unmount();
        assert_eq!(doc.parent(slot), Some(home));
    }

    #[test]
    fn test_container_hosts_render_target() {
        let doc = MemoryDocument::new();
        let app = doc.create_element("main");
        doc.set_attribute(&app, "id", "main");
        doc.append_child(&doc.body(), &app);

        let mut dialog =
            controller(&doc, "a").with_config(DialogConfig::default().with_container("main"));
        dialog.mount().unwrap();
        assert_eq!(doc.parent(target(&doc, "a").unwrap()), Some(app));

        dialog.handle().open();
        assert!(doc.has_class(&doc.body(), "modal-open"));
    }

    #[test]
    fn test_missing_container_fails_mount() {
        let doc = MemoryDocument::new();
        let mut dialog =
            controller(&doc, "a").with_config(DialogConfig::default().with_container("app"));

        let err = dialog.mount().unwrap_err();
        assert!(matches!(err, DialogError::MissingContainer(ref id) if id == "app"));
        assert!(!dialog.is_mounted());
        assert_eq!(doc.listener_count(), 0);
    }
}
