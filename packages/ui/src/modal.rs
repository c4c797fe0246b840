//! Dioxus binding for the dialog core.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dialog::{DialogConfig, DialogController, Document, ModalHandle, RootId, View};
use dioxus::prelude::*;

use crate::MODAL_CSS;

/// Element Dioxus mounts the app into, and the one it listens for bubbling
/// events on.
const APP_ROOT_ID: &str = "main";

/// Handle plus a signal that mirrors its open state.
#[derive(Clone, PartialEq)]
pub struct UseModal {
    pub handle: ModalHandle,
    pub is_open: Signal<bool>,
}

/// Create a modal handle once per scope and keep `is_open` in sync with it.
pub fn use_modal() -> UseModal {
    let is_open = use_signal(|| false);
    let (handle, watch) = use_hook(|| {
        let handle = ModalHandle::new();
        let watch = handle.watch(move |open| {
            let mut is_open = is_open;
            is_open.set(open);
        });
        (handle, watch)
    });

    let watched = handle.clone();
    use_drop(move || {
        watched.unwatch(watch);
    });

    UseModal { handle, is_open }
}

struct Hosted<D: Document + 'static> {
    controller: RefCell<DialogController<D>>,
    slot_id: String,
    config: DialogConfig,
    attributes: Vec<(String, String)>,
    warned: Cell<bool>,
}

/// A modal dialog driven by `handle`, showing `children`.
///
/// Dioxus renders the children into a hidden slot; the dialog borrows that
/// slot while it is open and hands it back on close, so handlers and signals
/// inside the children keep working. The dialog's render target goes under
/// `#main` unless `config` names another container, because Dioxus only sees
/// events that bubble up to its root.
///
/// `config` and `attributes` are read once, when the dialog is created; later
/// changes are logged and ignored.
///
/// Only the web platform has a page to render into. Elsewhere the component
/// renders nothing and logs a warning.
#[component]
pub fn Modal(
    handle: ModalHandle,
    #[props(default)] config: DialogConfig,
    /// Extra attributes for the dialog's content box.
    #[props(default)]
    attributes: Vec<(String, String)>,
    children: Element,
) -> Element {
    let hosted = use_hook(|| {
        let document = platform_document()?;
        let root_id = RootId::generate();
        let slot_id = format!("modal-slot-{root_id}");

        let mut placed = config.clone();
        if placed.document.container_id.is_none() {
            placed.document.container_id = Some(APP_ROOT_ID.to_string());
        }
        let controller = DialogController::new(document, View::adopt(slot_id.clone()))
            .with_root_id(root_id)
            .with_handle(handle.clone())
            .with_config(placed)
            .with_attributes(attributes.clone());

        Some(Rc::new(Hosted {
            controller: RefCell::new(controller),
            slot_id,
            config: config.clone(),
            attributes: attributes.clone(),
            warned: Cell::new(false),
        }))
    });

    if let Some(hosted) = &hosted {
        let changed = hosted.config != config || hosted.attributes != attributes;
        if changed && !hosted.warned.replace(true) {
            tracing::warn!(
                slot = %hosted.slot_id,
                "Modal config and attributes are fixed once created; ignoring the new values"
            );
        }
    }

    // The slot only exists once this render is committed.
    let mounting = hosted.clone();
    use_effect(move || {
        if let Some(hosted) = &mounting {
            if let Err(e) = hosted.controller.borrow_mut().mount() {
                tracing::error!("Failed to mount modal: {}", e);
            }
        }
    });

    let dropped = hosted.clone();
    use_drop(move || {
        if let Some(hosted) = dropped {
            hosted.controller.borrow_mut().unmount();
        }
    });

    let slot = hosted.as_ref().map(|hosted| {
        rsx! {
            div { class: "modal-slot-home", hidden: true,
                div { id: "{hosted.slot_id}", {children} }
            }
        }
    });

    rsx! {
        document::Stylesheet { href: MODAL_CSS }
        {slot}
    }
}

/// The document dialogs render into on this platform.
///
/// - **Web** (WASM + `web` feature): the browser document
/// - **Desktop / native**: none; there is no DOM to put a dialog in
fn platform_document() -> Option<impl Document + 'static> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let document = dialog::WebDocument::from_window();
        if document.is_none() {
            tracing::error!("No browser document available for modal");
        }
        document
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        tracing::warn!("Modal needs a browser document; nothing is shown on this platform");
        None::<dialog::MemoryDocument>
    }
}
