//! # dialog — modal dialog core
//!
//! A modal dialog that renders into its own top-level container, tracks its
//! open/closed state, traps focus while shown, and closes on Escape, on a
//! backdrop click or from its close button.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`open_state`] | [`OpenState`]: the single "is open" flag with stable `open`/`close` transitions and watchers |
//! | [`handle`] | [`ModalHandle`]: the imperative `open`/`close` handle given to the dialog's owner |
//! | [`controller`] | [`DialogController`]: mount/unmount lifecycle, document listeners, focus trap, portal rendering |
//! | [`document`] | [`Document`]: the host boundary every page effect goes through |
//! | [`view`] | [`View`]: framework-neutral content and the [`render`](view::render) portal operation |
//! | [`config`] | [`DialogConfig`]: behaviour switches, loadable from TOML |
//!
//! ## Hosts
//!
//! - [`MemoryDocument`]: in-memory document for tests and headless hosts.
//! - [`WebDocument`] (wasm32 + `web` feature): the browser document via `web-sys`.
//!
//! ## Example
//!
//! ```
//! use dialog::{DialogController, Document, Element, MemoryDocument};
//!
//! let doc = MemoryDocument::new();
//! let mut dialog = DialogController::new(doc.clone(), Element::new("p").child("Saved!"));
//! dialog.mount().unwrap();
//!
//! let handle = dialog.handle();
//! handle.open();
//! assert!(doc.element_by_id(&dialog.element_id()).is_some());
//!
//! doc.press_key("Escape");
//! assert!(!handle.is_open());
//! ```

mod compose;
pub mod config;
pub mod controller;
pub mod document;
mod error;
pub mod handle;
pub mod open_state;
mod root_id;
pub mod view;

mod memory;
pub use memory::{MemoryDocument, NodeId};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebDocument;

pub use config::{DialogConfig, DismissConfig, DocumentConfig, FocusConfig, FocusTrap};
pub use controller::DialogController;
pub use document::{Document, DomEvent, EventKind, Listener, ListenerId, ListenerTarget, ESCAPE_KEY};
pub use error::DialogError;
pub use handle::ModalHandle;
pub use open_state::{OpenState, Transition, WatchId};
pub use root_id::RootId;
pub use view::{Element, View};
