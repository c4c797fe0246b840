//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const MODAL_CSS: Asset = asset!("/assets/modal.css");

mod modal;
pub use modal::{use_modal, Modal, UseModal};

// Re-export the dialog types component users need
pub use dialog::{DialogConfig, FocusTrap, ModalHandle, View};
