//! # Dialog configuration — `dialog.toml`
//!
//! Behaviour switches for a [`DialogController`](crate::DialogController). The
//! config can be built in code or parsed from TOML so host apps can ship it next
//! to their other settings.
//!
//! ## Structure
//!
//! ```toml
//! [dismiss]
//! escape = true            # Escape closes the dialog
//! backdrop = true          # a click landing on the backdrop closes it
//!
//! [focus]
//! trap = "while-open"      # "while-open" | "while-mounted" | "disabled"
//! autofocus = true         # focus the content root when opened
//! restore = true           # give focus back to the previous element on close
//!
//! [document]
//! root_id_prefix = "modal-root"
//! container_id = "main"    # optional; render targets go under <body> when unset
//! apply_body_open_marker = true
//! body_open_class = "modal-open"
//! body_open_attribute = "data-modal-open"
//! close_label = "Close Modal"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DialogConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`DismissConfig`] | Which interactions close the dialog. |
//! | [`FocusConfig`] | Focus trap scope, autofocus and focus return. |
//! | [`DocumentConfig`] | Render target naming and placement, and the body "modal open" marker. |
//!
//! Every section derives `Default` with the production defaults, so an empty
//! file is equivalent to [`DialogConfig::default`].

use serde::{Deserialize, Serialize};

use crate::error::DialogError;

/// Top-level dialog configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogConfig {
    #[serde(default)]
    pub dismiss: DismissConfig,
    #[serde(default)]
    pub focus: FocusConfig,
    #[serde(default)]
    pub document: DocumentConfig,
}

/// Interactions that dismiss the dialog. The close button always closes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DismissConfig {
    #[serde(default = "enabled")]
    pub escape: bool,
    #[serde(default = "enabled")]
    pub backdrop: bool,
}

impl Default for DismissConfig {
    fn default() -> Self {
        Self {
            escape: true,
            backdrop: true,
        }
    }
}

/// When the document-level `focusin` trap listener is registered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusTrap {
    /// Registered on open, released on close.
    #[default]
    WhileOpen,
    /// Registered on mount, released on unmount. Redirects only while content is shown.
    WhileMounted,
    /// No trap at all.
    Disabled,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FocusConfig {
    #[serde(default)]
    pub trap: FocusTrap,
    #[serde(default = "enabled")]
    pub autofocus: bool,
    #[serde(default = "enabled")]
    pub restore: bool,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            trap: FocusTrap::default(),
            autofocus: true,
            restore: true,
        }
    }
}

/// Document side effects owned by the host page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Render target element id is `<root_id_prefix>-<root id>`.
    #[serde(default = "default_root_id_prefix")]
    pub root_id_prefix: String,
    /// Element the render target is appended to. `<body>` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    /// Whether an open dialog marks `<body>` with a class and a data attribute.
    #[serde(default = "enabled")]
    pub apply_body_open_marker: bool,
    #[serde(default = "default_body_open_class")]
    pub body_open_class: String,
    /// Holds the number of open dialogs; removed when it drops to zero.
    #[serde(default = "default_body_open_attribute")]
    pub body_open_attribute: String,
    /// `aria-label` of the close button.
    #[serde(default = "default_close_label")]
    pub close_label: String,
}

fn enabled() -> bool {
    true
}

fn default_root_id_prefix() -> String {
    "modal-root".to_string()
}

fn default_body_open_class() -> String {
    "modal-open".to_string()
}

fn default_body_open_attribute() -> String {
    "data-modal-open".to_string()
}

fn default_close_label() -> String {
    "Close Modal".to_string()
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            root_id_prefix: default_root_id_prefix(),
            container_id: None,
            apply_body_open_marker: true,
            body_open_class: default_body_open_class(),
            body_open_attribute: default_body_open_attribute(),
            close_label: default_close_label(),
        }
    }
}

impl DialogConfig {
    /// Builder method to toggle the body open marker.
    pub fn with_body_open_marker(mut self, apply: bool) -> Self {
        self.document.apply_body_open_marker = apply;
        self
    }

    /// Builder method to set the focus trap scope.
    pub fn with_focus_trap(mut self, trap: FocusTrap) -> Self {
        self.focus.trap = trap;
        self
    }

    /// Builder method to toggle Escape and backdrop dismissal.
    pub fn with_dismiss(mut self, escape: bool, backdrop: bool) -> Self {
        self.dismiss = DismissConfig { escape, backdrop };
        self
    }

    /// Builder method to place render targets under the element with `id`.
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.document.container_id = Some(id.into());
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, DialogError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
