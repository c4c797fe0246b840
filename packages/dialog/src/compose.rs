//! Dialog markup around the caller's content, and its cached snapshot.

use crate::config::DialogConfig;
use crate::document::Document;
use crate::view::{self, Adopted, Element, View};

const OVERLAY_REF: &str = "overlay";
const CONTENT_REF: &str = "content";
const CLOSE_REF: &str = "close";
const BODY_REF: &str = "body";

/// The dialog's own markup and the caller's content, kept apart until they
/// are rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Composed {
    /// `overlay > content root > (header > close button, body)`, body empty.
    pub(crate) shell: View,
    pub(crate) children: View,
}

/// Nodes of a shown dialog the controller hooks into.
#[derive(Debug)]
pub(crate) struct Anchors<N> {
    pub(crate) overlay: N,
    pub(crate) content_root: N,
    pub(crate) close: N,
    pub(crate) adopted: Vec<Adopted<N>>,
}

/// Pass-through attributes go on the content root after its defaults, so a
/// caller may override them.
pub(crate) fn dialog(
    children: &View,
    attributes: &[(String, String)],
    config: &DialogConfig,
) -> Composed {
    let close = Element::new("button")
        .attr("type", "button")
        .attr("aria-label", config.document.close_label.as_str())
        .attr("class", "modal-close")
        .node_ref(CLOSE_REF);

    let content = Element::new("div")
        .attr("role", "document")
        .attr("tabindex", "-1")
        .attr("class", "modal-content")
        .attrs(attributes.iter().map(|(name, value)| (name.as_str(), value.as_str())))
        .node_ref(CONTENT_REF)
        .child(Element::new("div").attr("class", "modal-header").child(close))
        .child(Element::new("div").attr("class", "modal-body").node_ref(BODY_REF));

    let shell = Element::new("div")
        .attr("role", "dialog")
        .attr("aria-modal", "true")
        .attr("class", "modal-overlay")
        .node_ref(OVERLAY_REF)
        .child(content)
        .into();

    Composed {
        shell,
        children: children.clone(),
    }
}

/// Render `composed` under `target`.
///
/// Anchors are resolved from the shell alone; the caller's content is built
/// afterwards into the body, so names inside it can never stand in for them.
pub(crate) fn render<D: Document>(
    document: &D,
    target: &D::Node,
    composed: &Composed,
) -> Option<Anchors<D::Node>> {
    let shell = view::render(document, target, &composed.shell);
    let overlay = shell.node(OVERLAY_REF)?.clone();
    let content_root = shell.node(CONTENT_REF)?.clone();
    let close = shell.node(CLOSE_REF)?.clone();
    let body = shell.node(BODY_REF)?;

    let content = view::render(document, body, &composed.children);
    Some(Anchors {
        overlay,
        content_root,
        close,
        adopted: content.adopted,
    })
}

/// Caller content plus the composed dialog, recomposed only when the
/// content actually changes.
#[derive(Debug)]
pub(crate) struct ContentSnapshot {
    children: View,
    revision: u64,
    composed: Option<(u64, Composed)>,
}

impl ContentSnapshot {
    pub(crate) fn new(children: View) -> Self {
        Self {
            children,
            revision: 0,
            composed: None,
        }
    }

    /// Returns `false` when `children` equals the current content.
    pub(crate) fn replace(&mut self, children: View) -> bool {
        if self.children == children {
            return false;
        }
        self.children = children;
        self.revision += 1;
        true
    }

    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn view(
        &mut self,
        attributes: &[(String, String)],
        config: &DialogConfig,
    ) -> Composed {
        match &self.composed {
            Some((revision, composed)) if *revision == self.revision => composed.clone(),
            _ => {
                let composed = dialog(&self.children, attributes, config);
                self.composed = Some((self.revision, composed.clone()));
                composed
            }
        }
    }
}
