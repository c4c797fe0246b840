//! Framework-neutral content tree and the portal render operation.

use crate::document::Document;

/// A renderable subtree handed to a dialog as its content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Element(Element),
    Text(String),
    Fragment(Vec<View>),
    /// An element already in the document, moved in by id while rendered.
    ///
    /// Lets a host framework keep ownership of live content (handlers,
    /// state) and only lend its nodes to the dialog.
    Adopt(String),
}

impl View {
    pub fn text(text: impl Into<String>) -> Self {
        View::Text(text.into())
    }

    pub fn fragment(children: impl IntoIterator<Item = View>) -> Self {
        View::Fragment(children.into_iter().collect())
    }

    pub fn empty() -> Self {
        View::Fragment(Vec::new())
    }

    /// Borrow the element with `id` from wherever it lives.
    pub fn adopt(id: impl Into<String>) -> Self {
        View::Adopt(id.into())
    }
}

impl Default for View {
    fn default() -> Self {
        View::empty()
    }
}

impl From<Element> for View {
    fn from(element: Element) -> Self {
        View::Element(element)
    }
}

impl From<&str> for View {
    fn from(text: &str) -> Self {
        View::text(text)
    }
}

/// An element with attributes and children.
///
/// `node_ref` names the created node so the renderer can hand it back; it is
/// not written to the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<View>,
    pub node_ref: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set an attribute, replacing an earlier value with the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn attrs<I, K, V>(self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        attributes
            .into_iter()
            .fold(self, |element, (name, value)| element.attr(name, value))
    }

    pub fn child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = View>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn node_ref(mut self, name: impl Into<String>) -> Self {
        self.node_ref = Some(name.into());
        self
    }
}

/// Nodes created by [`render`].
#[derive(Debug)]
pub struct Rendered<N> {
    /// Top-level nodes attached directly under the parent.
    pub roots: Vec<N>,
    /// Nodes moved in by [`View::Adopt`]; hand them to [`release`] before
    /// discarding the rendered tree.
    pub adopted: Vec<Adopted<N>>,
    refs: Vec<(String, N)>,
}

impl<N> Rendered<N> {
    /// Node created for the element tagged with `node_ref(name)`.
    pub fn node(&self, name: &str) -> Option<&N> {
        self.refs
            .iter()
            .find(|(reference, _)| reference == name)
            .map(|(_, node)| node)
    }
}

/// An adopted node and the parent it was taken from.
#[derive(Clone, Debug, PartialEq)]
pub struct Adopted<N> {
    pub node: N,
    pub home: Option<N>,
}

/// Build `view` and attach it under `parent`.
///
/// This is the one place content crosses into the document: the dialog owns
/// the view, but its nodes live wherever `parent` is.
pub fn render<D: Document>(document: &D, parent: &D::Node, view: &View) -> Rendered<D::Node> {
    let mut rendered = Rendered {
        roots: Vec::new(),
        adopted: Vec::new(),
        refs: Vec::new(),
    };
    let mut roots = Vec::new();
    build(document, view, &mut roots, &mut rendered);
    for node in &roots {
        document.append_child(parent, node);
    }
    rendered.roots = roots;
    rendered
}

/// Send adopted nodes back to where they came from.
pub fn release<D: Document>(document: &D, adopted: &[Adopted<D::Node>]) {
    for Adopted { node, home } in adopted {
        match home {
            Some(home) => document.append_child(home, node),
            None => {
                document.remove(node);
            }
        }
    }
}

fn build<D: Document>(
    document: &D,
    view: &View,
    out: &mut Vec<D::Node>,
    rendered: &mut Rendered<D::Node>,
) {
    match view {
        View::Text(text) => out.push(document.create_text(text)),
        View::Fragment(children) => {
            for child in children {
                build(document, child, out, rendered);
            }
        }
        View::Adopt(id) => match document.element_by_id(id) {
            Some(node) => {
                let home = document.parent_node(&node);
                rendered.adopted.push(Adopted {
                    node: node.clone(),
                    home,
                });
                out.push(node);
            }
            None => tracing::warn!(id = id.as_str(), "no element to adopt"),
        },
        View::Element(element) => {
            let node = document.create_element(&element.tag);
            for (name, value) in &element.attributes {
                document.set_attribute(&node, name, value);
            }
            let mut children = Vec::new();
            for child in &element.children {
                build(document, child, &mut children, rendered);
            }
            for child in &children {
                document.append_child(&node, child);
            }
            if let Some(name) = &element.node_ref {
                rendered.refs.push((name.clone(), node.clone()));
            }
            out.push(node);
        }
    }
}
