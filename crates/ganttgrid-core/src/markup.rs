//! Retained markup tree standing in for the host document.
//!
//! The renderer builds [`Element`] nodes into a caller-owned [`Container`];
//! a [`Page`] is the registry of containers a host would address by id.
//! Serialization via `Display` produces HTML with escaped text and
//! attribute values, so the tree can be written out or handed to a
//! rasterization backend unchanged.
//!
//! The builder consumes and returns the element on every call:
//!
//! ```rust
//! use ganttgrid_core::markup::Element;
//!
//! let cell = Element::new("div")
//!     .set("class", "gantt-header")
//!     .text("W1");
//! assert_eq!(cell.to_string(), r#"<div class="gantt-header">W1</div>"#);
//! ```

use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Nodes
// ============================================================================

/// A node in the markup tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => fmt::Display::fmt(element, f),
            Node::Text(text) => f.write_str(&escape(text)),
        }
    }
}

/// A markup element: tag, ordered attributes, child nodes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value
    pub fn set(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        let name = name.into();
        let value = value.to_string();
        if let Some(attr) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            attr.1 = value;
        } else {
            self.attrs.push((name, value));
        }
        self
    }

    /// Append a child node
    pub fn add(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text child
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Whether the space-separated `class` attribute contains `class_name`
    pub fn has_class(&self, class_name: &str) -> bool {
        self.attr("class")
            .map_or(false, |c| c.split_whitespace().any(|c| c == class_name))
    }

    /// Concatenated text of this element's descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Descendant elements carrying `class_name`, in document order
    pub fn select_class(&self, class_name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_class(&self.children, class_name, &mut found);
        found
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, r#" {}="{}""#, name, escape(value))?;
        }
        f.write_str(">")?;
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Element(element) => collect_text(&element.children, out),
            Node::Text(text) => out.push_str(text),
        }
    }
}

fn collect_class<'a>(nodes: &'a [Node], class_name: &str, found: &mut Vec<&'a Element>) {
    for node in nodes {
        if let Node::Element(element) = node {
            if element.has_class(class_name) {
                found.push(element);
            }
            collect_class(&element.children, class_name, found);
        }
    }
}

/// HTML-escape a string
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ============================================================================
// Container
// ============================================================================

/// A caller-owned mount point for rendered markup.
///
/// Containers are cleared and repopulated on every render; they hold no
/// state of their own beyond their id and children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    id: String,
    children: Vec<Node>,
}

impl Container {
    /// Create an empty container with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Remove all content
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Append a node
    pub fn append(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Descendant elements carrying `class_name`, in document order
    pub fn select_class(&self, class_name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_class(&self.children, class_name, &mut found);
        found
    }

    /// Serialized children, without the container wrapper
    pub fn inner_html(&self) -> String {
        self.children.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"<div id="{}">"#, escape(&self.id))?;
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        f.write_str("</div>")
    }
}

// ============================================================================
// Page
// ============================================================================

/// Registry of containers, standing in for the host document
#[derive(Clone, Debug, Default)]
pub struct Page {
    containers: HashMap<String, Container>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty container under `id`, returning a handle to it.
    /// An existing container with the same id is left untouched.
    pub fn insert(&mut self, id: impl Into<String>) -> &mut Container {
        let id = id.into();
        self.containers
            .entry(id.clone())
            .or_insert_with(|| Container::new(id))
    }

    pub fn get(&self, id: &str) -> Option<&Container> {
        self.containers.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.get_mut(id)
    }
}

// ============================================================================
// Tests
// ============================================================================
