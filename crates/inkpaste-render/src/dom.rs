//! The annotated element tree consumed and rewritten by the engine.
//!
//! The tokenizer produces a [`Node`] tree whose elements carry token-class
//! names; the materialization engine rewrites that tree in place, replacing
//! the class-based presentation with inline styles. This is deliberately a
//! minimal DOM: a tag name, an ordered class list, an inline [`StyleMap`],
//! a handful of plain attributes, and children. Class order matters — it is
//! the tie-break when two classes style the same property — so classes are a
//! `Vec`, not a set.
//!
//! Trees are built fresh for every render pass and discarded afterwards;
//! nothing here is shared or cached.

use crate::style::StyleMap;

/// A node in the annotated tree: an element or a run of text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Creates a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Returns the contained element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Mutable counterpart of [`as_element`](Self::as_element).
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with token classes, an inline style, and children.
///
/// # Example
///
/// ```rust
/// use inkpaste_render::{Element, Node};
///
/// let tree = Element::new("pre").child(
///     Element::new("code")
///         .class("keyword")
///         .child(Node::text("foo")),
/// );
/// assert_eq!(tree.children.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name, e.g. `pre`, `span`.
    pub tag: String,
    /// Token-class names, in the order the tokenizer set them.
    pub classes: Vec<String>,
    /// Inline style declarations.
    pub style: StyleMap,
    /// Plain attributes other than `class`/`style` (e.g. `href`).
    pub attrs: Vec<(String, String)>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element with no classes, style, or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            style: StyleMap::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends a token class, returning `self` for chaining.
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.push(name.into());
        self
    }

    /// Appends several token classes in order.
    pub fn classes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets a plain attribute, returning `self` for chaining.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Appends a child node, returning `self` for chaining.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends a child node in place.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Counts the elements in this subtree, including `self`.
    ///
    /// Handy for asserting that a traversal visited every element.
    pub fn element_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .filter_map(Node::as_element)
            .map(Element::element_count)
            .sum::<usize>()
    }

    /// Concatenates the text content of the subtree in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(children: &[Node], out: &mut String) {
    for child in children {
        match child {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => collect_text(&el.children, out),
        }
    }
}
