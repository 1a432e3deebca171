/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Semantic markup produced by the renderer.
//!
//! The processor builds a small tree of [`Node`]s; an [`OutputFormat`]
//! turns that tree into text. Keeping the two apart means the same rendered
//! entry can be serialized as HTML for the page or flattened to plain text
//! for a terminal preview.

pub mod format;
pub mod html;
pub mod plain;

pub use format::OutputFormat;

/// A markup node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text that the output format escapes.
    Text(String),
    /// Markup that is already escaped and written as is.
    Raw(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn raw(s: impl Into<String>) -> Self {
        Node::Raw(s.into())
    }

    /// A `<span>` with one class.
    pub fn span(class: &str, children: Vec<Node>) -> Self {
        Node::Element(Element::new("span").with_class(class).with_children(children))
    }

    /// An `<a href>` around `children`.
    pub fn link(href: &str, children: Vec<Node>) -> Self {
        Node::Element(
            Element::new("a")
                .with_attr("href", href)
                .with_children(children),
        )
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Concatenated text content, with raw markup included verbatim.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(s) | Node::Raw(s) => out.push_str(s),
            Node::Element(e) => {
                for child in &e.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// An element with attributes in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    /// Add a class, merging with an existing `class` attribute.
    pub fn with_class(mut self, class: &str) -> Self {
        match self.attrs.iter_mut().find(|(name, _)| name == "class") {
            Some((_, value)) => {
                value.push(' ');
                value.push_str(class);
            }
            None => self.attrs.push(("class".to_string(), class.to_string())),
        }
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|v| v.split_whitespace().any(|c| c == class))
    }

    /// First descendant element (depth-first) carrying `class`.
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        for child in &self.children {
            if let Node::Element(e) = child {
                if e.has_class(class) {
                    return Some(e);
                }
                if let Some(found) = e.find_class(class) {
                    return Some(found);
                }
            }
        }
        None
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}
