/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML output format.

use super::format::OutputFormat;
use super::{Element, Node};

const BLOCK_TAGS: [&str; 6] = ["section", "ol", "ul", "li", "div", "p"];

/// HTML serializer.
///
/// The compact form writes everything on one line. The pretty form puts
/// block elements (`section`, lists, list items) on their own lines with
/// two-space indentation and keeps inline content of a block together.
#[derive(Debug, Default, Clone)]
pub struct Html {
    pub pretty: bool,
}

impl Html {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn write_inline(&self, node: &Node, out: &mut String) {
        match node {
            Node::Text(s) => out.push_str(&escape_text(s)),
            Node::Raw(s) => out.push_str(s),
            Node::Element(e) => {
                open_tag(e, out);
                for child in &e.children {
                    self.write_inline(child, out);
                }
                close_tag(e, out);
            }
        }
    }

    fn write_block(&self, node: &Node, depth: usize, out: &mut String) {
        match node {
            Node::Element(e) if is_block(e) => {
                indent(depth, out);
                open_tag(e, out);
                if e.children.iter().any(|c| matches!(c, Node::Element(c) if is_block(c))) {
                    out.push('\n');
                    for child in &e.children {
                        self.write_block(child, depth + 1, out);
                    }
                    indent(depth, out);
                } else {
                    for child in &e.children {
                        self.write_inline(child, out);
                    }
                }
                close_tag(e, out);
                out.push('\n');
            }
            Node::Text(s) if s.trim().is_empty() => {}
            _ => {
                indent(depth, out);
                self.write_inline(node, out);
                out.push('\n');
            }
        }
    }
}

impl OutputFormat for Html {
    fn write(&self, node: &Node, out: &mut String) {
        if self.pretty {
            self.write_block(node, 0, out);
        } else {
            self.write_inline(node, out);
        }
    }
}

fn is_block(e: &Element) -> bool {
    BLOCK_TAGS.contains(&e.tag.as_str())
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn open_tag(e: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&e.tag);
    for (name, value) in &e.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');
}

fn close_tag(e: &Element, out: &mut String) {
    out.push_str("</");
    out.push_str(&e.tag);
    out.push('>');
}

/// Escape text content.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value (double-quoted).
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
