/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain text output format.

use super::format::OutputFormat;
use super::Node;

/// Text-only rendering: elements are dropped, their content kept.
///
/// List items end with a newline so a whole section reads one entry per
/// line. The handful of entities the renderer itself emits are decoded.
#[derive(Debug, Default, Clone)]
pub struct PlainText;

impl OutputFormat for PlainText {
    fn write(&self, node: &Node, out: &mut String) {
        match node {
            Node::Text(s) => out.push_str(s),
            Node::Raw(s) => out.push_str(&decode_entities(s)),
            Node::Element(e) => {
                for child in &e.children {
                    self.write(child, out);
                }
                if matches!(e.tag.as_str(), "li" | "section") {
                    let trimmed = out.trim_end().len();
                    out.truncate(trimmed);
                    out.push('\n');
                }
            }
        }
    }
}

fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Element;

    #[test]
    fn test_plain_flattens_and_decodes() {
        let li: Node = Element::new("li")
            .with_children(vec![
                Node::span("venue", vec![Node::text("In J. Sys"), Node::raw("&nbsp;5(2). ")]),
                Node::span("date", vec![Node::text("2021. ")]),
            ])
            .into();
        assert_eq!(PlainText.finish(&[li]), "In J. Sys 5(2). 2021.\n");
    }
}
