/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use bibhtml_core::{BibRecord, HighlightedAuthor, Person, RenderConfig};
use bibhtml_processor::{Element, Node, Processor};

// --- Helper Functions for Test Data Construction ---

/// Create a journal article with the given authors (given, family).
pub fn make_article(key: &str, authors: &[(&str, &str)], title: &str, year: &str) -> BibRecord {
    authors
        .iter()
        .fold(BibRecord::new(key, "article"), |record, (given, family)| {
            record.with_author(Person::new(given, family))
        })
        .with_field("title", title)
        .with_field("year", year)
        .with_field("journal", "J. Sys")
}

/// A config that highlights Richard Mortier and links his homepage.
pub fn mortier_config() -> RenderConfig {
    let mut config = RenderConfig {
        highlight: Some(HighlightedAuthor::new("Richard", "Mortier")),
        ..Default::default()
    };
    config
        .homepages
        .insert("R Mortier".to_string(), "https://mort.io/".to_string());
    config
}

/// Render one record as a list item element.
pub fn render_li(processor: &Processor, record: &BibRecord) -> Element {
    match processor.render_item(record).expect("record should render") {
        Node::Element(e) => e,
        other => panic!("expected element, got {:?}", other),
    }
}

/// The author wrapper elements of a rendered list item, in order.
pub fn author_spans(li: &Element) -> Vec<Element> {
    li.find_class("authors")
        .expect("authors span")
        .children
        .iter()
        .filter_map(|c| c.as_element().cloned())
        .collect()
}

/// The literal separators between author spans.
pub fn author_separators(li: &Element) -> Vec<String> {
    li.find_class("authors")
        .expect("authors span")
        .children
        .iter()
        .filter_map(|c| match c {
            Node::Text(s) => Some(s.clone()),
            _ => None,
        })
        .collect()
}
