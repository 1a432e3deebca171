/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Entry rendering.
//!
//! Every entry has the same shape: `authors`, `year`, `title`, `venue`,
//! `publisher`, `date`, `note`, `doi`, `url` spans in that order. A span is
//! emitted even when its field is absent so stylesheets can rely on it.

use super::Processor;
use crate::error::RenderError;
use crate::render::Node;
use crate::values::{format_authors, normalize_date, resolve_field, resolve_venue, Venue};
use bibhtml_core::BibRecord;

impl Processor {
    pub(super) fn build_entry(&self, record: &BibRecord) -> Result<Vec<Node>, RenderError> {
        let authors = record
            .authors
            .as_deref()
            .filter(|a| !a.is_empty())
            .ok_or_else(|| missing(record, "author"))?;
        let title = resolve_field(record, &["title"]).ok_or_else(|| missing(record, "title"))?;
        let date = normalize_date(record, &self.config.months)?;
        let venue = resolve_venue(record, &self.config.venues);

        let publisher = resolve_field(record, &["publisher"])
            .map(str::trim)
            .filter(|p| *p != venue.text)
            .map(|p| Node::text(format!("{}. ", p)));

        let note = resolve_field(record, &["note"]).map(|n| {
            let note = format!("{}.", n.trim());
            Node::text(format!("{} ", self.doubled_period.replace(&note, "$1")))
        });

        let doi = resolve_field(record, &["doi"]).map(str::trim).map(|doi| {
            let label = Node::text(format!("doi:{}", doi));
            Node::link(&doi_href(doi), vec![label])
        });

        let url = resolve_field(record, &["url"])
            .map(str::trim)
            .map(|url| Node::link(url, vec![Node::text(url)]));

        Ok(vec![
            format_authors(authors, &self.config),
            Node::span("year", vec![Node::text(format!(" ({}) ", date.year))]),
            Node::span(
                "title",
                vec![Node::text(format!("\u{201C}{}\u{201D}. ", title.trim()))],
            ),
            venue_node(&venue),
            Node::span("publisher", publisher.into_iter().collect()),
            Node::span("date", vec![Node::text(format!("{}. ", date.display))]),
            Node::span("note", note.into_iter().collect()),
            Node::span("doi", spaced(doi)),
            Node::span("url", url.into_iter().collect()),
        ])
    }
}

fn venue_node(venue: &Venue) -> Node {
    let mut children = Vec::new();
    if !venue.text.is_empty() {
        if let Some(lead) = venue.lead {
            children.push(Node::text(format!("{} ", lead)));
        }
        children.push(Node::text(venue.text.clone()));
    }

    let tail = if !venue.addendum.is_empty() {
        venue.addendum.as_str()
    } else if !venue.text.is_empty() && !venue.text.ends_with('.') {
        "."
    } else {
        ""
    };
    if !tail.is_empty() {
        children.push(Node::raw(format!("{} ", tail)));
    } else if !venue.text.is_empty() {
        children.push(Node::text(" "));
    }

    Node::span("venue", children)
}

fn spaced(node: Option<Node>) -> Vec<Node> {
    match node {
        Some(node) => vec![node, Node::text(" ")],
        None => Vec::new(),
    }
}

fn doi_href(doi: &str) -> String {
    if doi.starts_with("http://") || doi.starts_with("https://") {
        doi.to_string()
    } else {
        format!("https://doi.org/{}", doi)
    }
}

fn missing(record: &BibRecord, field: &'static str) -> RenderError {
    RenderError::RequiredFieldMissing {
        key: record.key.clone(),
        field,
    }
}
