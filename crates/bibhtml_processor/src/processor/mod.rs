/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The bibhtml processor.
//!
//! ## Architecture
//!
//! A [`Processor`] owns one [`RenderConfig`] and is otherwise stateless:
//! rendering a record is a pure function of the record and the config, so
//! the same input always yields the same markup. Records are rendered in
//! the order given; nothing here sorts them.
//!
//! What happens to a record that cannot be rendered is decided by
//! [`ErrorPolicy`]: `abort` returns the first error, `skip-and-report`
//! leaves the record out and hands back a [`Skipped`] entry for it.

mod rendering;


use crate::error::RenderError;
use crate::render::{Element, Node};
use bibhtml_core::{BibRecord, Collection, EntryType, ErrorPolicy, ListKind, RenderConfig};
use regex::Regex;

/// A record left out under [`ErrorPolicy::SkipAndReport`].
#[derive(Debug)]
pub struct Skipped {
    pub key: String,
    pub error: RenderError,
}

/// Markup for a list or section, plus the records that were skipped.
#[derive(Debug, Default)]
pub struct Rendered {
    pub nodes: Vec<Node>,
    pub skipped: Vec<Skipped>,
}

/// Renders records into publication-list markup.
#[derive(Debug)]
pub struct Processor {
    config: RenderConfig,
    /// Terminal punctuation followed by the periods we append.
    doubled_period: Regex,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl Processor {
    pub fn new(config: RenderConfig) -> Self {
        for (month, spellings) in config.months.inconsistencies() {
            tracing::warn!(
                month,
                ?spellings,
                "month table spells the same month differently; check the configured month names"
            );
        }
        Processor {
            config,
            doubled_period: Regex::new(r"([.!?])\.+$").unwrap(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render the body of one entry (everything inside its list item).
    ///
    /// Failures are logged with the record's source text before being
    /// returned.
    pub fn render_entry(&self, record: &BibRecord) -> Result<Vec<Node>, RenderError> {
        tracing::debug!(key = %record.key, entry_type = %record.entry_type, "rendering entry");
        self.build_entry(record).inspect_err(|error| {
            tracing::error!(
                key = %record.key,
                %error,
                record = %record.source_text(),
                "failed to render entry"
            );
        })
    }

    /// Render one record as `<li id="KEY" class="paper CLASS">`.
    pub fn render_item(&self, record: &BibRecord) -> Result<Node, RenderError> {
        let children = self.render_entry(record)?;
        Ok(Element::new("li")
            .with_attr("id", &record.key)
            .with_class("paper")
            .with_class(entry_class(record))
            .with_children(children)
            .into())
    }

    /// Render records, in order, into one `<ol>`/`<ul class="papers">`.
    pub fn render_collection(
        &self,
        records: &[BibRecord],
        list: ListKind,
    ) -> Result<Rendered, RenderError> {
        let mut items = Vec::with_capacity(records.len());
        let mut skipped = Vec::new();

        for record in records {
            match self.render_item(record) {
                Ok(item) => items.push(item),
                Err(error) => match self.config.on_error {
                    ErrorPolicy::Abort => return Err(error),
                    ErrorPolicy::SkipAndReport => {
                        tracing::warn!(key = %record.key, %error, "skipping entry");
                        skipped.push(Skipped {
                            key: record.key.clone(),
                            error,
                        });
                    }
                },
            }
        }

        let list = Element::new(list.tag())
            .with_class("papers")
            .with_children(items);
        Ok(Rendered {
            nodes: vec![list.into()],
            skipped,
        })
    }

    /// Render a titled section: a `<section class="papers">` heading followed
    /// by the entry list.
    pub fn render_section(
        &self,
        title: &str,
        collection: &Collection,
        list: ListKind,
    ) -> Result<Rendered, RenderError> {
        let stats = &collection.stats;
        tracing::info!(
            section = title,
            blocks = stats.blocks,
            entries = stats.entries,
            comments = stats.comments,
            strings = stats.strings,
            preambles = stats.preambles,
            failures = stats.failures,
            "section statistics"
        );

        let mut rendered = self.render_collection(&collection.records, list)?;
        let heading = Element::new("section")
            .with_class("papers")
            .with_children(vec![Node::text(title)]);
        rendered.nodes.insert(0, heading.into());
        Ok(rendered)
    }
}

/// CSS class for a record's list item.
pub fn entry_class(record: &BibRecord) -> &str {
    match record.entry_type {
        EntryType::JournalArticle => "journal",
        EntryType::ConferencePaper => "conference",
        _ => &record.tag,
    }
}
