/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Bibliographic records as handed to the renderer.

pub mod collection;
pub mod conversion;
pub mod person;


pub use collection::{BlockStats, Collection, ParseFailure};
pub use person::Person;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The publication category of a record.
///
/// Every record falls into exactly one category. Tags the renderer has no
/// venue policy for land in [`EntryType::Unknown`] instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryType {
    JournalArticle,
    ConferencePaper,
    Patent,
    /// Online resources, technical reports and miscellaneous items.
    Report,
    BookChapter,
    Unpublished,
    Unknown,
}

impl EntryType {
    /// Classify a BibTeX entry tag (case-insensitive).
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "article" => EntryType::JournalArticle,
            "inproceedings" | "conference" => EntryType::ConferencePaper,
            "patent" => EntryType::Patent,
            "online" | "report" | "techreport" | "misc" => EntryType::Report,
            "incollection" | "inbook" => EntryType::BookChapter,
            "unpublished" => EntryType::Unpublished,
            _ => EntryType::Unknown,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryType::JournalArticle => "journal-article",
            EntryType::ConferencePaper => "conference-paper",
            EntryType::Patent => "patent",
            EntryType::Report => "report",
            EntryType::BookChapter => "book-chapter",
            EntryType::Unpublished => "unpublished",
            EntryType::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// One parsed bibliographic entry.
///
/// `tag` is the entry type exactly as written in the source (lower-cased),
/// `entry_type` its classification. Field names are lower-cased; values are
/// already decoded text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BibRecord {
    pub key: String,
    pub tag: String,
    pub entry_type: EntryType,
    /// `None` when the source had no author field at all.
    pub authors: Option<Vec<Person>>,
    pub fields: IndexMap<String, String>,
    /// Source text of the entry, kept for diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl BibRecord {
    pub fn new(key: impl Into<String>, tag: impl Into<String>) -> Self {
        let tag = tag.into().to_lowercase();
        Self {
            key: key.into(),
            entry_type: EntryType::from_tag(&tag),
            tag,
            authors: None,
            fields: IndexMap::new(),
            raw: None,
        }
    }

    pub fn with_author(mut self, person: Person) -> Self {
        self.authors.get_or_insert_with(Vec::new).push(person);
        self
    }

    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.insert(name.to_lowercase(), value.into());
        self
    }

    /// Raw value of a field, present even when empty.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The text to attach to diagnostics about this record.
    pub fn source_text(&self) -> String {
        match &self.raw {
            Some(raw) => raw.clone(),
            None => format!("{:?}", self),
        }
    }
}
