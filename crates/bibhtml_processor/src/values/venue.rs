/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Venue resolution by entry type.

use crate::render::html::escape_text;
use crate::values::field::resolve_field;
use bibhtml_core::{BibRecord, EntryType, VenuePriorities};

/// Text shown when a record's entry type has no venue policy.
pub const UNKNOWN_VENUE: &str = "UNKNOWN VENUE";

/// The venue triple for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    /// Leading word, e.g. "In".
    pub lead: Option<&'static str>,
    /// Trimmed venue text; empty when no candidate field is present.
    pub text: String,
    /// Escaped HTML detail such as volume, issue and pages, ending in a
    /// period. Empty when there is nothing to add.
    pub addendum: String,
}

/// How the venue of an entry type is found and decorated.
///
/// Adding an entry type means adding a variant here and a match arm in
/// [`VenuePolicy::for_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenuePolicy<'a> {
    Conference { priority: &'a [String] },
    Journal { priority: &'a [String] },
    Patent,
    Report { priority: &'a [String] },
    Chapter { priority: &'a [String] },
    Unpublished,
    Unsupported,
}

impl<'a> VenuePolicy<'a> {
    pub fn for_type(entry_type: &EntryType, priorities: &'a VenuePriorities) -> Self {
        match entry_type {
            EntryType::ConferencePaper => VenuePolicy::Conference {
                priority: &priorities.conference,
            },
            EntryType::JournalArticle => VenuePolicy::Journal {
                priority: &priorities.journal,
            },
            EntryType::Patent => VenuePolicy::Patent,
            EntryType::Report => VenuePolicy::Report {
                priority: &priorities.report,
            },
            EntryType::BookChapter => VenuePolicy::Chapter {
                priority: &priorities.chapter,
            },
            EntryType::Unpublished => VenuePolicy::Unpublished,
            EntryType::Unknown => VenuePolicy::Unsupported,
        }
    }

    pub fn lead(&self) -> Option<&'static str> {
        match self {
            VenuePolicy::Patent | VenuePolicy::Unpublished => None,
            _ => Some("In"),
        }
    }

    fn text(&self, record: &BibRecord) -> String {
        let value = match self {
            VenuePolicy::Conference { priority }
            | VenuePolicy::Journal { priority }
            | VenuePolicy::Report { priority }
            | VenuePolicy::Chapter { priority } => resolve_field(record, *priority).unwrap_or(""),
            VenuePolicy::Patent => "Patent",
            VenuePolicy::Unpublished => "",
            VenuePolicy::Unsupported => UNKNOWN_VENUE,
        };
        value.trim().to_string()
    }

    fn addendum(&self, record: &BibRecord) -> String {
        let field = |name: &str| resolve_field(record, &[name]).map(|v| escape_text(v.trim()));
        let mut out = String::new();

        match self {
            VenuePolicy::Conference { .. } => {
                if let Some(address) = field("address") {
                    out.push_str(&format!(". {}", address));
                }
                if let Some(pages) = field("pages") {
                    out.push_str(&format!(". pp. {}", pages));
                }
            }
            VenuePolicy::Journal { .. } => {
                if let Some(volume) = field("volume") {
                    out.push_str(&format!("&nbsp;{}", volume));
                }
                if let Some(number) = field("number") {
                    out.push_str(&format!("({})", number));
                }
                if let Some(pages) = field("pages") {
                    out.push_str(&format!(":{}", pages));
                }
            }
            _ => {}
        }

        if !out.is_empty() {
            out.push('.');
        }
        out
    }
}

/// Resolve the venue triple for a record.
pub fn resolve_venue(record: &BibRecord, priorities: &VenuePriorities) -> Venue {
    let policy = VenuePolicy::for_type(&record.entry_type, priorities);
    Venue {
        lead: policy.lead(),
        text: policy.text(record),
        addendum: policy.addendum(record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(record: &BibRecord) -> Venue {
        resolve_venue(record, &VenuePriorities::default())
    }

    #[test]
    fn test_journal_article() {
        let record = BibRecord::new("k", "article")
            .with_field("journal", "J. Sys")
            .with_field("volume", "5")
            .with_field("number", "2")
            .with_field("pages", "10-20");
        let v = venue(&record);
        assert_eq!(v.lead, Some("In"));
        assert_eq!(v.text, "J. Sys");
        assert_eq!(v.addendum, "&nbsp;5(2):10-20.");
    }

    #[test]
    fn test_journaltitle_preferred() {
        let record = BibRecord::new("k", "article")
            .with_field("journal", "J. Sys")
            .with_field("journaltitle", " Journal of Systems ");
        let v = venue(&record);
        assert_eq!(v.text, "Journal of Systems");
        assert_eq!(v.addendum, "");
    }

    #[test]
    fn test_conference_paper() {
        let record = BibRecord::new("k", "inproceedings")
            .with_field("booktitle", "Proc. X")
            .with_field("address", "Cambridge")
            .with_field("pages", "1-10");
        let v = venue(&record);
        assert_eq!(v.lead, Some("In"));
        assert_eq!(v.text, "Proc. X");
        assert_eq!(v.addendum, ". Cambridge. pp. 1-10.");
    }

    #[test]
    fn test_patent() {
        let v = venue(&BibRecord::new("k", "patent").with_field("number", "US123"));
        assert_eq!(v.lead, None);
        assert_eq!(v.text, "Patent");
        assert_eq!(v.addendum, "");
    }

    #[test]
    fn test_report_priority() {
        let record = BibRecord::new("k", "techreport")
            .with_field("publisher", "ACM")
            .with_field("institution", "University of Cambridge");
        assert_eq!(venue(&record).text, "University of Cambridge");

        let record = BibRecord::new("k", "online")
            .with_field("eprinttype", "arXiv")
            .with_field("institution", "University of Cambridge");
        assert_eq!(venue(&record).text, "arXiv");
    }

    #[test]
    fn test_book_chapter_prefers_volume() {
        let record = BibRecord::new("k", "incollection")
            .with_field("booktitle", "Handbook")
            .with_field("volume", "Lecture Notes 12");
        assert_eq!(venue(&record).text, "Lecture Notes 12");
    }

    #[test]
    fn test_unpublished_is_empty() {
        let v = venue(&BibRecord::new("k", "unpublished"));
        assert_eq!(v, Venue { lead: None, text: String::new(), addendum: String::new() });
    }

    #[test]
    fn test_unknown_type_uses_sentinel() {
        let v = venue(&BibRecord::new("k", "phdthesis").with_field("school", "MIT"));
        assert_eq!(v.lead, Some("In"));
        assert_eq!(v.text, UNKNOWN_VENUE);
    }

    #[test]
    fn test_missing_venue_field_is_empty_not_error() {
        let v = venue(&BibRecord::new("k", "inproceedings").with_field("pages", "3-4"));
        assert_eq!(v.text, "");
        assert_eq!(v.addendum, ". pp. 3-4.");
    }

    #[test]
    fn test_addendum_values_are_escaped() {
        let record = BibRecord::new("k", "article")
            .with_field("journal", "J")
            .with_field("pages", "1<2");
        assert_eq!(venue(&record).addendum, ":1&lt;2.");
    }

    #[test]
    fn test_custom_priorities() {
        let priorities = VenuePriorities {
            journal: vec!["shortjournal".to_string(), "journal".to_string()],
            ..Default::default()
        };
        let record = BibRecord::new("k", "article")
            .with_field("journal", "Journal of Systems")
            .with_field("shortjournal", "J. Sys");
        assert_eq!(resolve_venue(&record, &priorities).text, "J. Sys");
    }
}
