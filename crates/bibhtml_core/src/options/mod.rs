/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rendering options.
//!
//! A [`RenderConfig`] is one rendering profile: who gets highlighted, whose
//! names link to a homepage, which fields supply each venue, how months are
//! spelled, and what happens when a record cannot be rendered. It is built
//! once and passed by reference to every render call.

pub mod months;
pub mod site;
pub mod venues;

pub use months::MonthNames;
pub use site::{ListKind, SiteConfig};
pub use venues::VenuePriorities;

use crate::record::Person;
use indexmap::IndexMap;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Top-level rendering profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case", default)]
pub struct RenderConfig {
    /// Author homepages keyed by `"F Family"`.
    pub homepages: IndexMap<String, String>,
    /// The author whose name is marked in every entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<HighlightedAuthor>,
    /// Hyperlink author names that have a homepage.
    pub link_authors: bool,
    pub separators: AuthorSeparators,
    pub months: MonthNames,
    pub venues: VenuePriorities,
    pub on_error: ErrorPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            homepages: IndexMap::new(),
            highlight: None,
            link_authors: true,
            separators: AuthorSeparators::default(),
            months: MonthNames::default(),
            venues: VenuePriorities::default(),
            on_error: ErrorPolicy::default(),
        }
    }
}

impl RenderConfig {
    /// Homepage for a lookup key, if one is configured.
    pub fn homepage(&self, key: &str) -> Option<&str> {
        self.homepages.get(key).map(String::as_str)
    }

    /// Whether `person` is the configured highlighted author.
    pub fn is_highlighted(&self, person: &Person) -> bool {
        match (&self.highlight, person.lookup_key()) {
            (Some(h), Some(key)) => h.lookup_key().as_deref() == Some(key.as_str()),
            _ => false,
        }
    }
}

/// Identity of the highlighted author.
///
/// Matching uses the same `"F Family"` key as homepage lookup, so
/// `{ given: "Richard", family: "Mortier" }` also matches an entry that only
/// spells the given name as "R.".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct HighlightedAuthor {
    pub given: String,
    pub family: String,
}

impl HighlightedAuthor {
    pub fn new(given: &str, family: &str) -> Self {
        Self {
            given: given.to_string(),
            family: family.to_string(),
        }
    }

    pub fn lookup_key(&self) -> Option<String> {
        Person::new(&self.given, &self.family).lookup_key()
    }
}

/// Separators placed between author names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case", default)]
pub struct AuthorSeparators {
    /// Before every author except the first and the last.
    pub between: String,
    /// Before the last author of a list of two or more.
    pub last: String,
}

impl Default for AuthorSeparators {
    fn default() -> Self {
        Self {
            between: ", ".to_string(),
            last: " and ".to_string(),
        }
    }
}

/// What to do with a record that fails to render.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop at the first failing record.
    #[default]
    Abort,
    /// Leave failing records out and report them with the output.
    SkipAndReport,
}
