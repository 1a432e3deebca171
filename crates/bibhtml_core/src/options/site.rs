/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::options::RenderConfig;
use indexmap::IndexMap;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A publication page: one or more titled sections, each rendered from its
/// own set of BibTeX sources.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case", default)]
pub struct SiteConfig {
    /// Section title to source files or directories, in page order.
    pub sections: IndexMap<String, Vec<PathBuf>>,
    /// `@string` macro definitions shared by every section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strings: Option<PathBuf>,
    /// JSON object of `"F Family"` to homepage URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepages: Option<PathBuf>,
    pub list: ListKind,
    /// Literal text printed once before the first section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preamble: Option<String>,
    pub render: RenderConfig,
}

/// The list element wrapping a section's entries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum ListKind {
    #[default]
    Ordered,
    Unordered,
}

impl ListKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}
