/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Field-priority lists for the venue of each entry type.
///
/// Each list is tried in order and the first present, non-empty field
/// supplies the venue text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case", default)]
pub struct VenuePriorities {
    pub journal: Vec<String>,
    pub conference: Vec<String>,
    pub report: Vec<String>,
    pub chapter: Vec<String>,
}

impl Default for VenuePriorities {
    fn default() -> Self {
        Self {
            journal: fields(&["journaltitle", "journal"]),
            conference: fields(&["booktitle"]),
            report: fields(&["eprinttype", "institution", "publisher"]),
            chapter: fields(&["volume", "booktitle"]),
        }
    }
}

fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
