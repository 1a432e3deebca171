/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use serde::{Deserialize, Serialize};

/// A structured personal name.
///
/// Name parts are stored as token lists in source order. Display forms are
/// derived on demand and never written back.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub given: Vec<String>,
    pub family: Vec<String>,
    /// Name particles such as "van" or "de".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub particle: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl Person {
    /// Build a person from whitespace-separated given and family names.
    pub fn new(given: &str, family: &str) -> Self {
        Self {
            given: tokens(given),
            family: tokens(family),
            particle: Vec::new(),
            suffix: None,
        }
    }

    /// First letter of the first given-name token.
    pub fn initial(&self) -> Option<char> {
        self.given.first().and_then(|g| g.trim().chars().next())
    }

    /// Key used for homepage lookup and highlighting: `"F Family"`.
    ///
    /// Only the first family-name token takes part; particles and suffixes
    /// are ignored.
    pub fn lookup_key(&self) -> Option<String> {
        let initial = self.initial()?;
        let family = self.family.first()?;
        Some(format!("{} {}", initial, family))
    }

    /// Initials-collapsed display name, e.g. "R. Mortier".
    pub fn display_name(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(initial) = self.initial() {
            parts.push(format!("{}.", initial));
        }
        parts.extend(self.particle.iter().cloned());
        parts.extend(self.family.iter().cloned());

        let mut name = parts.join(" ");
        if let Some(suffix) = self.suffix.as_deref().filter(|s| !s.is_empty()) {
            name.push_str(", ");
            name.push_str(suffix);
        }
        name
    }
}

pub(crate) fn tokens(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}
