/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use indexmap::IndexMap;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month-code to month-name table.
///
/// Codes are matched case-insensitively after trimming. The empty code always
/// resolves to the empty name. The default table covers two-digit codes
/// (`01`..`12`), three-letter abbreviations and the full English names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct MonthNames(pub IndexMap<String, String>);

impl Default for MonthNames {
    fn default() -> Self {
        let mut table = IndexMap::new();
        for (i, name) in LONG.iter().enumerate() {
            table.insert(format!("{:02}", i + 1), name.to_string());
            table.insert(ABBREVIATIONS[i].to_string(), name.to_string());
            table.insert(name.to_lowercase(), name.to_string());
        }
        MonthNames(table)
    }
}

impl MonthNames {
    /// Resolve a month code; `None` when the code is not in the table.
    pub fn lookup(&self, code: &str) -> Option<&str> {
        let code = code.trim().to_lowercase();
        if code.is_empty() {
            return Some("");
        }
        self.0
            .iter()
            .find(|(k, _)| k.trim().to_lowercase() == code)
            .map(|(_, v)| v.as_str())
    }

    /// Months whose codes resolve to different spellings.
    ///
    /// Returns `(month number, spellings)` for each month where, say, `02`
    /// and `feb` disagree. Codes that do not identify a calendar month are
    /// ignored.
    pub fn inconsistencies(&self) -> Vec<(usize, Vec<String>)> {
        let mut by_month: Vec<Vec<String>> = vec![Vec::new(); 12];
        for (code, name) in &self.0 {
            if let Some(month) = month_number(code) {
                let names = &mut by_month[month - 1];
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }
        by_month
            .into_iter()
            .enumerate()
            .filter(|(_, names)| names.len() > 1)
            .map(|(i, names)| (i + 1, names))
            .collect()
    }
}

fn month_number(code: &str) -> Option<usize> {
    let code = code.trim().to_lowercase();
    if let Ok(n) = code.parse::<usize>() {
        return (1..=12).contains(&n).then_some(n);
    }
    let prefix: String = code.chars().take(3).collect();
    ABBREVIATIONS
        .iter()
        .position(|a| *a == prefix)
        .map(|i| i + 1)
}
