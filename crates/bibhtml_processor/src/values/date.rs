/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::error::RenderError;
use crate::values::field::resolve_field;
use bibhtml_core::{BibRecord, MonthNames};

/// A record's date, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDate {
    /// e.g. "12 May, 2020", "May, 2021" or "2021".
    pub display: String,
    /// The year exactly as found, for the year badge.
    pub year: String,
}

/// Normalize whichever date encoding the record carries.
///
/// Encodings are tried in this order:
/// 1. `issue-date`: `"<month> <year>"`.
/// 2. `date`: `"<year>-<month>-<day>"`, or the same three parts separated by
///    whitespace.
/// 3. `year` (required) with an optional `month`. The month may be compound,
///    `"<code>#<day>..."`, or a code followed by whitespace and a day.
///
/// A value that does not split into the expected parts, and a month code
/// missing from `months`, are reported as [`RenderError::DateMalformed`].
pub fn normalize_date(record: &BibRecord, months: &MonthNames) -> Result<NormalizedDate, RenderError> {
    let (year, code, day) = if let Some(value) = resolve_field(record, &["issue-date"]) {
        match value.split_whitespace().collect::<Vec<_>>().as_slice() {
            [month, year] => (year.to_string(), month.to_string(), String::new()),
            _ => return Err(malformed(record, "issue-date", value)),
        }
    } else if let Some(value) = resolve_field(record, &["date"]) {
        let parts = split_date(value).ok_or_else(|| malformed(record, "date", value))?;
        let [year, month, day] = parts;
        (year, month, day)
    } else {
        let year = resolve_field(record, &["year"])
            .ok_or_else(|| malformed(record, "year", ""))?
            .trim()
            .to_string();
        let (code, day) = split_month(record.field("month").unwrap_or(""));
        (year, code, day)
    };

    let month = months
        .lookup(&code)
        .ok_or_else(|| malformed(record, "month", &code))?;

    let display = match (month.is_empty(), day.is_empty()) {
        (true, _) => year.clone(),
        (false, true) => format!("{}, {}", month, year),
        (false, false) => format!("{} {}, {}", day, month, year),
    };

    Ok(NormalizedDate { display, year })
}

/// Split a `date` value into `[year, month, day]`.
fn split_date(value: &str) -> Option<[String; 3]> {
    let dashed: Vec<&str> = value.trim().split('-').collect();
    let parts = if dashed.len() == 3 {
        dashed
    } else {
        value.split_whitespace().collect()
    };
    match parts.as_slice() {
        [y, m, d] => Some([y.trim().to_string(), m.trim().to_string(), d.trim().to_string()]),
        _ => None,
    }
}

/// Split a month value into its code and trailing day text.
fn split_month(value: &str) -> (String, String) {
    let mut segments = value.split('#');
    let head = segments.next().unwrap_or("").trim();
    let rest: Vec<&str> = segments.collect();

    let (code, day_tokens): (&str, Vec<&str>) = if rest.is_empty() {
        // `jun # "~3"` arrives resolved, as "June~3" or, once decoded, with
        // a non-breaking space in place of the tilde.
        match head.split_once(|c: char| c.is_whitespace() || c == '~') {
            Some((code, day)) => (code, vec![day]),
            None => (head, Vec::new()),
        }
    } else {
        (head, rest)
    };

    let day = day_tokens
        .iter()
        .map(|t| t.trim().trim_matches(|c| matches!(c, '"' | '~' | '{' | '}')).trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (code.to_string(), day)
}

fn malformed(record: &BibRecord, field: &'static str, value: &str) -> RenderError {
    RenderError::DateMalformed {
        key: record.key.clone(),
        field,
        value: value.to_string(),
    }
}
