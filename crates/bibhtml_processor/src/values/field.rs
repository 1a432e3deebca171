/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use bibhtml_core::BibRecord;

/// Look up the first candidate field with a non-blank value.
///
/// Candidates are tried in order. A field that exists but holds only
/// whitespace counts as absent here; use [`BibRecord::field`] to tell the
/// two apart.
pub fn resolve_field<'a, S: AsRef<str>>(record: &'a BibRecord, candidates: &[S]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|name| record.field(name.as_ref()))
        .find(|value| !value.trim().is_empty())
}
