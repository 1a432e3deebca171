/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Value extraction from records.
//!
//! Each submodule derives one displayed element from a [`BibRecord`]:
//! field lookup with fallbacks, date normalization, author names, and the
//! venue triple. None of them mutate the record.
//!
//! [`BibRecord`]: bibhtml_core::BibRecord

pub mod contributor;
pub mod date;
pub mod field;
pub mod venue;

pub use contributor::format_authors;
pub use date::{normalize_date, NormalizedDate};
pub use field::resolve_field;
pub use venue::{resolve_venue, Venue, VenuePolicy};
