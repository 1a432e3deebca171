/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Core data model for bibhtml.
//!
//! This crate holds the types shared by the rendering engine and the
//! command-line tool: parsed bibliographic records ([`BibRecord`]), the
//! people who wrote them ([`Person`]), the ordered [`Collection`] that an
//! upstream BibTeX parse produces, and the [`RenderConfig`] that
//! parameterizes one rendering profile.
//!
//! Records are built once (usually from `biblatex` entries) and are only
//! ever read afterwards; nothing in the engine writes back into them.

pub mod options;
pub mod record;

pub use options::{
    AuthorSeparators, ErrorPolicy, HighlightedAuthor, ListKind, MonthNames, RenderConfig,
    SiteConfig, VenuePriorities,
};
pub use record::{BibRecord, BlockStats, Collection, EntryType, ParseFailure, Person};
