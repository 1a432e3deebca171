/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! bibhtml Processor
//!
//! This crate turns parsed bibliographic records into the HTML fragments of
//! a publication list. For each record it picks the fields that supply the
//! venue, normalizes whichever date encoding is present, formats the author
//! list (initials, homepage links, a highlighted author), and assembles the
//! result into a markup tree with a fixed, styleable shape.
//!
//! # Example
//!
//! ```rust
//! use bibhtml_core::{BibRecord, HighlightedAuthor, ListKind, Person, RenderConfig};
//! use bibhtml_processor::render::{html::Html, OutputFormat};
//! use bibhtml_processor::Processor;
//!
//! let record = BibRecord::new("doe2010", "patent")
//!     .with_author(Person::new("Jane", "Doe"))
//!     .with_field("title", "Widget")
//!     .with_field("year", "2010");
//!
//! let config = RenderConfig {
//!     highlight: Some(HighlightedAuthor::new("Jane", "Doe")),
//!     ..Default::default()
//! };
//! let processor = Processor::new(config);
//! let rendered = processor.render_collection(&[record], ListKind::Ordered).unwrap();
//! let html = Html::default().finish(&rendered.nodes);
//!
//! assert!(html.starts_with(r#"<ol class="papers"><li id="doe2010" class="paper patent">"#));
//! assert!(html.contains(r#"<span class="author highlight">J. Doe</span>"#));
//! assert!(html.contains(r#"<span class="venue">Patent. </span>"#));
//! ```

pub mod error;
pub mod io;
pub mod processor;
pub mod render;
pub mod values;

pub use error::RenderError;
pub use processor::{entry_class, Processor, Rendered, Skipped};
pub use render::{Element, Node, OutputFormat};
pub use values::{normalize_date, resolve_field, resolve_venue, NormalizedDate, Venue, VenuePolicy};

pub use bibhtml_core::{BibRecord, Collection, RenderConfig};
