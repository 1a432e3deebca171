/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::record::person::tokens;
use crate::record::{BibRecord, EntryType, Person};
use biblatex::{Chunk, Chunks, Entry};
use indexmap::IndexMap;

/// Font switches dropped during decoding; their argument text is kept.
const FONT_COMMANDS: [&str; 12] = [
    "em", "emph", "it", "textit", "bf", "textbf", "sc", "textsc", "tt", "texttt", "sl", "textsl",
];

/// Fields holding URLs or identifiers, flattened without LaTeX decoding.
const VERBATIM_FIELDS: [&str; 5] = ["url", "doi", "eprint", "file", "urldate"];

/// Flatten a parsed field into plain text, decoding LaTeX in text chunks.
pub fn chunks_to_string(chunks: &Chunks) -> String {
    chunks
        .iter()
        .map(|c| match &c.v {
            Chunk::Normal(s) | Chunk::Verbatim(s) => decode_latex(s),
            Chunk::Math(s) => s.clone(),
        })
        .collect::<String>()
}

fn chunks_to_raw_string(chunks: &Chunks) -> String {
    chunks
        .iter()
        .map(|c| match &c.v {
            Chunk::Normal(s) | Chunk::Verbatim(s) | Chunk::Math(s) => s.as_str(),
        })
        .collect::<String>()
}

/// Decode the LaTeX that survives parsing in ordinary text.
///
/// `~` becomes a non-breaking space, font switches such as `\em` and
/// `\textbf` are removed, and escaped specials (`\&`, `\%`, ...) become the
/// plain character. Other commands are left alone.
pub fn decode_latex(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '~' => out.push('\u{a0}'),
            '\\' => match chars.peek().copied() {
                Some(p) if "&%$#_{}".contains(p) => {
                    out.push(p);
                    chars.next();
                }
                Some(p) if p.is_ascii_alphabetic() => {
                    let mut name = String::new();
                    while let Some(&n) = chars.peek().filter(|n| n.is_ascii_alphabetic()) {
                        name.push(n);
                        chars.next();
                    }
                    if FONT_COMMANDS.contains(&name.as_str()) {
                        while chars.peek().is_some_and(|n| *n == ' ') {
                            chars.next();
                        }
                    } else {
                        out.push('\\');
                        out.push_str(&name);
                    }
                }
                _ => out.push(c),
            },
            '{' | '}' => {}
            _ => out.push(c),
        }
    }
    out
}

impl From<&biblatex::Person> for Person {
    fn from(p: &biblatex::Person) -> Self {
        Person {
            given: tokens(&p.given_name),
            family: tokens(&p.name),
            particle: tokens(&p.prefix),
            suffix: if p.suffix.trim().is_empty() {
                None
            } else {
                Some(p.suffix.trim().to_string())
            },
        }
    }
}

impl BibRecord {
    /// Convert a `biblatex` entry, keeping field order as the parser reports it.
    pub fn from_biblatex(entry: &Entry) -> Self {
        let tag = entry.entry_type.to_string().to_lowercase();

        let mut fields = IndexMap::new();
        for (name, chunks) in &entry.fields {
            let name = normalize_field_name(name);
            if name == "author" {
                continue;
            }
            let value = if VERBATIM_FIELDS.contains(&name.as_str()) {
                chunks_to_raw_string(chunks)
            } else {
                chunks_to_string(chunks)
            };
            fields.insert(name, value);
        }

        let authors = entry
            .author()
            .ok()
            .map(|persons| persons.iter().map(Person::from).collect::<Vec<_>>());

        BibRecord {
            key: entry.key.clone(),
            entry_type: EntryType::from_tag(&tag),
            tag,
            authors,
            fields,
            raw: None,
        }
    }
}

fn normalize_field_name(name: &str) -> String {
    let name = name.to_lowercase();
    match name.as_str() {
        "issue_date" => "issue-date".to_string(),
        _ => name,
    }
}
