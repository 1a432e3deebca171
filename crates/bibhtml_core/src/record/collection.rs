/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Ordered record collections built from BibTeX source text.
//!
//! The source is cut into top-level `@` blocks and every block is parsed on
//! its own, so one broken entry is reported as a [`ParseFailure`] instead of
//! taking the whole file down with it.

use crate::record::BibRecord;
use biblatex::Bibliography;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A block the parser could not turn into a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFailure {
    /// Citation key, when one could be read from the block header.
    pub key: Option<String>,
    pub raw: String,
    /// 1-based line of the opening `@`.
    pub start_line: usize,
    pub duplicate_key: bool,
    pub message: String,
}

/// Counts of the block kinds seen while parsing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStats {
    pub blocks: usize,
    pub entries: usize,
    pub comments: usize,
    pub strings: usize,
    pub preambles: usize,
    pub failures: usize,
}

/// Records in source order, plus whatever failed to parse.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub records: Vec<BibRecord>,
    pub failures: Vec<ParseFailure>,
    pub stats: BlockStats,
}

impl Collection {
    pub fn new(records: Vec<BibRecord>) -> Self {
        let stats = BlockStats {
            blocks: records.len(),
            entries: records.len(),
            ..Default::default()
        };
        Self {
            records,
            failures: Vec::new(),
            stats,
        }
    }

    /// Parse BibTeX source text.
    ///
    /// `strings` holds `@string` macro definitions made available to every
    /// entry; `@string` blocks in `source` itself apply to the entries that
    /// follow them.
    pub fn from_bibtex(source: &str, strings: &str) -> Self {
        let mut collection = Collection::default();
        let mut macros = strings.to_string();
        let mut seen: HashSet<String> = HashSet::new();

        for block in split_blocks(source) {
            collection.stats.blocks += 1;
            match block.kind.as_str() {
                "string" => {
                    collection.stats.strings += 1;
                    macros.push('\n');
                    macros.push_str(block.text);
                    continue;
                }
                "comment" => {
                    collection.stats.comments += 1;
                    continue;
                }
                "preamble" => {
                    collection.stats.preambles += 1;
                    continue;
                }
                _ => {}
            }

            let key = block_key(block.text);
            if let Some(k) = key.as_deref().filter(|k| seen.contains(*k)) {
                tracing::warn!(key = k, line = block.start_line, "duplicate citation key");
                collection.push_failure(ParseFailure {
                    key: key.clone(),
                    raw: block.text.to_string(),
                    start_line: block.start_line,
                    duplicate_key: true,
                    message: format!("duplicate citation key `{}`", k),
                });
                continue;
            }

            let parsed = Bibliography::parse(&format!("{}\n{}", macros, block.text));
            let entry = match &parsed {
                Ok(bib) => bib.iter().last(),
                Err(_) => None,
            };
            match (entry, &parsed) {
                (Some(entry), _) => {
                    let mut record = BibRecord::from_biblatex(entry);
                    record.raw = Some(block.text.to_string());
                    seen.insert(record.key.clone());
                    collection.stats.entries += 1;
                    collection.records.push(record);
                }
                (None, parsed) => {
                    let message = match parsed {
                        Err(e) => e.to_string(),
                        Ok(_) => "block contains no entry".to_string(),
                    };
                    tracing::warn!(line = block.start_line, %message, "failed to parse block");
                    collection.push_failure(ParseFailure {
                        key,
                        raw: block.text.to_string(),
                        start_line: block.start_line,
                        duplicate_key: false,
                        message,
                    });
                }
            }
        }

        collection
    }

    /// Append another collection, keeping both orders.
    pub fn extend(&mut self, other: Collection) {
        self.records.extend(other.records);
        self.failures.extend(other.failures);
        self.stats.blocks += other.stats.blocks;
        self.stats.entries += other.stats.entries;
        self.stats.comments += other.stats.comments;
        self.stats.strings += other.stats.strings;
        self.stats.preambles += other.stats.preambles;
        self.stats.failures += other.stats.failures;
    }

    fn push_failure(&mut self, failure: ParseFailure) {
        self.stats.failures += 1;
        self.failures.push(failure);
    }
}

struct Block<'a> {
    kind: String,
    text: &'a str,
    start_line: usize,
}

/// Cut source text into top-level `@kind{...}` / `@kind(...)` blocks.
///
/// Text between blocks is treated as an implicit comment and dropped. An
/// unterminated block ends where the next line-leading `@` begins (or at the
/// end of input) so the parser can report it.
fn split_blocks(source: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let bytes = source.as_bytes();
    let mut line = 1;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                line += 1;
                i += 1;
            }
            b'@' => {
                let start = i;
                let start_line = line;
                let mut j = i + 1;
                while j < bytes.len() && bytes[j].is_ascii_alphabetic() {
                    j += 1;
                }
                let kind = source[i + 1..j].to_lowercase();
                while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                    if bytes[j] == b'\n' {
                        line += 1;
                    }
                    j += 1;
                }

                let (open, close) = match bytes.get(j) {
                    Some(b'{') => (b'{', b'}'),
                    Some(b'(') => (b'(', b')'),
                    _ => {
                        // Not a block header; keep scanning after what was read.
                        i = j;
                        continue;
                    }
                };

                let mut depth = 0usize;
                let mut end = bytes.len();
                let mut line_start = false;
                while j < bytes.len() {
                    let b = bytes[j];
                    // An `@` opening a line starts the next block even if this one never closed.
                    if b == b'@' && line_start && depth > 0 {
                        end = j;
                        break;
                    }
                    if b == b'\n' {
                        line += 1;
                        line_start = true;
                    } else if !b.is_ascii_whitespace() {
                        line_start = false;
                    }
                    if b == open {
                        depth += 1;
                    } else if b == close {
                        depth -= 1;
                        if depth == 0 {
                            end = j + 1;
                            break;
                        }
                    }
                    j += 1;
                }

                blocks.push(Block {
                    kind,
                    text: &source[start..end],
                    start_line,
                });
                i = end;
            }
            _ => i += 1,
        }
    }

    blocks
}

/// Read the citation key from an entry header like `@article{key,`.
fn block_key(text: &str) -> Option<String> {
    let open = text.find(['{', '('])?;
    let rest = &text[open + 1..];
    let end = rest.find([',', '}', ')']).unwrap_or(rest.len());
    let key = rest[..end].trim();
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"% leading comment
@string{jsys = {J. Sys}}

@article{a2021,
  author = {Mortier, Richard},
  title = {First},
  journal = jsys,
  year = {2021},
}

@article{broken,
  author = {Mortier, Richard},
  title = {Second},

@inproceedings{b2020,
  author = {Lovelace, Ada},
  title = {Third},
  booktitle = {Proc. X},
  year = {2020},
}

@article{a2021,
  author = {Someone, Else},
  title = {Duplicate},
  year = {2019},
}
"#;

    #[test]
    fn test_splits_top_level_blocks() {
        let blocks = split_blocks(SOURCE);
        let kinds: Vec<_> = blocks.iter().map(|b| b.kind.as_str()).collect();
        assert_eq!(
            kinds,
            vec!["string", "article", "article", "inproceedings", "article"]
        );
        assert_eq!(blocks[0].start_line, 2);
        assert_eq!(blocks[1].start_line, 4);
    }

    #[test]
    fn test_keeps_order_and_reports_failures() {
        let collection = Collection::from_bibtex(SOURCE, "");
        let keys: Vec<_> = collection.records.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["a2021", "b2020"]);
        assert_eq!(collection.records[0].field("journal"), Some("J. Sys"));

        assert_eq!(collection.failures.len(), 2);
        assert_eq!(collection.failures[0].key.as_deref(), Some("broken"));
        assert!(!collection.failures[0].duplicate_key);
        assert!(collection.failures[1].duplicate_key);
        assert_eq!(collection.failures[1].key.as_deref(), Some("a2021"));

        assert_eq!(collection.stats.strings, 1);
        assert_eq!(collection.stats.entries, 2);
        assert_eq!(collection.stats.failures, 2);
        assert_eq!(collection.stats.blocks, 5);
    }

    #[test]
    fn test_external_strings_are_visible_to_entries() {
        let source = "@article{k, author = {Doe, Jane}, title = {T}, journal = jsys, year = {2001}}";
        let collection = Collection::from_bibtex(source, "@string{jsys = {Journal of Systems}}");
        assert!(collection.failures.is_empty());
        assert_eq!(
            collection.records[0].field("journal"),
            Some("Journal of Systems")
        );
    }

    #[test]
    fn test_block_key_reads_header() {
        assert_eq!(block_key("@article{ key1 ,\n").as_deref(), Some("key1"));
        assert_eq!(block_key("@misc(k2, title={x})").as_deref(), Some("k2"));
        assert_eq!(block_key("@misc{}"), None);
    }
}
