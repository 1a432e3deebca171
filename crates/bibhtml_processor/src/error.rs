/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Errors raised while loading inputs or rendering records.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A field every rendered entry needs (author, title) is absent.
    #[error("record `{key}` has no {field}")]
    RequiredFieldMissing { key: String, field: &'static str },

    /// None of the recognized date encodings fit the record.
    #[error("record `{key}` has a malformed {field}: `{value}`")]
    DateMalformed {
        key: String,
        field: &'static str,
        value: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),
}

impl RenderError {
    /// Citation key of the record the error belongs to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            RenderError::RequiredFieldMissing { key, .. }
            | RenderError::DateMalformed { key, .. } => Some(key),
            _ => None,
        }
    }
}
