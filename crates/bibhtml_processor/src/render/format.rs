/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable serializers.

use super::Node;

/// Trait for turning a rendered node tree into text.
///
/// Implementations decide how elements, text and pre-escaped markup are
/// written; the processor never produces strings directly.
pub trait OutputFormat: Default + Clone {
    /// Append one node (and its descendants) to `out`.
    fn write(&self, node: &Node, out: &mut String);

    /// Serialize a sequence of top-level nodes.
    fn finish(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            self.write(node, &mut out);
        }
        out
    }
}
